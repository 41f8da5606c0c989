// ==========================================
// SIDESI 序列号检索 - 检索 API
// ==========================================
// 职责: 加载 → 检索 → 导出 的统一入口（供命令行/界面调用）
// 说明: 进度回调由调用方提供，API 不依赖任何界面
// ==========================================

use crate::api::error::ApiResult;
use crate::config::SearchConfig;
use crate::domain::report::SearchReport;
use crate::domain::table::Table;
use crate::engine::{ProgressObserver, SearchPipeline};
use crate::export::{ExportTarget, ReportExporter};
use crate::i18n::{t, t_with_args};
use crate::importer::TableLoader;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct SearchApi {
    config: SearchConfig,
    loader: TableLoader,
    pipeline: SearchPipeline,
}

impl SearchApi {
    pub fn new(config: SearchConfig) -> Self {
        let pipeline = SearchPipeline::new(&config);
        Self {
            config,
            loader: TableLoader::new(),
            pipeline,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 从文件检索
    pub fn search_files(
        &self,
        series_path: &Path,
        closures_path: &Path,
        progress: &mut dyn ProgressObserver,
    ) -> ApiResult<SearchReport> {
        info!(
            series = %series_path.display(),
            closures = %closures_path.display(),
            "开始加载文件"
        );
        let tables = self.loader.load_files(series_path, closures_path)?;
        Ok(self
            .pipeline
            .run(&tables.series, &tables.closures, progress)?)
    }

    /// 从上传内容检索（文件名用于判定格式）
    pub fn search_bytes(
        &self,
        series: (&str, &[u8]),
        closures: (&str, &[u8]),
        progress: &mut dyn ProgressObserver,
    ) -> ApiResult<SearchReport> {
        let tables = self.loader.load_bytes(series, closures)?;
        Ok(self
            .pipeline
            .run(&tables.series, &tables.closures, progress)?)
    }

    /// 从内存表检索（先做表头标准化）
    pub fn search_tables(
        &self,
        series: Table,
        closures: Table,
        progress: &mut dyn ProgressObserver,
    ) -> ApiResult<SearchReport> {
        let tables = self.loader.normalize_pair(series, closures)?;
        Ok(self
            .pipeline
            .run(&tables.series, &tables.closures, progress)?)
    }

    /// 导出报告
    ///
    /// # 参数
    /// - output_dir: 输出目录；None 时取配置（配置为空则下载目录/当前目录）
    /// - exporters: 依次执行的导出器
    pub fn export(
        &self,
        report: &SearchReport,
        output_dir: Option<&Path>,
        exporters: &[&dyn ReportExporter],
    ) -> ApiResult<Vec<PathBuf>> {
        let dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.resolve_output_dir());
        let target = ExportTarget::new(&dir, &self.config, report);

        let mut written = Vec::new();
        for exporter in exporters {
            written.extend(exporter.export(report, &target)?);
        }
        Ok(written)
    }

    /// 本地化的检索摘要
    pub fn summary_lines(&self, report: &SearchReport) -> Vec<String> {
        let summary = &report.summary;
        let mut lines = vec![
            t("search.completed"),
            t_with_args(
                "summary.total",
                &[("count", summary.total_candidates.to_string().as_str())],
            ),
            t_with_args(
                "summary.found",
                &[("count", summary.matched_count.to_string().as_str())],
            ),
            t_with_args(
                "summary.not_found",
                &[("count", summary.unmatched_count.to_string().as_str())],
            ),
            t_with_args(
                "summary.match_rate",
                &[("rate", format!("{:.1}", summary.match_rate()).as_str())],
            ),
        ];

        if summary.skipped_rows > 0 {
            lines.push(t_with_args(
                "summary.skipped_rows",
                &[("count", summary.skipped_rows.to_string().as_str())],
            ));
        }

        if summary.matched_count == 0 {
            lines.push(t("summary.no_matches"));
        } else {
            let preview = report.preview(self.config.preview_rows);
            lines.push(t_with_args(
                "summary.preview",
                &[("count", preview.len().to_string().as_str())],
            ));
            lines.push(report.matched.columns.join("\t"));
            for row in preview {
                lines.push(row.join("\t"));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::engine::{EngineError, NoOpProgress};
    use crate::i18n::set_locale;
    use crate::i18n::tests::LOCALE_TEST_LOCK;

    #[test]
    fn test_search_tables_normalizes_headers() {
        let api = SearchApi::new(SearchConfig::default());
        let series = Table::from_rows(vec![" serie "], vec![vec!["S1"]]);
        let closures = Table::from_rows(vec!["comentario", " zona"], vec![vec!["s1 ok", "rural"]]);

        let report = api
            .search_tables(series, closures, &mut NoOpProgress)
            .unwrap();

        assert_eq!(report.summary.matched_count, 1);
        assert_eq!(report.matched.value(0, "ZONA"), Some("ORIENTE"));
    }

    #[test]
    fn test_search_tables_without_serial_column() {
        let api = SearchApi::new(SearchConfig::default());
        let series = Table::from_rows(vec!["codigo"], vec![vec!["S1"]]);
        let closures = Table::from_rows(vec!["c"], vec![vec!["s1"]]);

        let result = api.search_tables(series, closures, &mut NoOpProgress);

        assert!(matches!(
            result,
            Err(ApiError::Engine(EngineError::NoSerialColumn { .. }))
        ));
    }

    #[test]
    fn test_search_tables_with_error_cells() {
        use crate::domain::cell::CellValue;

        let api = SearchApi::new(SearchConfig::default());
        let mut series = Table::new(vec!["SERIE".to_string()]);
        series.push_row(2, vec![CellValue::from("S100")]);
        series.push_row(3, vec![CellValue::Error("#N/A".to_string())]);
        let mut closures = Table::new(vec!["COMENTARIO".to_string(), "DD_TECI".to_string()]);
        closures.push_row(
            2,
            vec![
                CellValue::from("cambio equipo S100"),
                CellValue::Error("#DIV/0!".to_string()),
            ],
        );

        let report = api
            .search_tables(series, closures, &mut NoOpProgress)
            .unwrap();

        assert_eq!(report.summary.total_candidates, 1);
        assert_eq!(report.summary.matched_count, 1);
        assert_eq!(report.summary.skipped_rows, 0);
        assert_eq!(report.matched.value(0, "DD_TECI"), Some("#DIV/0!"));
    }

    #[test]
    fn test_summary_lines_zero_candidates() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("es");

        let api = SearchApi::new(SearchConfig::default());
        let series = Table::from_rows(vec!["SERIE"], vec![vec![" "]]);
        let closures = Table::from_rows(vec!["C"], vec![vec!["x"]]);
        let report = api
            .search_tables(series, closures, &mut NoOpProgress)
            .unwrap();

        let lines = api.summary_lines(&report);

        assert!(lines.iter().any(|l| l.contains("0.0")));
        assert!(lines.iter().any(|l| l == "No se encontraron coincidencias."));
    }
}
