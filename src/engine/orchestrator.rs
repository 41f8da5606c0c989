// ==========================================
// SIDESI 序列号检索 - 引擎编排器
// ==========================================
// 用途: 按固定顺序串联各引擎
//   序列号提取 → 匹配 → 结果整形 → 报告构建
// 说明: 单线程同步执行，无跨次状态；任一步失败则不产出报告
// ==========================================

use crate::config::SearchConfig;
use crate::domain::report::SearchReport;
use crate::domain::table::Table;
use crate::engine::error::EngineResult;
use crate::engine::match_engine::MatchEngine;
use crate::engine::progress::ProgressObserver;
use crate::engine::report_builder::ReportBuilder;
use crate::engine::result_shaper::ResultShaper;
use crate::engine::serial_extractor::SerialExtractor;
use crate::perf::PerfGuard;
use tracing::info;

// ==========================================
// SearchPipeline - 检索流水线
// ==========================================
pub struct SearchPipeline {
    extractor: SerialExtractor,
    matcher: MatchEngine,
    shaper: ResultShaper,
    builder: ReportBuilder,
}

impl SearchPipeline {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            extractor: SerialExtractor::new(&config.serial_column_token),
            matcher: MatchEngine::new(),
            shaper: ResultShaper::from_config(config),
            builder: ReportBuilder::new(&config.unmatched_column_name),
        }
    }

    /// 执行检索
    ///
    /// # 参数
    /// - series: 表头已标准化的 Series 表
    /// - closures: 表头已标准化的 Closure 表
    /// - progress: 每个候选处理完成后通知
    ///
    /// # 返回
    /// - Ok(SearchReport): 完整报告
    /// - Err(NoSerialColumn): Series 表无序列号列（匹配前中止）
    pub fn run(
        &self,
        series: &Table,
        closures: &Table,
        progress: &mut dyn ProgressObserver,
    ) -> EngineResult<SearchReport> {
        let _perf = PerfGuard::new("search_pipeline");

        // ===== 1. 序列号提取 =====
        let candidates = {
            let _perf = PerfGuard::new("extract_serials");
            self.extractor.extract(series)?
        };
        info!(total = candidates.len(), "开始检索候选序列号");

        // ===== 2. 匹配 =====
        let outcome = {
            let _perf = PerfGuard::new("match_serials");
            self.matcher.run(&candidates, closures, progress)
        };

        // ===== 3. 整形 =====
        let shaped = self.shaper.shape(&outcome.matched);

        // ===== 4. 报告 =====
        let report = self.builder.build(
            shaped,
            outcome.unmatched,
            candidates.len(),
            outcome.closure_rows,
            outcome.skipped_rows.len(),
        )?;

        info!(
            run_id = %report.run_id,
            matched = report.summary.matched_count,
            unmatched = report.summary.unmatched_count,
            total = report.summary.total_candidates,
            skipped_rows = report.summary.skipped_rows,
            "检索完成"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::EngineError;
    use crate::engine::progress::NoOpProgress;

    #[test]
    fn test_pipeline_scenario() {
        let series = Table::from_rows(vec!["SERIE_1"], vec![vec!["S100"], vec!["S200"], vec![" "]]);
        let closures = Table::from_rows(
            vec!["COMENTARIO", "ZONA"],
            vec![vec!["closed ticket s100 zone", "urbano"]],
        );

        let report = SearchPipeline::new(&SearchConfig::default())
            .run(&series, &closures, &mut NoOpProgress)
            .unwrap();

        assert_eq!(report.summary.total_candidates, 2);
        assert_eq!(report.summary.matched_count, 1);
        assert_eq!(report.matched.value(0, "SERIE"), Some("S100"));
        assert_eq!(report.matched.value(0, "ZONA"), Some("CENTRO"));
        assert_eq!(report.unmatched, vec!["S200".to_string()]);
    }

    #[test]
    fn test_pipeline_halts_without_serial_column() {
        let series = Table::from_rows(vec!["ND"], vec![vec!["1"]]);
        let closures = Table::from_rows(vec!["C"], vec![vec!["x"]]);

        let result =
            SearchPipeline::new(&SearchConfig::default()).run(&series, &closures, &mut NoOpProgress);

        assert!(matches!(result, Err(EngineError::NoSerialColumn { .. })));
    }
}
