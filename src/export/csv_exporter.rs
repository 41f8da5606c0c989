// ==========================================
// SIDESI 序列号检索 - CSV 导出器
// ==========================================
// 每个工作表写一个 CSV 文件:
//   <产物名>__Coincidencias.csv   （始终写出，无命中时只有表头）
//   <产物名>__No_encontradas.csv  （仅在存在未命中时写出）
// ==========================================

use crate::domain::report::{ResultTable, SearchReport};
use crate::export::artifact::ExportTarget;
use crate::export::error::{ExportError, ExportResult};
use crate::export::report_exporter_trait::ReportExporter;
use csv::WriterBuilder;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct CsvWorkbookExporter;

impl CsvWorkbookExporter {
    fn write_sheet(&self, path: &Path, table: &ResultTable) -> ExportResult<()> {
        let write_err = |e: csv::Error| ExportError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut writer = WriterBuilder::new().from_path(path).map_err(write_err)?;
        writer.write_record(&table.columns).map_err(write_err)?;
        for row in &table.rows {
            writer.write_record(row).map_err(write_err)?;
        }
        writer.flush().map_err(|e| ExportError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

pub(crate) fn ensure_dir(dir: &Path) -> ExportResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::CreateDirError {
        path: dir.display().to_string(),
        message: e.to_string(),
    })
}

impl ReportExporter for CsvWorkbookExporter {
    fn export(&self, report: &SearchReport, target: &ExportTarget) -> ExportResult<Vec<PathBuf>> {
        ensure_dir(&target.dir)?;

        let mut written = Vec::new();

        let matched_path = target.sibling(&format!("__{}.csv", target.matched_sheet));
        self.write_sheet(&matched_path, &report.matched)?;
        written.push(matched_path);

        if let Some(unmatched) = report.unmatched_table() {
            let unmatched_path = target.sibling(&format!("__{}.csv", target.unmatched_sheet));
            self.write_sheet(&unmatched_path, &unmatched)?;
            written.push(unmatched_path);
        }

        info!(files = ?written, "CSV 导出完成");
        Ok(written)
    }
}
