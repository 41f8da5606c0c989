// ==========================================
// SIDESI 序列号检索 - JSON 导出器
// ==========================================
// 写出 <产物名>.json: 完整报告 + 工作表布局（含列宽）
// ==========================================

use crate::domain::report::SearchReport;
use crate::export::artifact::{ExportTarget, SheetLayout};
use crate::export::csv_exporter::ensure_dir;
use crate::export::error::{ExportError, ExportResult};
use crate::export::report_exporter_trait::ReportExporter;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Serialize)]
struct JsonDocument<'a> {
    artifact: &'a str,
    sheets: Vec<SheetLayout>,
    report: &'a SearchReport,
}

pub struct JsonReportExporter;

impl ReportExporter for JsonReportExporter {
    fn export(&self, report: &SearchReport, target: &ExportTarget) -> ExportResult<Vec<PathBuf>> {
        ensure_dir(&target.dir)?;

        let path = target.sibling(".json");
        let file = File::create(&path).map_err(|e| ExportError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let document = JsonDocument {
            artifact: &target.artifact_name,
            sheets: target.sheet_layouts(report),
            report,
        };
        serde_json::to_writer_pretty(BufWriter::new(file), &document)?;

        info!(path = %path.display(), "JSON 导出完成");
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::domain::report::ResultTable;
    use crate::engine::ReportBuilder;
    use tempfile::tempdir;

    #[test]
    fn test_json_export_contains_layout_and_summary() {
        let dir = tempdir().unwrap();
        let report = ReportBuilder::new("SERIES_NO_ENCONTRADAS")
            .build(
                ResultTable::new(vec!["SERIE".to_string()]),
                vec!["S9".to_string()],
                1,
                0,
                0,
            )
            .unwrap();
        let target = ExportTarget::new(dir.path(), &SearchConfig::default(), &report);

        let files = JsonReportExporter.export(&report, &target).unwrap();

        let raw = std::fs::read_to_string(&files[0]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["report"]["summary"]["unmatched_count"], 1);
        assert_eq!(value["sheets"][0]["name"], "Coincidencias");
        assert_eq!(value["sheets"][1]["name"], "No_encontradas");
        assert_eq!(value["sheets"][1]["widths"][0], 23);
    }
}
