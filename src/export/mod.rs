// ==========================================
// SIDESI 序列号检索 - 导出层
// ==========================================
// 职责: 将 SearchReport 写为外部产物
// 工作表: Coincidencias（命中）/ No_encontradas（未命中，仅在存在时）
// ==========================================

pub mod artifact;
pub mod csv_exporter;
pub mod error;
pub mod json_exporter;
pub mod report_exporter_trait;
pub mod xlsx_exporter;

pub use artifact::{artifact_file_name, column_widths, ExportTarget, SheetLayout};
pub use csv_exporter::CsvWorkbookExporter;
pub use error::{ExportError, ExportResult};
pub use json_exporter::JsonReportExporter;
pub use report_exporter_trait::ReportExporter;
pub use xlsx_exporter::XlsxWorkbookExporter;
