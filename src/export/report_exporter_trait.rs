// ==========================================
// SIDESI 序列号检索 - 报告导出 Trait
// ==========================================
// 职责: 定义导出接口（不包含实现）
// 实现者: XlsxWorkbookExporter, CsvWorkbookExporter, JsonReportExporter
// ==========================================

use crate::domain::report::SearchReport;
use crate::export::artifact::ExportTarget;
use crate::export::error::ExportResult;
use std::path::PathBuf;

pub trait ReportExporter {
    /// 导出报告
    ///
    /// # 返回
    /// - Ok(Vec<PathBuf>): 实际写出的文件
    /// - Err(ExportError): 目录创建/写入/序列化失败
    fn export(&self, report: &SearchReport, target: &ExportTarget) -> ExportResult<Vec<PathBuf>>;
}
