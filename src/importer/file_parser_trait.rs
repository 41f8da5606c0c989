// ==========================================
// SIDESI 序列号检索 - 文件解析 Trait
// ==========================================
// 职责: 定义表格文件解析接口（不包含实现）
// 红线: 解析器只产出原始表头，表头标准化由 TableLoader 负责
// ==========================================

use crate::domain::table::Table;
use crate::importer::error::LoadResult;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格（首行为表头）
    ///
    /// # 返回
    /// - Ok(Table): 原始表头 + 数据行（跳过完全空白的行）
    /// - Err(LoadError): 文件不存在、格式不支持、内容无法解析
    fn parse_table(&self, file_path: &Path) -> LoadResult<Table>;

    /// 解析内存中的文件内容（上传场景）
    fn parse_bytes(&self, bytes: &[u8]) -> LoadResult<Table>;
}
