// ==========================================
// SIDESI 序列号检索 - 导入层
// ==========================================
// 职责: 读取外部表格文件，产出表头已标准化的内存表
// 支持: Excel, CSV, 上传内容
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod file_parser_trait;
pub mod table_loader;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{LoadError, LoadResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use file_parser_trait::FileParser;
pub use table_loader::{LoadedTables, TableLoadError, TableLoader, TableRole};
