// ==========================================
// SIDESI 序列号检索 - 领域模型层
// ==========================================
// 职责: 定义单元格、表格、匹配结果等领域实体
// 红线: 不含文件读写逻辑,不含匹配逻辑
// ==========================================

pub mod cell;
pub mod report;
pub mod table;

// 重导出核心类型
pub use cell::CellValue;
pub use report::{MatchRecord, ResultTable, SearchReport, SearchSummary, SERIAL_FIELD};
pub use table::{ColumnCountMismatch, Row, Table};
