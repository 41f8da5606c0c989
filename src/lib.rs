// ==========================================
// SIDESI 序列号检索 - 核心库
// ==========================================
// 用途: 将库存序列号与维修关单记录比对，
//       输出命中明细与未命中序列号
// 流程: 加载 → 序列号提取 → 匹配 → 整形 → 报告 → 导出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 单元格/表格/报告
pub mod domain;

// 导入层 - 表格文件读取
pub mod importer;

// 引擎层 - 检索规则
pub mod engine;

// 导出层 - 产物写出
pub mod export;

// 配置层 - 检索参数
pub mod config;

// API 层 - 统一入口与错误边界
pub mod api;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{ApiError, ApiResult, SearchApi};
pub use config::{ConfigManager, SearchConfig};
pub use domain::{CellValue, MatchRecord, ResultTable, Row, SearchReport, SearchSummary, Table};
pub use engine::{
    CandidateSet, EngineError, MatchEngine, NoOpProgress, ProgressObserver, ResultShaper,
    SearchPipeline, SerialExtractor,
};
pub use export::{CsvWorkbookExporter, JsonReportExporter, ReportExporter, XlsxWorkbookExporter};
pub use importer::{LoadError, TableLoader};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Buscador de Series SIDESI";
