// ==========================================
// SIDESI 序列号检索 - 引擎层
// ==========================================
// 职责: 序列号提取、匹配、结果整形、报告构建
// 红线: 引擎不读写文件，所有失败以结构化错误返回
// ==========================================

pub mod error;
pub mod match_engine;
pub mod orchestrator;
pub mod progress;
pub mod report_builder;
pub mod result_shaper;
pub mod serial_extractor;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use match_engine::{MatchEngine, MatchOutcome, SearchIndex};
pub use orchestrator::SearchPipeline;
pub use progress::{NoOpProgress, ProgressObserver, SearchProgress};
pub use report_builder::ReportBuilder;
pub use result_shaper::{ResultShaper, ZoneRemap};
pub use serial_extractor::{CandidateSet, SerialExtractor};
