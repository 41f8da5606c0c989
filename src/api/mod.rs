// ==========================================
// SIDESI 序列号检索 - API 层
// ==========================================
// 职责: 对外统一入口 + 错误边界（唯一生成用户文案的位置）
// ==========================================

pub mod error;
pub mod search_api;

pub use error::{ApiError, ApiResult};
pub use search_api::SearchApi;
