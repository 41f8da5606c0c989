// ==========================================
// SIDESI 序列号检索 - 配置层
// ==========================================
// 职责: 检索参数（列识别、输出列、区域映射、导出命名）
// 存储: 可选 JSON 文件，缺省取默认值
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{defaults, ConfigError, ConfigManager, SearchConfig};
