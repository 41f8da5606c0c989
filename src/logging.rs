// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=buscador_series=trace,perf=warn
///
/// # 示例
/// ```no_run
/// use buscador_series::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 日志写 stderr，stdout 留给检索摘要
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 日志格式环境变量（值为 json 时输出 JSON 日志）
pub const LOG_FORMAT_ENV: &str = "BUSCADOR_LOG_FORMAT";

/// 按 BUSCADOR_LOG_FORMAT 选择日志格式
pub fn init_from_env() {
    match std::env::var(LOG_FORMAT_ENV) {
        Ok(format) if format.eq_ignore_ascii_case("json") => init_json(),
        _ => init(),
    }
}

/// 初始化 JSON 格式日志（供外部采集）
pub fn init_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
