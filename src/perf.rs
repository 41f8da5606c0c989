use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static PERF_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// 性能统计 Guard：drop 时记录 elapsed_ms 与嵌套深度
///
/// 使用方式：
/// ```ignore
/// let _perf = buscador_series::perf::PerfGuard::new("match_serials");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    depth: u32,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        let depth = PERF_DEPTH.with(|d| {
            let depth = d.get();
            d.set(depth.saturating_add(1));
            depth
        });
        Self {
            op,
            start: Instant::now(),
            depth,
        }
    }

    /// 已耗时（毫秒）
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        tracing::info!(
            target: "perf",
            op = self.op,
            depth = self.depth,
            elapsed_ms,
            "done"
        );

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
