// ==========================================
// SIDESI 序列号检索 - 进度通知
// ==========================================
// 职责: 每个候选序列号处理完成后通知调用方（命中或未命中）
// 说明: 引擎不依赖任何界面；无界面的调用方使用 NoOpProgress
// ==========================================

/// 检索进度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// 已处理的候选数
    pub resolved: usize,
    /// 候选总数
    pub total: usize,
}

impl SearchProgress {
    /// 完成比例（0.0 ~ 1.0）；total 为 0 时视为已完成
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.resolved as f64 / self.total as f64
    }

    /// 完成百分比（整数，向下取整）
    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).floor().min(100.0) as u8
    }
}

/// 进度观察者 Trait
///
/// 闭包 `FnMut(f64)` 自动实现此 trait，参数为完成比例
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: SearchProgress);
}

impl<F> ProgressObserver for F
where
    F: FnMut(f64),
{
    fn on_progress(&mut self, progress: SearchProgress) {
        self(progress.fraction())
    }
}

/// 空操作进度观察者
pub struct NoOpProgress;

impl ProgressObserver for NoOpProgress {
    fn on_progress(&mut self, _progress: SearchProgress) {}
}
