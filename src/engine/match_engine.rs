// ==========================================
// SIDESI 序列号检索 - 匹配引擎
// ==========================================
// 职责: 在 Closure 表中查找每个候选序列号
// 规则:
// 1. 行检索文本 = 所有单元格转文本后以单个空格拼接，再转小写
// 2. 候选转小写后做字面子串匹配（不是正则，特殊字符按字面处理）
// 3. 按表中原始顺序扫描，首个命中行即停止（首行优先，不得改变）
// 4. 未命中任何行的候选进入未命中列表
// 红线: 单行无法转文本时记 RowCoercion 警告并按"未命中"处理，不中止检索
// ==========================================
// 复杂度: O(候选数 × 行数 × 行文本长度)，不建索引
// 行检索文本只构建一次，供所有候选复用
// ==========================================

use crate::domain::report::MatchRecord;
use crate::domain::table::{Row, Table};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::progress::{ProgressObserver, SearchProgress};
use crate::engine::serial_extractor::CandidateSet;
use tracing::{debug, warn};

// ==========================================
// MatchOutcome - 匹配结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    /// 命中记录（顺序 = 候选迭代顺序）
    pub matched: Vec<MatchRecord>,

    /// 未命中的候选（原始大小写）
    pub unmatched: Vec<String>,

    /// 参与扫描的 Closure 行数
    pub closure_rows: usize,

    /// 无法转文本而跳过的行
    pub skipped_rows: Vec<EngineError>,
}

// ==========================================
// SearchIndex - 行检索文本
// ==========================================
// 与 Closure 表行一一对应；None 表示该行无法转文本
pub struct SearchIndex {
    texts: Vec<Option<String>>,
}

impl SearchIndex {
    /// 从第一行开始按顺序查找首个包含 needle 的行
    ///
    /// needle 必须已转小写
    pub fn find_first(&self, needle: &str) -> Option<usize> {
        self.texts.iter().position(|text| match text {
            Some(t) => t.contains(needle),
            None => false,
        })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

// ==========================================
// MatchEngine - 匹配引擎
// ==========================================
pub struct MatchEngine;

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    pub fn new() -> Self {
        Self
    }

    /// 构建单行检索文本
    ///
    /// # 返回
    /// - Ok(String): 小写的拼接文本
    /// - Err(RowCoercion): 某个单元格无法转文本
    pub fn build_search_text(&self, columns: &[String], row: &Row) -> EngineResult<String> {
        let mut parts = Vec::with_capacity(row.values.len());
        for (col_idx, cell) in row.values.iter().enumerate() {
            let text = cell.to_text().ok_or_else(|| EngineError::RowCoercion {
                row: row.row_number,
                column: columns.get(col_idx).cloned().unwrap_or_default(),
                value: cell.to_string(),
            })?;
            parts.push(text);
        }
        Ok(parts.join(" ").to_lowercase())
    }

    /// 为整张 Closure 表构建检索文本（单行失败不影响其他行）
    pub fn build_index(&self, closures: &Table) -> (SearchIndex, Vec<EngineError>) {
        let mut texts = Vec::with_capacity(closures.len());
        let mut skipped = Vec::new();

        for row in closures.rows() {
            match self.build_search_text(closures.columns(), row) {
                Ok(text) => texts.push(Some(text)),
                Err(err) => {
                    warn!(error = %err, "行无法转换为文本，按未命中处理");
                    texts.push(None);
                    skipped.push(err);
                }
            }
        }

        (SearchIndex { texts }, skipped)
    }

    /// 执行匹配
    ///
    /// # 参数
    /// - candidates: 候选序列号集合
    /// - closures: Closure 表（行顺序即源文件顺序）
    /// - progress: 每个候选处理完成后通知一次
    pub fn run(
        &self,
        candidates: &CandidateSet,
        closures: &Table,
        progress: &mut dyn ProgressObserver,
    ) -> MatchOutcome {
        let (index, skipped_rows) = self.build_index(closures);
        let total = candidates.len();

        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for (i, serial) in candidates.iter().enumerate() {
            let needle = serial.to_lowercase();

            match index.find_first(&needle) {
                Some(row_idx) => {
                    let row = &closures.rows()[row_idx];
                    debug!(serial, source_row = row.row_number, "命中");
                    matched.push(MatchRecord::from_row(closures.columns(), row, serial));
                }
                None => {
                    debug!(serial, "未命中");
                    unmatched.push(serial.to_string());
                }
            }

            progress.on_progress(SearchProgress {
                resolved: i + 1,
                total,
            });
        }

        MatchOutcome {
            matched,
            unmatched,
            closure_rows: index.len(),
            skipped_rows,
        }
    }
}
