// ==========================================
// SIDESI 序列号检索 - 序列号提取器
// ==========================================
// 职责: 从 Series 表所有名称含 "SERIE" 的列收集候选序列号
// 规则: 转文本 → 丢弃空白 → TRIM → 跨列合并 → 精确去重
// 红线: 无任何序列号列时报 NoSerialColumn；有列但全空时返回空集合
// ==========================================

use crate::domain::table::Table;
use crate::engine::error::{EngineError, EngineResult};
use crate::importer::data_cleaner::DataCleaner;
use std::collections::HashSet;
use tracing::info;

// ==========================================
// CandidateSet - 候选序列号集合
// ==========================================
// 去重口径: TRIM 后精确相等（区分大小写，"abc" 与 "ABC" 是两个候选）
// 迭代顺序: 首次出现顺序（列顺序、行顺序）。调用方不应依赖该顺序，
// 测试只断言成员与数量
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入候选；已存在时返回 false
    pub fn insert(&mut self, serial: String) -> bool {
        if self.seen.contains(&serial) {
            return false;
        }
        self.seen.insert(serial.clone());
        self.ordered.push(serial);
        true
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.seen.contains(serial)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered.iter().map(String::as_str)
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        for serial in iter {
            set.insert(serial);
        }
        set
    }
}

// ==========================================
// SerialExtractor - 序列号提取器
// ==========================================
pub struct SerialExtractor {
    token: String,
    cleaner: DataCleaner,
}

impl SerialExtractor {
    /// token: 列名识别片段（与标准化后的列名做子串匹配）
    pub fn new(token: &str) -> Self {
        Self {
            token: token.trim().to_uppercase(),
            cleaner: DataCleaner,
        }
    }

    /// 序列号列名列表
    pub fn serial_columns<'a>(&self, series: &'a Table) -> Vec<&'a str> {
        column_names(series, &series.columns_containing(&self.token))
    }

    /// 提取候选序列号
    pub fn extract(&self, series: &Table) -> EngineResult<CandidateSet> {
        let column_indices = series.columns_containing(&self.token);
        if column_indices.is_empty() {
            return Err(EngineError::NoSerialColumn {
                token: self.token.clone(),
            });
        }

        let mut candidates = CandidateSet::new();
        let mut raw_values = 0usize;
        for col_idx in &column_indices {
            for cell in series.column_values(*col_idx) {
                if let Some(serial) = self.cleaner.clean_cell(cell) {
                    raw_values += 1;
                    candidates.insert(serial);
                }
            }
        }

        info!(
            serial_columns = ?column_names(series, &column_indices),
            raw_values,
            candidates = candidates.len(),
            "候选序列号提取完成"
        );
        Ok(candidates)
    }
}

fn column_names<'a>(series: &'a Table, indices: &[usize]) -> Vec<&'a str> {
    indices
        .iter()
        .map(|idx| series.columns()[*idx].as_str())
        .collect()
}
