// ==========================================
// SIDESI 序列号检索 - 匹配结果模型
// ==========================================
// 职责: 匹配记录 / 结果表 / 汇总统计 / 检索报告
// 生命周期: 单次检索内创建，创建后不可变
// ==========================================

use crate::domain::cell::CellValue;
use crate::domain::table::Row;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 匹配记录中写入候选序列号的保留字段
pub const SERIAL_FIELD: &str = "SERIE";

// ==========================================
// MatchRecord - 匹配记录
// ==========================================
// 一条 Closure 行的副本 + SERIE 字段（原始大小写的候选值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 命中的候选序列号（原始大小写）
    pub serial: String,

    /// 命中行在 Closure 源文件中的行号
    pub source_row: usize,

    /// 行字段（列名有序），SERIE 已覆写/追加
    pub fields: Vec<(String, CellValue)>,
}

impl MatchRecord {
    /// 复制一行并写入 SERIE 字段
    ///
    /// 源行已有 SERIE 列时覆写其值，否则追加到末尾
    pub fn from_row(columns: &[String], row: &Row, serial: &str) -> Self {
        let mut fields: Vec<(String, CellValue)> = columns
            .iter()
            .enumerate()
            .map(|(idx, col)| (col.clone(), row.get(idx).clone()))
            .collect();

        let mut overwritten = false;
        for (name, value) in fields.iter_mut() {
            if name == SERIAL_FIELD {
                *value = CellValue::Text(serial.to_string());
                overwritten = true;
            }
        }
        if !overwritten {
            fields.push((SERIAL_FIELD.to_string(), CellValue::Text(serial.to_string())));
        }

        Self {
            serial: serial.to_string(),
            source_row: row.row_number,
            fields,
        }
    }

    /// 按列名取值（首个同名字段）
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

// ==========================================
// ResultTable - 整形后的输出表（纯文本单元格）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按列名取某行的值
    pub fn value(&self, row_idx: usize, column: &str) -> Option<&str> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        self.rows
            .get(row_idx)
            .and_then(|row| row.get(col_idx))
            .map(String::as_str)
    }
}

// ==========================================
// SearchSummary - 汇总统计
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub matched_count: usize,
    pub unmatched_count: usize,
    pub total_candidates: usize,

    /// Closure 表参与扫描的行数
    pub closure_rows: usize,

    /// 因无法转换为文本而跳过的 Closure 行数
    pub skipped_rows: usize,
}

impl SearchSummary {
    /// 命中率（百分比）；无候选时为 0
    pub fn match_rate(&self) -> f64 {
        if self.total_candidates == 0 {
            return 0.0;
        }
        self.matched_count as f64 * 100.0 / self.total_candidates as f64
    }
}

// ==========================================
// SearchReport - 检索报告（交给导出方）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub run_id: Uuid,
    pub generated_at: NaiveDateTime,

    /// 命中结果（固定列结构）
    pub matched: ResultTable,

    /// 未命中的候选序列号
    pub unmatched: Vec<String>,

    pub summary: SearchSummary,

    /// 未命中表的列名
    pub unmatched_column: String,
}

impl SearchReport {
    /// 未命中表（单列）；全部命中时为 None
    pub fn unmatched_table(&self) -> Option<ResultTable> {
        if self.unmatched.is_empty() {
            return None;
        }
        Some(ResultTable {
            columns: vec![self.unmatched_column.clone()],
            rows: self.unmatched.iter().map(|s| vec![s.clone()]).collect(),
        })
    }

    /// 前 n 行命中结果（供调用方展示）
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        let end = n.min(self.matched.rows.len());
        &self.matched.rows[..end]
    }
}
