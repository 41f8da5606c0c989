// ==========================================
// SIDESI 序列号检索 - 单元格值
// ==========================================
// 职责: 表格单元格的统一表示 + 唯一的"单元格 → 文本"转换口径
// 红线: 匹配、整形、导出列宽全部复用 to_text，不得另写转换
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 日期时间单元格的文本格式
pub const DATETIME_TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ==========================================
// CellValue - 单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// 电子表格错误值（如 #N/A、#DIV/0!），文本形式为错误码
    Error(String),
}

impl CellValue {
    /// 转换为文本（唯一口径）
    ///
    /// # 规则
    /// - Empty → ""
    /// - Text → 原样
    /// - Int → 十进制
    /// - Float → 整数值不带小数部分（12.0 → "12"），其余取最短往返表示；
    ///   NaN / 无穷 → None（不可转换）
    /// - Bool → "True" / "False"
    /// - DateTime → YYYY-MM-DD HH:MM:SS
    /// - Error → 错误码（"#N/A"）
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => Some(String::new()),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) if !f.is_finite() => None,
            CellValue::Float(f) => Some(f.to_string()),
            CellValue::Bool(true) => Some("True".to_string()),
            CellValue::Bool(false) => Some("False".to_string()),
            CellValue::DateTime(dt) => Some(dt.format(DATETIME_TEXT_FORMAT).to_string()),
            CellValue::Error(code) => Some(code.clone()),
        }
    }

    /// 是否为空白（Empty 或仅含空白字符的文本）
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 从原始文本构造（空白串视为 Empty）
    pub fn from_raw_text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(raw.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Float(v) if !v.is_finite() => write!(f, "{}", v),
            other => write!(f, "{}", other.to_text().unwrap_or_default()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}
