// ==========================================
// SIDESI 序列号检索 - 数据清洗器
// ==========================================
// 职责: TRIM / UPPER / NULL 标准化 + 表头标准化
// ==========================================

use crate::domain::cell::CellValue;

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str, uppercase: bool) -> String {
        let trimmed = value.trim();
        if uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        }
    }

    /// 空白串统一为 None，其余 TRIM
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 单元格 → 清洗后的文本（错误值、不可转换或空白时为 None）
    pub fn clean_cell(&self, cell: &CellValue) -> Option<String> {
        match cell {
            CellValue::Error(_) => None,
            other => self.normalize_null(other.to_text()),
        }
    }

    /// 表头标准化: TRIM + UPPER；空表头命名为 "UNNAMED: <列序号>"
    pub fn normalize_header(&self, raw: &str, col_idx: usize) -> String {
        let cleaned = self.clean_text(raw, true);
        if cleaned.is_empty() {
            format!("UNNAMED: {}", col_idx)
        } else {
            cleaned
        }
    }

    pub fn normalize_headers(&self, raw: &[String]) -> Vec<String> {
        raw.iter()
            .enumerate()
            .map(|(idx, h)| self.normalize_header(h, idx))
            .collect()
    }
}
