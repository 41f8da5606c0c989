// ==========================================
// SIDESI 序列号检索 - 导出产物布局
// ==========================================
// 职责: 产物命名（带生成时间）、工作表布局、列宽自适应
// 命名: <前缀>_<YYYY-MM-DD_HH-MM>.xlsx
// 列宽: max(最宽单元格字符数, 表头字符数) + 2
// ==========================================

use crate::config::SearchConfig;
use crate::domain::report::{ResultTable, SearchReport};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 产物时间戳格式
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// 列宽额外留白
pub const COLUMN_WIDTH_PADDING: usize = 2;

/// 产物文件名
pub fn artifact_file_name(prefix: &str, generated_at: &NaiveDateTime) -> String {
    format!(
        "{}_{}.xlsx",
        prefix,
        generated_at.format(ARTIFACT_TIMESTAMP_FORMAT)
    )
}

/// 每列宽度（字符数）
pub fn column_widths(table: &ResultTable) -> Vec<usize> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(col_idx, header)| {
            let widest_cell = table
                .rows
                .iter()
                .filter_map(|row| row.get(col_idx))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            widest_cell.max(header.chars().count()) + COLUMN_WIDTH_PADDING
        })
        .collect()
}

// ==========================================
// SheetLayout - 工作表布局
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub name: String,
    pub columns: Vec<String>,
    pub widths: Vec<usize>,
    pub rows: usize,
}

impl SheetLayout {
    pub fn of(name: &str, table: &ResultTable) -> Self {
        Self {
            name: name.to_string(),
            columns: table.columns.clone(),
            widths: column_widths(table),
            rows: table.len(),
        }
    }
}

// ==========================================
// ExportTarget - 导出目标
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    /// 输出目录
    pub dir: PathBuf,
    /// 产物文件名（含 .xlsx 扩展名）
    pub artifact_name: String,
    pub matched_sheet: String,
    pub unmatched_sheet: String,
}

impl ExportTarget {
    pub fn new(dir: &Path, config: &SearchConfig, report: &SearchReport) -> Self {
        Self {
            dir: dir.to_path_buf(),
            artifact_name: artifact_file_name(&config.artifact_prefix, &report.generated_at),
            matched_sheet: config.matched_sheet_name.clone(),
            unmatched_sheet: config.unmatched_sheet_name.clone(),
        }
    }

    /// 不含扩展名的产物名
    pub fn stem(&self) -> &str {
        self.artifact_name
            .strip_suffix(".xlsx")
            .unwrap_or(&self.artifact_name)
    }

    /// 工作簿路径（目录 + 产物名）
    pub fn workbook_path(&self) -> PathBuf {
        self.dir.join(&self.artifact_name)
    }

    /// 产物目录下的同名文件（替换扩展名/追加后缀）
    pub fn sibling(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}{}", self.stem(), suffix))
    }

    /// 报告对应的工作表布局（未命中表仅在存在未命中时出现）
    pub fn sheet_layouts(&self, report: &SearchReport) -> Vec<SheetLayout> {
        let mut sheets = vec![SheetLayout::of(&self.matched_sheet, &report.matched)];
        if let Some(unmatched) = report.unmatched_table() {
            sheets.push(SheetLayout::of(&self.unmatched_sheet, &unmatched));
        }
        sheets
    }
}
