// ==========================================
// SIDESI 序列号检索 - 表格模型
// ==========================================
// 职责: 行/表的内存表示（列名有序，行按原始顺序）
// 红线: 行顺序即源文件顺序，匹配的"首行优先"依赖此顺序
// ==========================================

use crate::domain::cell::CellValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 替换表头时列数不一致
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("el encabezado tiene {found} columnas, se esperaban {expected}")]
pub struct ColumnCountMismatch {
    pub expected: usize,
    pub found: usize,
}

// ==========================================
// Row - 数据行
// ==========================================
// 值与 Table.columns 按位置对齐；缺失的尾部单元格视为 Empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// 源文件中的行号（1 起，表头为第 1 行）
    pub row_number: usize,
    pub values: Vec<CellValue>,
}

impl Row {
    pub fn new(row_number: usize, values: Vec<CellValue>) -> Self {
        Self { row_number, values }
    }

    /// 按列位置取值
    pub fn get(&self, col_idx: usize) -> &CellValue {
        self.values.get(col_idx).unwrap_or(&CellValue::Empty)
    }

    /// 整行是否全部空白
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(CellValue::is_blank)
    }
}

// ==========================================
// Table - 数据表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 追加一行（按列数补齐/截断）
    pub fn push_row(&mut self, row_number: usize, mut values: Vec<CellValue>) {
        values.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(Row::new(row_number, values));
    }

    /// 按行构造（测试/内嵌调用方使用），行号从 2 开始模拟表头之后的数据行
    pub fn from_rows<C, R, V>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = Vec<V>>,
        V: Into<CellValue>,
    {
        let mut table = Table::new(columns.into_iter().map(Into::into).collect());
        for (idx, row) in rows.into_iter().enumerate() {
            table.push_row(idx + 2, row.into_iter().map(Into::into).collect());
        }
        table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 查找列位置（精确匹配，首个同名列）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 列名包含指定片段的所有列位置
    pub fn columns_containing(&self, token: &str) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(token))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// 按列位置遍历该列所有单元格
    pub fn column_values(&self, col_idx: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().map(move |row| row.get(col_idx))
    }

    /// 以新列名替换表头（列数不一致时拒绝，避免单元格错位）
    pub fn with_columns(self, columns: Vec<String>) -> Result<Self, ColumnCountMismatch> {
        if columns.len() != self.columns.len() {
            return Err(ColumnCountMismatch {
                expected: self.columns.len(),
                found: columns.len(),
            });
        }
        Ok(Self {
            columns,
            rows: self.rows,
        })
    }
}
