// ==========================================
// SIDESI 序列号检索 - 表格加载器
// ==========================================
// 职责: 读取 Series / Closure 两张表，并标准化表头（TRIM + UPPER）
// 红线: 表头标准化在整个检索过程中永久生效；不修改输入文件
// ==========================================

use crate::domain::table::Table;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{LoadError, LoadResult};
use crate::importer::file_parser::UniversalFileParser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::info;

// ==========================================
// TableRole - 表角色
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableRole {
    /// 序列号/库存表
    Series,
    /// 关单/维修记录表
    Closures,
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRole::Series => write!(f, "series"),
            TableRole::Closures => write!(f, "cierres"),
        }
    }
}

/// 带表角色的加载错误
#[derive(Error, Debug)]
#[error("{role}: {source}")]
pub struct TableLoadError {
    pub role: TableRole,
    #[source]
    pub source: LoadError,
}

// ==========================================
// LoadedTables - 加载结果
// ==========================================
#[derive(Debug, Clone)]
pub struct LoadedTables {
    pub series: Table,
    pub closures: Table,
}

// ==========================================
// TableLoader - 表格加载器
// ==========================================
pub struct TableLoader {
    parser: UniversalFileParser,
    cleaner: DataCleaner,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLoader {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            cleaner: DataCleaner,
        }
    }

    /// 从文件加载两张表
    pub fn load_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        series_path: P,
        closures_path: Q,
    ) -> Result<LoadedTables, TableLoadError> {
        let series = self
            .parser
            .parse(series_path.as_ref())
            .map_err(|source| TableLoadError {
                role: TableRole::Series,
                source,
            })?;
        let closures = self
            .parser
            .parse(closures_path.as_ref())
            .map_err(|source| TableLoadError {
                role: TableRole::Closures,
                source,
            })?;

        self.normalize_pair(series, closures)
    }

    /// 从上传内容加载两张表（文件名仅用于判定格式）
    pub fn load_bytes(
        &self,
        series: (&str, &[u8]),
        closures: (&str, &[u8]),
    ) -> Result<LoadedTables, TableLoadError> {
        let series_table =
            self.parser
                .parse_bytes(series.0, series.1)
                .map_err(|source| TableLoadError {
                    role: TableRole::Series,
                    source,
                })?;
        let closures_table =
            self.parser
                .parse_bytes(closures.0, closures.1)
                .map_err(|source| TableLoadError {
                    role: TableRole::Closures,
                    source,
                })?;

        self.normalize_pair(series_table, closures_table)
    }

    /// 已在内存中的两张表，只做表头标准化
    pub fn normalize_pair(
        &self,
        series: Table,
        closures: Table,
    ) -> Result<LoadedTables, TableLoadError> {
        let series = self
            .normalize_headers(series)
            .map_err(|source| TableLoadError {
                role: TableRole::Series,
                source,
            })?;
        let closures = self
            .normalize_headers(closures)
            .map_err(|source| TableLoadError {
                role: TableRole::Closures,
                source,
            })?;

        info!(
            series_rows = series.len(),
            series_columns = series.columns().len(),
            closure_rows = closures.len(),
            closure_columns = closures.columns().len(),
            "表格加载完成"
        );

        Ok(LoadedTables { series, closures })
    }

    /// 表头 TRIM + UPPER
    pub fn normalize_headers(&self, table: Table) -> LoadResult<Table> {
        let columns = self.cleaner.normalize_headers(table.columns());
        Ok(table.with_columns(columns)?)
    }
}
