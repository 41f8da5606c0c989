// ==========================================
// SIDESI 序列号检索 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 所有 LoadError 均为致命错误，检索立即中止
// ==========================================

use crate::domain::table::ColumnCountMismatch;
use thiserror::Error;

/// 表格加载错误
#[derive(Error, Debug)]
pub enum LoadError {
    // ===== 文件相关错误 =====
    #[error("archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("formato no soportado: {0} (solo .xlsx/.xlsm/.xls/.ods/.csv)")]
    UnsupportedFormat(String),

    #[error("error de lectura: {0}")]
    FileReadError(String),

    // ===== 解析错误 =====
    #[error("error al leer Excel: {0}")]
    ExcelParseError(String),

    #[error("error al leer CSV: {0}")]
    CsvParseError(String),

    #[error("el libro no contiene hojas")]
    NoSheets,

    #[error("la hoja '{0}' no tiene fila de encabezados")]
    MissingHeader(String),

    #[error(transparent)]
    HeaderMismatch(#[from] ColumnCountMismatch),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for LoadError {
    fn from(err: calamine::Error) -> Self {
        LoadError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type LoadResult<T> = Result<T, LoadError>;
