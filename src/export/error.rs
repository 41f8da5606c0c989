// ==========================================
// SIDESI 序列号检索 - 导出错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no se pudo crear el directorio {path}: {message}")]
    CreateDirError { path: String, message: String },

    #[error("error de escritura {path}: {message}")]
    WriteError { path: String, message: String },

    #[error("error al serializar el reporte: {0}")]
    SerializeError(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializeError(err.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
