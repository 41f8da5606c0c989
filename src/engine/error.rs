// ==========================================
// SIDESI 序列号检索 - 引擎层错误类型
// ==========================================
// NoSerialColumn: 致命，匹配前中止
// RowCoercion: 单行级，匹配引擎内部捕获并按"未命中"处理
// InvariantViolation: 内部错误，不产出部分报告
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("no se encontró ninguna columna con '{token}' en el archivo de series")]
    NoSerialColumn { token: String },

    #[error("fila {row}: la columna {column} no se puede convertir a texto ({value})")]
    RowCoercion {
        row: usize,
        column: String,
        value: String,
    },

    #[error("inconsistencia interna: {0}")]
    InvariantViolation(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
