// ==========================================
// SIDESI 序列号检索 - API层错误类型
// ==========================================
// 职责: 汇总各层结构化错误；user_message 是唯一生成面向用户文案的地方
// 说明: 检索"全有或全无"，任何错误都不产出部分报告
// ==========================================

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::export::ExportError;
use crate::i18n::t_with_args;
use crate::importer::TableLoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Load(#[from] TableLoadError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// 面向用户的本地化错误文案
    pub fn user_message(&self) -> String {
        let detail = match self {
            ApiError::Load(err) => {
                let role = err.role.to_string();
                let message = err.source.to_string();
                t_with_args(
                    "errors.load",
                    &[("role", role.as_str()), ("message", message.as_str())],
                )
            }
            ApiError::Engine(EngineError::NoSerialColumn { token }) => {
                t_with_args("errors.no_serial_column", &[("token", token.as_str())])
            }
            ApiError::Engine(err) => err.to_string(),
            ApiError::Export(err) => {
                let message = err.to_string();
                t_with_args("errors.export", &[("message", message.as_str())])
            }
            ApiError::Config(err) => {
                let message = err.to_string();
                t_with_args("errors.config", &[("message", message.as_str())])
            }
        };
        t_with_args("errors.processing", &[("message", detail.as_str())])
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_locale;
    use crate::i18n::tests::LOCALE_TEST_LOCK;
    use crate::importer::{LoadError, TableRole};

    #[test]
    fn test_user_message_no_serial_column() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("es");

        let err = ApiError::from(EngineError::NoSerialColumn {
            token: "SERIE".to_string(),
        });

        let msg = err.user_message();
        assert!(msg.starts_with("Error durante el procesamiento"));
        assert!(msg.contains("'SERIE'"));
    }

    #[test]
    fn test_user_message_load_error_names_role() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("es");

        let err = ApiError::from(TableLoadError {
            role: TableRole::Closures,
            source: LoadError::FileNotFound("cierres.xlsx".to_string()),
        });

        let msg = err.user_message();
        assert!(msg.contains("cierres"));
        assert!(msg.contains("cierres.xlsx"));
    }
}
