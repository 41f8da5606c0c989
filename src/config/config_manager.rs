// ==========================================
// SIDESI 序列号检索 - 配置管理器
// ==========================================
// 职责: 检索配置的加载、校验、默认值
// 存储: JSON 文件（可选），缺省字段取默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// 默认值
// ==========================================
pub mod defaults {
    pub const SERIAL_COLUMN_TOKEN: &str = "SERIE";
    pub const OUTPUT_COLUMNS: [&str; 9] = [
        "SERIE", "ND", "ZONA", "SEMANA", "ABRV_UI", "DEP", "COM_REP", "DD_TECI", "F_REP",
    ];
    pub const ZONE_COLUMN: &str = "ZONA";
    pub const ZONE_REMAP: [(&str, &str); 4] = [
        ("URBANO", "CENTRO"),
        ("RURAL", "ORIENTE"),
        ("OCCIDENTAL", "OCCIDENTE"),
        ("PARACENTRAL", "PARACENTRAL"),
    ];
    pub const MATCHED_SHEET_NAME: &str = "Coincidencias";
    pub const UNMATCHED_SHEET_NAME: &str = "No_encontradas";
    pub const UNMATCHED_COLUMN_NAME: &str = "SERIES_NO_ENCONTRADAS";
    pub const ARTIFACT_PREFIX: &str = "Resultados_Buscador_SIDESI";
    pub const PREVIEW_ROWS: usize = 30;
    pub const LOCALE: &str = "es";
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no se pudo leer la configuración {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("configuración inválida {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("valor de configuración inválido ({key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// SearchConfig - 检索配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 序列号列识别片段（列名包含即视为序列号列）
    pub serial_column_token: String,

    /// 输出表固定列（顺序即导出顺序）
    pub output_columns: Vec<String>,

    /// 区域列名
    pub zone_column: String,

    /// 区域重映射表（键不区分大小写）
    pub zone_remap: BTreeMap<String, String>,

    pub matched_sheet_name: String,
    pub unmatched_sheet_name: String,
    pub unmatched_column_name: String,

    /// 导出文件名前缀
    pub artifact_prefix: String,

    /// 摘要中展示的结果行数
    pub preview_rows: usize,

    /// 导出目录（None → 下载目录 → 当前目录）
    pub output_dir: Option<PathBuf>,

    /// 界面语言（"es" / "zh-CN"）
    pub locale: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            serial_column_token: defaults::SERIAL_COLUMN_TOKEN.to_string(),
            output_columns: defaults::OUTPUT_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            zone_column: defaults::ZONE_COLUMN.to_string(),
            zone_remap: defaults::ZONE_REMAP
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            matched_sheet_name: defaults::MATCHED_SHEET_NAME.to_string(),
            unmatched_sheet_name: defaults::UNMATCHED_SHEET_NAME.to_string(),
            unmatched_column_name: defaults::UNMATCHED_COLUMN_NAME.to_string(),
            artifact_prefix: defaults::ARTIFACT_PREFIX.to_string(),
            preview_rows: defaults::PREVIEW_ROWS,
            output_dir: None,
            locale: defaults::LOCALE.to_string(),
        }
    }
}

impl SearchConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial_column_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "serial_column_token".to_string(),
                message: "no puede estar vacío".to_string(),
            });
        }
        if self.output_columns.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output_columns".to_string(),
                message: "debe contener al menos una columna".to_string(),
            });
        }
        if !self
            .output_columns
            .iter()
            .any(|c| c == crate::domain::SERIAL_FIELD)
        {
            return Err(ConfigError::InvalidValue {
                key: "output_columns".to_string(),
                message: format!("debe incluir la columna {}", crate::domain::SERIAL_FIELD),
            });
        }
        Ok(())
    }

    /// 解析导出目录
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: SearchConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn with_defaults() -> Self {
        Self {
            config: SearchConfig::default(),
            source: None,
        }
    }

    /// 从 JSON 文件加载；未指定路径时使用默认配置
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("未指定配置文件，使用默认配置");
            return Ok(Self::with_defaults());
        };

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::parse(&raw).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        info!(path = %path.display(), "配置加载完成");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 解析 JSON 文本并校验
    pub fn parse(raw: &str) -> Result<SearchConfig, ConfigError> {
        let config: SearchConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn into_config(self) -> SearchConfig {
        self.config
    }

    /// 配置来源文件（默认配置时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.output_columns.len(), 9);
        assert_eq!(config.output_columns[0], "SERIE");
        assert_eq!(config.zone_remap.get("URBANO"), Some(&"CENTRO".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_json_keeps_defaults() {
        let config = ConfigManager::parse(r#"{ "preview_rows": 10 }"#).unwrap();
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.serial_column_token, "SERIE");
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        let result = ConfigManager::parse(r#"{ "serial_column_token": "  " }"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_parse_rejects_schema_without_serial() {
        let result = ConfigManager::parse(r#"{ "output_columns": ["ND", "ZONA"] }"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{ "locale": "zh-CN", "output_dir": "/tmp/salida" }}"#).unwrap();

        let manager = ConfigManager::load(Some(temp_file.path())).unwrap();

        assert_eq!(manager.config().locale, "zh-CN");
        assert_eq!(manager.config().resolve_output_dir(), PathBuf::from("/tmp/salida"));
        assert!(manager.source().is_some());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{ no es json").unwrap();

        let result = ConfigManager::load(Some(temp_file.path()));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
