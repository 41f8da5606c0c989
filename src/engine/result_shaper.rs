// ==========================================
// SIDESI 序列号检索 - 结果整形器
// ==========================================
// 职责: 匹配记录 → 固定列结构的输出表 + 区域列重映射
// 规则:
// - 列顺序固定（默认 SERIE, ND, ZONA, SEMANA, ABRV_UI, DEP, COM_REP, DD_TECI, F_REP）
// - 记录中缺失的列补空字符串；不在列表中的列丢弃
// - ZONA 列先转大写，再按映射表替换；未知值保持大写原样
// ==========================================

use crate::config::SearchConfig;
use crate::domain::report::{MatchRecord, ResultTable};
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// ZoneRemap - 区域映射表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ZoneRemap {
    table: HashMap<String, String>,
}

impl ZoneRemap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_uppercase(), v.into()))
                .collect(),
        }
    }

    /// 转大写后查表；未知值原样返回（大写）
    pub fn apply(&self, raw: &str) -> String {
        let upper = raw.to_uppercase();
        match self.table.get(&upper) {
            Some(canonical) => canonical.clone(),
            None => upper,
        }
    }
}

// ==========================================
// ResultShaper - 结果整形器
// ==========================================
pub struct ResultShaper {
    columns: Vec<String>,
    zone_column: String,
    zone_remap: ZoneRemap,
}

impl ResultShaper {
    pub fn new(columns: Vec<String>, zone_column: &str, zone_remap: ZoneRemap) -> Self {
        Self {
            columns,
            zone_column: zone_column.to_string(),
            zone_remap,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            config.output_columns.clone(),
            &config.zone_column,
            ZoneRemap::new(config.zone_remap.iter()),
        )
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 整形所有匹配记录
    pub fn shape(&self, records: &[MatchRecord]) -> ResultTable {
        let mut table = ResultTable::new(self.columns.clone());
        for record in records {
            table.rows.push(self.shape_record(record));
        }

        debug!(rows = table.len(), columns = self.columns.len(), "结果整形完成");
        table
    }

    /// 整形单条记录（按固定列取值，缺失补空）
    pub fn shape_record(&self, record: &MatchRecord) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| {
                let value = record
                    .get(column)
                    .and_then(|cell| cell.to_text())
                    .unwrap_or_default();
                if *column == self.zone_column {
                    self.zone_remap.apply(&value)
                } else {
                    value
                }
            })
            .collect()
    }
}
