// ==========================================
// SIDESI 序列号检索 - 报告构建器
// ==========================================
// 职责: 整形结果 + 未命中列表 + 汇总统计 → SearchReport
// 红线: matched_count + unmatched_count == total_candidates，不满足即内部错误
// ==========================================

use crate::domain::report::{ResultTable, SearchReport, SearchSummary};
use crate::engine::error::{EngineError, EngineResult};
use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

pub struct ReportBuilder {
    unmatched_column: String,
}

impl ReportBuilder {
    pub fn new(unmatched_column: &str) -> Self {
        Self {
            unmatched_column: unmatched_column.to_string(),
        }
    }

    /// 构建报告（生成时间取本地当前时间）
    pub fn build(
        &self,
        matched: ResultTable,
        unmatched: Vec<String>,
        total_candidates: usize,
        closure_rows: usize,
        skipped_rows: usize,
    ) -> EngineResult<SearchReport> {
        self.build_at(
            Local::now().naive_local(),
            matched,
            unmatched,
            total_candidates,
            closure_rows,
            skipped_rows,
        )
    }

    pub fn build_at(
        &self,
        generated_at: NaiveDateTime,
        matched: ResultTable,
        unmatched: Vec<String>,
        total_candidates: usize,
        closure_rows: usize,
        skipped_rows: usize,
    ) -> EngineResult<SearchReport> {
        let summary = SearchSummary {
            matched_count: matched.len(),
            unmatched_count: unmatched.len(),
            total_candidates,
            closure_rows,
            skipped_rows,
        };

        if summary.matched_count + summary.unmatched_count != summary.total_candidates {
            return Err(EngineError::InvariantViolation(format!(
                "encontradas ({}) + no encontradas ({}) != total ({})",
                summary.matched_count, summary.unmatched_count, summary.total_candidates
            )));
        }

        Ok(SearchReport {
            run_id: Uuid::new_v4(),
            generated_at,
            matched,
            unmatched,
            summary,
            unmatched_column: self.unmatched_column.clone(),
        })
    }
}
