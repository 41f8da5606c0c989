// ==========================================
// SIDESI 序列号检索 - XLSX 工作簿导出器
// ==========================================
// 写出 <产物名>.xlsx:
// - Coincidencias: 命中明细（固定列序）
// - No_encontradas: 未命中序列号（仅在存在时）
// 列宽取 SheetLayout.widths（内容自适应）
// ==========================================

use crate::domain::report::{ResultTable, SearchReport};
use crate::export::artifact::{ExportTarget, SheetLayout};
use crate::export::csv_exporter::ensure_dir;
use crate::export::error::{ExportError, ExportResult};
use crate::export::report_exporter_trait::ReportExporter;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct XlsxWorkbookExporter;

impl XlsxWorkbookExporter {
    fn write_sheet(
        &self,
        worksheet: &mut Worksheet,
        layout: &SheetLayout,
        table: &ResultTable,
        header_format: &Format,
    ) -> Result<(), XlsxError> {
        worksheet.set_name(&layout.name)?;

        for (col_idx, header) in table.columns.iter().enumerate() {
            let col = col_num(col_idx)?;
            worksheet.write_string_with_format(0, col, header, header_format)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let excel_row = row_num(row_idx + 1)?;
            for (col_idx, value) in row.iter().enumerate() {
                // 空值留作空白单元格
                if value.is_empty() {
                    continue;
                }
                worksheet.write_string(excel_row, col_num(col_idx)?, value)?;
            }
        }

        for (col_idx, width) in layout.widths.iter().enumerate() {
            worksheet.set_column_width(col_num(col_idx)?, *width as f64)?;
        }

        debug!(sheet = %layout.name, rows = layout.rows, widths = ?layout.widths, "工作表写入完成");
        Ok(())
    }

    fn write_workbook(
        &self,
        path: &Path,
        report: &SearchReport,
        layouts: &[SheetLayout],
    ) -> Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let unmatched = report.unmatched_table();
        let tables = std::iter::once(&report.matched).chain(unmatched.as_ref());
        for (layout, table) in layouts.iter().zip(tables) {
            let worksheet = workbook.add_worksheet();
            self.write_sheet(worksheet, layout, table, &header_format)?;
        }

        workbook.save(path)
    }
}

impl ReportExporter for XlsxWorkbookExporter {
    fn export(&self, report: &SearchReport, target: &ExportTarget) -> ExportResult<Vec<PathBuf>> {
        ensure_dir(&target.dir)?;

        let path = target.workbook_path();
        let layouts = target.sheet_layouts(report);
        self.write_workbook(&path, report, &layouts)
            .map_err(|e| ExportError::WriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), sheets = layouts.len(), "XLSX 导出完成");
        Ok(vec![path])
    }
}

fn row_num(idx: usize) -> Result<RowNum, XlsxError> {
    RowNum::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}

fn col_num(idx: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::engine::ReportBuilder;
    use calamine::{open_workbook_auto, Data, Reader};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn report(unmatched: Vec<String>) -> SearchReport {
        let matched = ResultTable {
            columns: vec!["SERIE".to_string(), "ND".to_string(), "ZONA".to_string()],
            rows: vec![vec!["S100".to_string(), String::new(), "CENTRO".to_string()]],
        };
        let total = 1 + unmatched.len();
        let ts = NaiveDate::from_ymd_opt(2025, 10, 3)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        ReportBuilder::new("SERIES_NO_ENCONTRADAS")
            .build_at(ts, matched, unmatched, total, 1, 0)
            .unwrap()
    }

    #[test]
    fn test_workbook_has_both_sheets() {
        let dir = tempdir().unwrap();
        let report = report(vec!["S200".to_string(), "S300".to_string()]);
        let target = ExportTarget::new(dir.path(), &SearchConfig::default(), &report);

        let files = XlsxWorkbookExporter.export(&report, &target).unwrap();

        assert_eq!(files, vec![dir.path().join("Resultados_Buscador_SIDESI_2025-10-03_09-30.xlsx")]);

        let mut workbook = open_workbook_auto(&files[0]).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec!["Coincidencias".to_string(), "No_encontradas".to_string()]
        );

        let matched = workbook.worksheet_range("Coincidencias").unwrap();
        let rows: Vec<_> = matched.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Data::String("SERIE".to_string()));
        assert_eq!(rows[1][0], Data::String("S100".to_string()));
        assert_eq!(rows[1][1], Data::Empty);
        assert_eq!(rows[1][2], Data::String("CENTRO".to_string()));

        let unmatched = workbook.worksheet_range("No_encontradas").unwrap();
        let serials: Vec<String> = unmatched.rows().map(|r| r[0].to_string()).collect();
        assert_eq!(serials, vec!["SERIES_NO_ENCONTRADAS", "S200", "S300"]);
    }

    #[test]
    fn test_workbook_without_unmatched_sheet() {
        let dir = tempdir().unwrap();
        let report = report(vec![]);
        let target = ExportTarget::new(dir.path(), &SearchConfig::default(), &report);

        let files = XlsxWorkbookExporter.export(&report, &target).unwrap();

        let workbook = open_workbook_auto(&files[0]).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Coincidencias".to_string()]);
    }
}
