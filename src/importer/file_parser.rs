// ==========================================
// SIDESI 序列号检索 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 规则: 读取首个工作表，首行为表头，跳过完全空白的数据行
// ==========================================

use crate::domain::cell::CellValue;
use crate::domain::table::Table;
use crate::importer::error::{LoadError, LoadResult};
use crate::importer::file_parser_trait::FileParser;
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, DataType, Reader, Sheets};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

/// 支持的 Excel 扩展名
const EXCEL_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> LoadResult<()> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    fn parse_reader<R: Read>(&self, reader: R) -> LoadResult<Table> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();
        if headers.is_empty() {
            return Err(LoadError::MissingHeader("csv".to_string()));
        }

        let mut table = Table::new(headers);
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let values: Vec<CellValue> = record.iter().map(CellValue::from_raw_text).collect();

            // 跳过完全空白的行
            if values.iter().all(CellValue::is_blank) {
                continue;
            }

            table.push_row(row_idx + 2, values);
        }

        Ok(table)
    }
}

impl FileParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<Table> {
        ensure_exists(file_path)?;

        let ext = file_extension(file_path);
        if ext != "csv" {
            return Err(LoadError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        self.parse_reader(file)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> LoadResult<Table> {
        self.parse_reader(bytes)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    fn read_first_sheet<RS: Read + Seek>(&self, mut workbook: Sheets<RS>) -> LoadResult<Table> {
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names.first().cloned().ok_or(LoadError::NoSheets)?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

        // 提取表头（首行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| LoadError::MissingHeader(sheet_name.clone()))?;
        let headers: Vec<String> = header_row.iter().map(|cell| cell.to_string()).collect();

        let mut table = Table::new(headers);
        for (idx, data_row) in rows.enumerate() {
            let values: Vec<CellValue> = data_row.iter().map(convert_cell).collect();

            // 跳过完全空白的行
            if values.iter().all(CellValue::is_blank) {
                continue;
            }

            // 表头所在行 + 1 + idx，换算为 1 起的行号
            table.push_row(first_row + idx + 2, values);
        }

        debug!(
            sheet = %sheet_name,
            columns = table.columns().len(),
            rows = table.len(),
            "工作表解析完成"
        );
        Ok(table)
    }
}

impl FileParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<Table> {
        ensure_exists(file_path)?;

        let ext = file_extension(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(LoadError::UnsupportedFormat(ext));
        }

        let workbook = open_workbook_auto(file_path)?;
        self.read_first_sheet(workbook)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> LoadResult<Table> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
        self.read_first_sheet(workbook)
    }
}

/// calamine 单元格 → CellValue
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_raw_text(s),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(cell.to_string())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> LoadResult<Table> {
        let path = file_path.as_ref();
        let ext = file_extension(path);

        match ext.as_str() {
            "csv" => CsvParser.parse_table(path),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser.parse_table(path),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }

    /// 解析上传内容，file_name 仅用于判定格式
    pub fn parse_bytes(&self, file_name: &str, bytes: &[u8]) -> LoadResult<Table> {
        let ext = file_extension(Path::new(file_name));

        match ext.as_str() {
            "csv" => CsvParser.parse_bytes(bytes),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser.parse_bytes(bytes),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = csv_file(&[" Serie ,ND", "S100,ND-1", "S200,ND-2"]);

        let table = CsvParser.parse_table(temp_file.path()).unwrap();

        // 解析器保留原始表头
        assert_eq!(table.columns(), &[" Serie ".to_string(), "ND".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].get(0), &CellValue::from("S100"));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_table(Path::new("no_existe.csv"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = csv_file(&["SERIE,ND", "S100,1", ",", "S200,2"]);

        let table = CsvParser.parse_table(temp_file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].row_number, 4);
    }

    #[test]
    fn test_csv_parser_ragged_rows() {
        let temp_file = csv_file(&["SERIE,ND,ZONA", "S100", "S200,2,rural,extra"]);

        let table = CsvParser.parse_table(temp_file.path()).unwrap();

        assert_eq!(table.rows()[0].values.len(), 3);
        assert_eq!(table.rows()[0].get(2), &CellValue::Empty);
        assert_eq!(table.rows()[1].values.len(), 3);
    }

    #[test]
    fn test_csv_parse_bytes() {
        let table = CsvParser.parse_bytes(b"SERIE\nS100\n").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_universal_parser_unsupported_format() {
        let result = UniversalFileParser.parse("datos.txt");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "txt"));
    }

    #[test]
    fn test_excel_parser_malformed_file() {
        let mut temp_file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        writeln!(temp_file, "esto no es un libro").unwrap();

        let result = ExcelParser.parse_table(temp_file.path());
        assert!(matches!(result, Err(LoadError::ExcelParseError(_))));
    }

    #[test]
    fn test_convert_cell_error_value() {
        let cell = convert_cell(&Data::Error(calamine::CellErrorType::NA));
        assert!(matches!(cell, CellValue::Error(_)));
        assert_eq!(convert_cell(&Data::Float(12.0)), CellValue::Float(12.0));
    }
}
