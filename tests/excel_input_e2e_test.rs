// ==========================================
// Excel 输入端到端测试
// ==========================================
// 测试目标: XLSX 解析（表头偏移/空白行/数值/日期）→ 检索 → 工作簿导出
// ==========================================


use buscador_series::importer::UniversalFileParser;
use buscador_series::{CellValue, NoOpProgress, SearchApi, SearchConfig, XlsxWorkbookExporter};
use calamine::{open_workbook_auto, Reader};
use tempfile::TempDir;
use test_helpers::{output_dir, write_xlsx, XlsxCell, CLOSURE_HEADERS};

/// 库存表: 表头在第 3 行，含数值序列号与一行空白
fn write_series_workbook(dir: &TempDir) -> std::path::PathBuf {
    write_xlsx(
        dir,
        "series.xlsx",
        2,
        &["No. Serie"],
        &[
            vec![XlsxCell::Number(450123.0)],
            vec![XlsxCell::Text("S-77")],
            vec![XlsxCell::Blank],
            vec![XlsxCell::Number(999.0)],
        ],
    )
    .unwrap()
}

/// 关单表: 两行有效数据，中间一行空白；F_REP 为日期单元格
fn write_closures_workbook(dir: &TempDir) -> std::path::PathBuf {
    let row = |nd: f64, zone: &'static str, comment: &'static str, date: (u16, u8, u8)| {
        vec![
            XlsxCell::Blank,
            XlsxCell::Number(nd),
            XlsxCell::Text(zone),
            XlsxCell::Number(40.0),
            XlsxCell::Text("UI"),
            XlsxCell::Text("DEP1"),
            XlsxCell::Text(comment),
            XlsxCell::Text("TEC"),
            XlsxCell::Date(date.0, date.1, date.2),
        ]
    };
    write_xlsx(
        dir,
        "cierres.xlsx",
        0,
        &CLOSURE_HEADERS,
        &[
            row(12.0, "urbano", "cambio equipo 450123", (2025, 10, 1)),
            vec![XlsxCell::Blank],
            row(13.0, "rural", "s-77 revisado", (2025, 9, 30)),
        ],
    )
    .unwrap()
}

#[test]
fn test_parse_series_workbook_with_header_offset() {
    let dir = output_dir().unwrap();
    let path = write_series_workbook(&dir);

    let table = UniversalFileParser.parse(&path).unwrap();

    assert_eq!(table.columns(), &["No. Serie".to_string()]);
    let row_numbers: Vec<usize> = table.rows().iter().map(|r| r.row_number).collect();
    assert_eq!(row_numbers, vec![4, 5, 7]);
    assert_eq!(table.rows()[0].get(0), &CellValue::Float(450123.0));
}

#[test]
fn test_parse_closures_workbook_skips_blank_rows() {
    let dir = output_dir().unwrap();
    let path = write_closures_workbook(&dir);

    let table = UniversalFileParser.parse(&path).unwrap();

    assert_eq!(table.len(), 2);
    let row_numbers: Vec<usize> = table.rows().iter().map(|r| r.row_number).collect();
    assert_eq!(row_numbers, vec![2, 4]);

    let f_rep = table.column_index("F_REP").unwrap();
    assert!(matches!(table.rows()[0].get(f_rep), CellValue::DateTime(_)));
}

#[test]
fn test_search_excel_files() {
    let dir = output_dir().unwrap();
    let series = write_series_workbook(&dir);
    let closures = write_closures_workbook(&dir);

    let report = SearchApi::new(SearchConfig::default())
        .search_files(&series, &closures, &mut NoOpProgress)
        .unwrap();

    assert_eq!(report.summary.total_candidates, 3);
    assert_eq!(report.summary.matched_count, 2);
    assert_eq!(report.unmatched, vec!["999".to_string()]);

    let row_of = |serial: &str| {
        (0..report.matched.len())
            .find(|i| report.matched.value(*i, "SERIE") == Some(serial))
            .unwrap()
    };
    let numeric = row_of("450123");
    assert_eq!(report.matched.value(numeric, "ND"), Some("12"));
    assert_eq!(report.matched.value(numeric, "ZONA"), Some("CENTRO"));
    assert_eq!(report.matched.value(numeric, "SEMANA"), Some("40"));
    assert_eq!(
        report.matched.value(numeric, "F_REP"),
        Some("2025-10-01 00:00:00")
    );

    let text = row_of("S-77");
    assert_eq!(report.matched.value(text, "ZONA"), Some("ORIENTE"));
}

#[test]
fn test_excel_round_trip_through_workbook_export() {
    let dir = output_dir().unwrap();
    let out = output_dir().unwrap();
    let series = write_series_workbook(&dir);
    let closures = write_closures_workbook(&dir);

    let api = SearchApi::new(SearchConfig::default());
    let report = api
        .search_files(&series, &closures, &mut NoOpProgress)
        .unwrap();
    let files = api
        .export(&report, Some(out.path()), &[&XlsxWorkbookExporter])
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].extension().is_some_and(|ext| ext == "xlsx"));

    let mut workbook = open_workbook_auto(&files[0]).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["Coincidencias".to_string(), "No_encontradas".to_string()]
    );
    let matched = workbook.worksheet_range("Coincidencias").unwrap();
    assert_eq!(matched.height(), 3);
    assert_eq!(matched.width(), 9);
    let unmatched = workbook.worksheet_range("No_encontradas").unwrap();
    let serials: Vec<String> = unmatched.rows().map(|r| r[0].to_string()).collect();
    assert_eq!(serials, vec!["SERIES_NO_ENCONTRADAS", "999"]);
}
