// ==========================================
// SIDESI 序列号检索 - 命令行入口
// ==========================================
// 用法:
//   buscador-series <series> <cierres> [output_dir] [--config <file>] [--csv] [--json]
// 默认写出 XLSX 工作簿；--csv / --json 追加对应产物
// ==========================================

use anyhow::anyhow;
use buscador_series::i18n::{set_locale, t, t_with_args};
use buscador_series::{
    ApiError, ConfigManager, CsvWorkbookExporter, JsonReportExporter, ReportExporter, SearchApi,
    XlsxWorkbookExporter,
};
use std::path::PathBuf;
use std::process::ExitCode;

struct CliArgs {
    series: PathBuf,
    closures: PathBuf,
    output_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    csv: bool,
    json: bool,
}

fn parse_args() -> Option<CliArgs> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut csv = false;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(args.next()?)),
            "--csv" => csv = true,
            "--json" => json = true,
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    Some(CliArgs {
        series: positional.next()?,
        closures: positional.next()?,
        output_dir: positional.next(),
        config,
        csv,
        json,
    })
}

/// 失败时错误内容已是本地化的用户文案
fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = ConfigManager::load(args.config.as_deref())
        .map_err(|err| anyhow!(ApiError::from(err).user_message()))?
        .into_config();
    set_locale(&config.locale);

    let api = SearchApi::new(config);

    eprintln!("{}", t("search.loading"));
    let mut last_percent = None;
    let mut progress = |fraction: f64| {
        let percent = (fraction * 100.0).floor() as u32;
        if last_percent != Some(percent) && percent % 10 == 0 {
            eprintln!("{:>3}%", percent);
            last_percent = Some(percent);
        }
    };

    let report = api
        .search_files(&args.series, &args.closures, &mut progress)
        .map_err(|err| {
            tracing::error!(error = %err, "检索失败");
            anyhow!(err.user_message())
        })?;

    for line in api.summary_lines(&report) {
        println!("{}", line);
    }

    let mut exporters: Vec<&dyn ReportExporter> = Vec::new();
    exporters.push(&XlsxWorkbookExporter);
    if args.csv {
        exporters.push(&CsvWorkbookExporter);
    }
    if args.json {
        exporters.push(&JsonReportExporter);
    }

    let files = api
        .export(&report, args.output_dir.as_deref(), &exporters)
        .map_err(|err| {
            tracing::error!(error = %err, "导出失败");
            anyhow!(err.user_message())
        })?;

    for file in files {
        let path = file.display().to_string();
        println!("{}", t_with_args("export.written", &[("path", path.as_str())]));
    }
    Ok(())
}

fn main() -> ExitCode {
    buscador_series::logging::init_from_env();

    tracing::info!("{} v{}", buscador_series::APP_NAME, buscador_series::VERSION);

    let Some(args) = parse_args() else {
        eprintln!("{}", t("errors.usage"));
        return ExitCode::from(2);
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
