//! Survey Report - main entry point
//!
//! Loads the survey CSV, fills missing categorical answers with a sentinel
//! string, and renders the descriptive report (markdown plus SVG charts)
//! into the output directory.

use std::path::PathBuf;
use std::process::ExitCode;

use survey_report::config::ReportConfig;
use survey_report::pipeline;

fn main() -> ExitCode {
    println!("Survey Report v{}\n", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("✗ {}", message);
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    if cli.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let mut config = match ReportConfig::load(cli.settings.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(data_file) = cli.data {
        config.data_file = data_file;
    }
    if let Some(output_dir) = cli.output {
        config.output_dir = output_dir;
    }
    if let Some(language) = cli.language {
        config.focus_language = language;
    }

    println!("Data file:      {}", config.data_file.display());
    println!("Output dir:     {}", config.output_dir.display());
    println!("Sentinel:       '{}'", config.sentinel);
    println!("Focus language: {}\n", config.focus_language);

    match pipeline::generate_report(&config) {
        Ok(summary) => {
            println!(
                "\nReport complete: {} rows analysed, {} charts rendered",
                summary.rows, summary.charts
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n✗ Report generation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    data: Option<PathBuf>,
    output: Option<PathBuf>,
    settings: Option<PathBuf>,
    language: Option<String>,
    help: bool,
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" if i + 1 < args.len() => {
                cli.data = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--output" if i + 1 < args.len() => {
                cli.output = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--settings" if i + 1 < args.len() => {
                cli.settings = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--language" if i + 1 < args.len() => {
                cli.language = Some(args[i + 1].clone());
                i += 2;
            }
            "--help" | "-h" => {
                cli.help = true;
                i += 1;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(cli)
}

fn print_usage() {
    println!("Usage: survey-report [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --data <path>       Survey CSV file (default: survey_results_public.csv)");
    println!("  --output <dir>      Output directory for report.md and charts (default: report)");
    println!("  --settings <path>   JSON settings file");
    println!("  --language <name>   Focus language for the usage analysis (default: Python)");
    println!("  -h, --help          Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("survey-report")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_empty() {
        let cli = parse_args(&args(&[])).unwrap();
        assert_eq!(cli, CliArgs::default());
    }

    #[test]
    fn test_parse_args_all_flags() {
        let cli = parse_args(&args(&[
            "--data",
            "survey.csv",
            "--output",
            "out",
            "--settings",
            "report.json",
            "--language",
            "Rust",
        ]))
        .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("survey.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.settings, Some(PathBuf::from("report.json")));
        assert_eq!(cli.language, Some("Rust".to_string()));
        assert!(!cli.help);
    }

    #[test]
    fn test_parse_args_unknown_flag() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_parse_args_missing_value() {
        // A trailing flag with no value is unknown, not a silent no-op
        assert!(parse_args(&args(&["--data"])).is_err());
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }
}
