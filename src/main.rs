use clap::{Parser, Subcommand};
use file_manifest::{config, generate, output, scan};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "file-manifest")]
#[command(about = "Write a JSON manifest of the data files in a directory")]
#[command(long_about = "\
Write a JSON manifest of the data files in a directory

Lists the source directory (not recursively), keeps every entry whose name
ends with the extension (case-insensitive), and writes one record per entry:

  data/                      file-list.json
  ├── sales_report.csv   →   { \"filename\": \"sales_report.csv\", \"displayName\": \"Sales_Report\" }
  ├── Q1-Data.CSV        →   { \"filename\": \"Q1-Data.CSV\",      \"displayName\": \"Q1-Data\" }
  └── notes.txt              (skipped)

With no arguments: scans data/ for .csv files and writes file-list.json,
unless a manifest.toml in the working directory changes those defaults.
That file is read automatically whenever it exists; run with -v to see
which config was loaded, or 'file-manifest gen-config' to print a
documented one.")]
#[command(version)]
struct Cli {
    /// Directory to scan
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Manifest file to write
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// File extension to keep, case-insensitive
    #[arg(long, global = true)]
    extension: Option<String>,

    /// Sort entries by filename instead of directory listing order
    #[arg(long, global = true, overrides_with = "no_sort")]
    sort: bool,

    /// Keep directory listing order, even if the config file sets `sort = true`
    #[arg(long, global = true, overrides_with = "sort")]
    no_sort: bool,

    /// Config file [default: manifest.toml, if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the source directory and write the manifest (default)
    Generate,
    /// List what would be written, without writing
    Check,
    /// Print a stock manifest.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.as_ref().unwrap_or(&Command::Generate) {
        Command::Generate => {
            let manifest_config = load_manifest_config(cli)?;
            let report = generate::generate(&manifest_config)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            let manifest_config = load_manifest_config(cli)?;
            let entries = scan::scan(
                &manifest_config.source_dir,
                &manifest_config.extension,
                manifest_config.sort,
            )?;
            output::print_check_output(
                &entries,
                &manifest_config.source_dir,
                &manifest_config.extension,
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Stock defaults, then the config file, then CLI flags.
///
/// An explicit `--config` must exist; the implicit `manifest.toml` is optional.
fn load_manifest_config(
    cli: &Cli,
) -> Result<config::ManifestConfig, Box<dyn std::error::Error>> {
    let config_path = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(format!("config file not found: {}", path.display()).into());
        }
        Some(path) => path.clone(),
        None => PathBuf::from(config::CONFIG_FILE_NAME),
    };
    if config_path.exists() {
        log::info!("loading config from {}", config_path.display());
    }
    let manifest_config = config::load_config(&config_path)?.with_overrides(config::Overrides {
        source_dir: cli.source.clone(),
        output: cli.output.clone(),
        extension: cli.extension.clone(),
        sort: sort_override(cli.sort, cli.no_sort),
    })?;
    log::debug!("{manifest_config:?}");
    Ok(manifest_config)
}

/// `None` when neither flag is given, so the config file decides.
fn sort_override(sort: bool, no_sort: bool) -> Option<bool> {
    match (sort, no_sort) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Logging goes to stderr. The environment is not consulted.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
