use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use prep_core::model::QuestionRecord;
use services::{AppServices, Clock};
use storage::{DEFAULT_DB_URL, load_catalog};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DATASET: &str = "data/questions.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidDataset { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidDataset { raw } => write!(f, "invalid --dataset value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

/// Where the question catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DatasetSource {
    /// Built-in default path; a missing file means an empty catalog.
    Default(PathBuf),
    /// Chosen via flag or env; a missing file is an error.
    Explicit(PathBuf),
}

#[derive(Debug)]
struct Args {
    db_url: String,
    dataset: DatasetSource,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--dataset <questions.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --dataset {DEFAULT_DATASET}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_DB_URL, PREP_DATASET");
    eprintln!("  PREP_AI_API_KEY, PREP_AI_BASE_URL, PREP_AI_MODEL");
    eprintln!("  PREP_QUESTION_COUNT, PREP_INFORMATION, PREP_QUESTION_NOTE");
    eprintln!("  RUST_LOG (e.g. RUST_LOG=debug)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("PREP_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut dataset = std::env::var("PREP_DATASET")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(
                || DatasetSource::Default(PathBuf::from(DEFAULT_DATASET)),
                |value| DatasetSource::Explicit(PathBuf::from(value.trim())),
            );

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--dataset" => {
                    let value = require_value(args, "--dataset")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataset { raw: value });
                    }
                    dataset = DatasetSource::Explicit(PathBuf::from(value.trim()));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, dataset })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn read_catalog(source: &DatasetSource) -> Result<Vec<QuestionRecord>, Box<dyn std::error::Error>> {
    match source {
        DatasetSource::Default(path) if !path.exists() => {
            log::warn!(
                "no dataset at {}; starting with an empty catalog",
                path.display()
            );
            Ok(Vec::new())
        }
        DatasetSource::Default(path) | DatasetSource::Explicit(path) => {
            let records = load_catalog(path)?;
            log::info!("loaded {} questions from {}", records.len(), path.display());
            Ok(records)
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = read_catalog(&parsed.dataset)?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    log::debug!("opening database {}", parsed.db_url);
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::system(), catalog).await?;

    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("PrepDeck")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter)
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/dev.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/dev.sqlite3"), "{url}");
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["--db", "sqlite::memory:", "--dataset", "q.json"]).unwrap();
        assert_eq!(args.db_url, "sqlite::memory:");
        assert_eq!(args.dataset, DatasetSource::Explicit(PathBuf::from("q.json")));
    }

    #[test]
    fn default_db_matches_seed_binary() {
        if std::env::var_os("PREP_DB_URL").is_some() {
            return;
        }
        assert_eq!(parse(&[]).unwrap().db_url, DEFAULT_DB_URL);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(matches!(
            parse(&["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(&["--dataset", " "]),
            Err(ArgsError::InvalidDataset { .. })
        ));
        assert!(matches!(parse(&["--verbose"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn missing_default_dataset_is_an_empty_catalog() {
        let source = DatasetSource::Default(PathBuf::from("does/not/exist.json"));
        assert!(read_catalog(&source).unwrap().is_empty());

        let source = DatasetSource::Explicit(PathBuf::from("does/not/exist.json"));
        assert!(read_catalog(&source).is_err());
    }
}
