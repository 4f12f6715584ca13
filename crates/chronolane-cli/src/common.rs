//! Shared helpers for CLI commands: fixture loading and config assembly.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chronolane_core::{DateError, LayoutConfig, Month, RawRecord, TimelineRecord};
use serde::Deserialize;

/// Records files are either a bare array of records or wrapped in
/// `{ "items": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsFile {
    List(Vec<RawRecord>),
    Wrapped { items: Vec<RawRecord> },
}

/// Read raw records from a JSON file.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let file: RecordsFile = serde_json::from_str(&text)?;
    Ok(match file {
        RecordsFile::List(records) => records,
        RecordsFile::Wrapped { items } => items,
    })
}

/// Split raw records into parsed records and per-record date failures.
pub fn parse_records(raws: Vec<RawRecord>) -> (Vec<TimelineRecord>, Vec<(String, DateError)>) {
    let mut parsed = Vec::new();
    let mut failed = Vec::new();
    for raw in raws {
        let id = raw.id.clone();
        match raw.into_record() {
            Ok(record) => parsed.push(record),
            Err(e) => failed.push((id, e)),
        }
    }
    (parsed, failed)
}

/// Layout fields that may be set from a TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Earliest visible month, `YYYY-MM`
    pub floor: Option<String>,
    pub unit_px: Option<f32>,
    pub gap_width_px: Option<f32>,
    pub left_pad_px: Option<f32>,
    pub lane_height_px: Option<f32>,
    pub bottom_padding_px: Option<f32>,
    pub gap_threshold_months: Option<i32>,
    pub simplify_threshold_months: Option<i32>,
}

/// The current calendar month from the local clock. The core never reads a
/// clock; this is the CLI's job.
pub fn now_month() -> Month {
    Month::from(chrono::Local::now().date_naive())
}

/// Options shared by every command that computes a layout.
#[derive(clap::Args)]
pub struct LayoutOpts {
    /// Records JSON file
    pub file: PathBuf,

    /// Layout config TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Earliest visible month (YYYY-MM), overrides the config file
    #[arg(long)]
    pub floor: Option<String>,

    /// Month treated as "now" (YYYY-MM); defaults to the current month
    #[arg(long)]
    pub now: Option<String>,
}

impl LayoutOpts {
    /// Load records (dropping invalid ones with a warning) and build the
    /// effective config.
    pub fn load(&self) -> Result<(Vec<TimelineRecord>, LayoutConfig), Box<dyn Error>> {
        let raws = load_raw_records(&self.file)?;
        let (records, failed) = parse_records(raws);
        for (id, err) in &failed {
            eprintln!("warning: skipping record '{id}': {err}");
        }
        let config = build_config(
            self.config.as_deref(),
            self.floor.as_deref(),
            self.now.as_deref(),
        )?;
        Ok((records, config))
    }
}

/// Effective config: stock defaults, then the TOML file, then command-line
/// flags.
pub fn build_config(
    config_path: Option<&Path>,
    floor_flag: Option<&str>,
    now_flag: Option<&str>,
) -> Result<LayoutConfig, Box<dyn Error>> {
    let file: ConfigFile = match config_path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => ConfigFile::default(),
    };

    let floor = match floor_flag.or(file.floor.as_deref()) {
        Some(s) => Month::parse(s)?,
        None => Month { year: 2018, month: 1 },
    };
    let now = match now_flag {
        Some(s) => Month::parse(s)?,
        None => now_month(),
    };

    let mut config = LayoutConfig::new(floor, now);
    if let Some(v) = file.unit_px {
        config.unit_px = v;
    }
    if let Some(v) = file.gap_width_px {
        config.gap_width_px = v;
    }
    if let Some(v) = file.left_pad_px {
        config.left_pad_px = v;
    }
    if let Some(v) = file.lane_height_px {
        config.lane_height_px = v;
    }
    if let Some(v) = file.bottom_padding_px {
        config.bottom_padding_px = v;
    }
    if let Some(v) = file.gap_threshold_months {
        config.gap_threshold_months = v;
    }
    if let Some(v) = file.simplify_threshold_months {
        config.simplify_threshold_months = v;
    }
    Ok(config)
}
