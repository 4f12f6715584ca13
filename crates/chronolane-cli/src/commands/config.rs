use std::path::PathBuf;

use clap::Subcommand;

use crate::common::build_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective layout configuration
    Show {
        /// Layout config TOML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Earliest visible month (YYYY-MM)
        #[arg(long)]
        floor: Option<String>,
        /// Month treated as "now" (YYYY-MM)
        #[arg(long)]
        now: Option<String>,
    },
    /// Write a config template with the stock defaults
    Init {
        /// Destination path
        path: PathBuf,
    },
}

const TEMPLATE: &str = r#"# Chronolane layout configuration.
# Every key is optional; omitted keys keep the stock defaults.

# Earliest visible month; older history is clamped to it.
floor = "2018-01"

# Pixel width of one visible month.
unit_px = 28.0

# Fixed width substituted for a compressed gap, whatever its real length.
gap_width_px = 56.0

left_pad_px = 35.0
lane_height_px = 120.0
bottom_padding_px = 104.0

# Uncovered runs at least this long collapse into one gap marker.
gap_threshold_months = 12

# Starts predating the floor by at least this much get a truncation mark.
simplify_threshold_months = 24
"#;

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { config, floor, now } => {
            let effective = build_config(config.as_deref(), floor.as_deref(), now.as_deref())?;
            println!("{}", toml::to_string_pretty(&effective)?);
        }
        ConfigAction::Init { path } => {
            if path.exists() {
                return Err(format!("refusing to overwrite {}", path.display()).into());
            }
            std::fs::write(&path, TEMPLATE)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
