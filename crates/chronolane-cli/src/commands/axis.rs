use clap::Args;
use chronolane_core::{layout_timeline, locale, select_labels, AxisLabel, Lang};

use crate::common::LayoutOpts;

#[derive(Args)]
pub struct AxisArgs {
    #[command(flatten)]
    pub opts: LayoutOpts,

    /// Print formatted labels instead of raw axis points
    #[arg(long)]
    pub labels: bool,

    /// Show a month label every N visible months
    #[arg(long, default_value_t = 6)]
    pub label_every: usize,

    /// Label language (en, es, ja, ko)
    #[arg(long, default_value = "en")]
    pub lang: String,
}

pub fn run(args: AxisArgs) -> Result<(), Box<dyn std::error::Error>> {
    let lang = Lang::from_code(&args.lang)
        .ok_or_else(|| format!("unsupported language '{}'", args.lang))?;

    let (records, config) = args.opts.load()?;
    let result = layout_timeline(&records, &config)?;

    if !args.labels {
        println!("{}", serde_json::to_string_pretty(&result.axis_points)?);
        return Ok(());
    }

    for label in select_labels(&result.axis_points, args.label_every) {
        match label {
            AxisLabel::Month {
                index,
                month,
                show_month,
                show_year,
            } => {
                let x = result.pixel_map.x_for_index(index).unwrap_or(0.0);
                let text = if show_month {
                    locale::month_label(&month, lang)
                } else if show_year {
                    month.year.to_string()
                } else {
                    continue;
                };
                println!("{x:>8.1}px  {text}");
            }
            AxisLabel::Gap {
                from_index,
                to_index,
            } => {
                let x = result.pixel_map.x_for_index(from_index).unwrap_or(0.0);
                println!("{x:>8.1}px  … ({} months skipped)", to_index - from_index + 1);
            }
        }
    }
    Ok(())
}
