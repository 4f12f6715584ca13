use clap::Args;
use chronolane_core::{layout_timeline, locale, Lang, LayoutResult, Month};

use crate::common::LayoutOpts;

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub opts: LayoutOpts,

    /// Legend language (en, es, ja, ko)
    #[arg(long, default_value = "en")]
    pub lang: String,
}

pub fn run(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let lang = Lang::from_code(&args.lang)
        .ok_or_else(|| format!("unsupported language '{}'", args.lang))?;

    let (records, config) = args.opts.load()?;
    let result = layout_timeline(&records, &config)?;

    if result.axis_points.is_empty() {
        println!("(no records)");
        return Ok(());
    }

    // one text column per month unit
    let unit = config.unit_px;
    let left_pad = config.left_pad_px;
    let col = |x: f32| -> usize { ((x - left_pad) / unit).round().max(0.0) as usize };
    let width = col(result.total_width_px) + 1;

    print!("{}", header_lines(&result, width, &col));
    for lane in 0..result.lane_count {
        println!("{}", lane_line(&result, lane, width, &col));
    }

    println!();
    let mut legend: Vec<_> = result.records.iter().collect();
    legend.sort_by_key(|r| (r.start_index, r.record.id.clone()));
    for r in &legend {
        let period = locale::format_period(&r.record.start, r.record.end.as_ref());
        let duration = locale::format_duration(r.duration_months(), lang);
        let mut notes = Vec::new();
        if r.is_ongoing {
            notes.push("ongoing");
        }
        if r.is_simplified_start {
            notes.push("started earlier");
        }
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!(" [{}]", notes.join(", "))
        };
        println!(
            "  lane {}  {}  {} ({}){}",
            r.lane, r.record.id, period, duration, notes
        );
    }
    Ok(())
}

/// Year figures over January columns, then the axis strip with `~` marking
/// compressed gaps.
fn header_lines(result: &LayoutResult, width: usize, col: &dyn Fn(f32) -> usize) -> String {
    use chronolane_core::AxisPoint;

    let mut years = vec![' '; width];
    let mut axis = vec![' '; width];
    for point in &result.axis_points {
        match point {
            AxisPoint::Month { index } => {
                let Some(x) = result.pixel_map.x_for_index(*index) else {
                    continue;
                };
                let c = col(x);
                if c < width {
                    axis[c] = '.';
                }
                let month = Month::from_index(*index);
                if month.month == 1 {
                    if c < width {
                        axis[c] = '|';
                    }
                    for (i, ch) in month.year.to_string().chars().enumerate() {
                        if c + i < width {
                            years[c + i] = ch;
                        }
                    }
                }
            }
            AxisPoint::Gap { from_index, .. } => {
                let Some(x) = result.pixel_map.x_for_index(*from_index) else {
                    continue;
                };
                let c = col(x);
                if c < width {
                    axis[c] = '~';
                }
            }
        }
    }

    let years: String = years.into_iter().collect();
    let axis: String = axis.into_iter().collect();
    format!("{}\n{}\n", years.trim_end(), axis.trim_end())
}

/// One text row per lane: `=` bars, `o` endpoints, `*` single months,
/// `<` truncated starts, `>` ongoing ends.
fn lane_line(result: &LayoutResult, lane: usize, width: usize, col: &dyn Fn(f32) -> usize) -> String {
    let mut row = vec![' '; width];
    for r in result.records.iter().filter(|r| r.lane == lane) {
        let (Some(sx), Some(ex)) = (
            result.pixel_map.x_for_index(r.start_index),
            result.pixel_map.x_for_index(r.end_index),
        ) else {
            continue;
        };
        let (sc, ec) = (col(sx).min(width - 1), col(ex).min(width - 1));
        for cell in row.iter_mut().take(ec + 1).skip(sc) {
            *cell = '=';
        }
        if r.is_single_month {
            row[ec] = '*';
        } else {
            row[sc] = if r.is_simplified_start { '<' } else { 'o' };
            row[ec] = if r.is_ongoing { '>' } else { 'o' };
        }
    }
    let line: String = row.into_iter().collect();
    line.trim_end().to_string()
}
