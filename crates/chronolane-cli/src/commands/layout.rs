use clap::Args;
use chronolane_core::layout_timeline;

use crate::common::LayoutOpts;

#[derive(Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub opts: LayoutOpts,

    /// Print a one-screen summary instead of the full JSON
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (records, config) = args.opts.load()?;
    let result = layout_timeline(&records, &config)?;

    if args.summary {
        let gap_count = result
            .axis_points
            .iter()
            .filter(|p| matches!(p, chronolane_core::AxisPoint::Gap { .. }))
            .count();
        println!("records:    {}", result.records.len());
        println!("lanes:      {}", result.lane_count);
        println!("axis points: {} ({} gaps)", result.axis_points.len(), gap_count);
        if let (Some(min), Some(max)) = (result.min_index(), result.max_index()) {
            println!(
                "span:       {} — {}",
                chronolane_core::Month::from_index(min),
                chronolane_core::Month::from_index(max)
            );
        }
        println!(
            "canvas:     {:.0} x {:.0} px",
            result.total_width_px, result.total_height_px
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
