use std::path::PathBuf;

use clap::Args;

use crate::common::{load_raw_records, parse_records};

#[derive(Args)]
pub struct ValidateArgs {
    /// Records JSON file
    pub file: PathBuf,

    /// Machine-readable output
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raws = load_raw_records(&args.file)?;
    let total = raws.len();
    let (records, failed) = parse_records(raws);

    if args.json {
        let report = serde_json::json!({
            "total": total,
            "valid": records.len(),
            "invalid": failed
                .iter()
                .map(|(id, err)| serde_json::json!({ "id": id, "error": err.to_string() }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (id, err) in &failed {
            println!("record '{id}': {err}");
        }
        println!("{} of {} records valid", records.len(), total);
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("{} invalid record(s)", failed.len()).into())
    }
}
