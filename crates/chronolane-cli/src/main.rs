use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "chronolane-cli", version, about = "Chronolane CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full timeline layout from a records file
    Layout(commands::layout::LayoutArgs),
    /// Show axis points and labels for a records file
    Axis(commands::axis::AxisArgs),
    /// Check a records file for date errors
    Validate(commands::validate::ValidateArgs),
    /// Draw an ASCII rendering of the laid-out timeline
    Render(commands::render::RenderArgs),
    /// Layout configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Layout(args) => commands::layout::run(args),
        Commands::Axis(args) => commands::axis::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "chronolane-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
