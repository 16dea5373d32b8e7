use clap::Parser;

use recorder_core::layout::US;

/// shortcut-inspect: derive every representation of a keyboard shortcut.
#[derive(Parser, Debug)]
#[command(name = "shortcut-inspect", version, about)]
pub struct Args {
    /// Shortcut to record, e.g. "Cmd+Shift+K".
    #[arg(short = 's', long)]
    pub shortcut: String,

    /// Input source the shortcut is recorded under.
    #[arg(short = 'r', long, default_value = US)]
    pub record_source: String,

    /// Input source to switch to after recording.
    #[arg(short = 'w', long)]
    pub switch_to: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Resource directory containing strings.json.
    #[arg(long)]
    pub resources: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the derived view as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
