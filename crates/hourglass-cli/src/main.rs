//! `hourglass-validate` — validate Hourglass timer arguments.
//!
//! Takes the raw timer arguments, runs them through the classification
//! engine, and prints a one-line JSON record on stdout:
//!
//! ```sh
//! $ hourglass-validate 5:30
//! {"result":true,"timeStrings":["5 minutes 30 seconds"]}
//!
//! $ hourglass-validate --title pizza 5:30
//! {"result":true,"timeStrings":["5 minutes 30 seconds"]}
//!
//! $ hourglass-validate January 1, 2019 at 2 pm
//! {"result":true,"timeStrings":["until 2 pm on 1 January 2019"]}
//!
//! $ hourglass-validate 5:30 pizza
//! {"result":false,"timeStrings":[]}
//! ```
//!
//! Invalidity is data, not a failure: the process exits 0 in both outcomes
//! so the calling layer can branch on the JSON alone. Clap's automatic
//! `--help`/`--version` flags are disabled — `--help` and `/?` belong to
//! the engine's own no-op special case, and everything else (including
//! `--title <value>` anywhere in the list) must reach it untouched.

use anyhow::{Context, Result};
use clap::Parser;

use hourglass_core::validate_args;

#[derive(Parser)]
#[command(
    name = "hourglass-validate",
    about = "Validate and normalize Hourglass timer arguments",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Raw timer arguments; may include a `--title <value>` pair anywhere.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = validate_args(&cli.args);
    let json = serde_json::to_string(&result).context("Failed to serialize validation result")?;
    println!("{json}");

    Ok(())
}
