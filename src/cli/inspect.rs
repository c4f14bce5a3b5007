use std::io::{self, Read};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::CharacterReport;
use crate::inspect::{inspect, inspect_bytes};
use crate::render;

#[derive(Args)]
pub struct InspectArgs {
    /// Text to inspect. Use '-' or omit to read from stdin.
    pub text: Option<String>,

    /// Include printable ASCII characters in the report
    #[arg(long)]
    pub ascii: bool,
}

pub fn run(args: InspectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reports = match args.text.as_deref() {
        Some("-") | None => {
            // Raw bytes from stdin: malformed sequences become U+FFFD
            // reports instead of failing the whole run
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            inspect_bytes(&buffer, args.ascii)
        }
        Some(text) => inspect(text, args.ascii),
    };

    if verbose {
        eprintln!("{} character report(s) produced", reports.len());
    }

    print!("{}", format_reports(&reports, format)?);

    Ok(())
}

fn format_reports(reports: &[CharacterReport], format: OutputFormat) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text => render::text::render_reports(reports),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(reports)?;
            json.push('\n');
            json
        }
        OutputFormat::Html => render::html::render_table(reports),
    };

    Ok(out)
}
