//! sds2asm CLI - convert Microsoft School Data Sync classic zip exports
//! to Apple School Manager zip format.
//!
//! ```bash
//! sds2asm export.zip           # prompts before overwriting existing output
//! sds2asm export.zip --quiet   # overwrites without prompting
//! ```

use clap::Parser;
use sds2asm::convert;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sds2asm")]
#[command(about = "Convert Microsoft SDS v1 zip exports to Apple School Manager zip format", long_about = None)]
struct Cli {
    /// Input SDS zip file
    #[arg(value_name = "input.zip")]
    input: PathBuf,

    /// Suppress prompts and overwrite existing output file automatically
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    match convert(&cli.input, cli.quiet) {
        Ok(output) => eprintln!("Done! Wrote {}", output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
