//! End-to-end conversion pipeline.
//!
//! Reads the SDS zip, runs the six mappers in order, and writes the ASM
//! zip next to the input. Any failure aborts before the output archive is
//! created; there is no partial output.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::asm::writer::write_asm_zip_with_prompt;
use crate::asm::AsmData;
use crate::error::ConvertResult;
use crate::sds::read_sds_zip;

/// Convert an SDS export into an ASM archive, returning the output path.
///
/// Uses the wall-clock date for the grade-level derivation and stdin for
/// the overwrite prompt.
pub fn convert(input: &Path, quiet: bool) -> ConvertResult<PathBuf> {
    eprintln!("Begin processing {}", input.display());
    let stdin = io::stdin();
    convert_at(input, quiet, Local::now().date_naive(), &mut stdin.lock())
}

/// Fully injected variant of [`convert`]: the reference date and the
/// prompt input stream are explicit, so tests can pin both.
pub fn convert_at(
    input: &Path,
    quiet: bool,
    today: NaiveDate,
    prompt_input: &mut impl BufRead,
) -> ConvertResult<PathBuf> {
    let sds = read_sds_zip(input)?;
    let asm = AsmData::derive(&sds, today)?;

    let output = output_path(input);
    write_asm_zip_with_prompt(&output, &asm, quiet, prompt_input)?;
    Ok(output)
}

/// Output path for an input archive: the `.zip` suffix replaced by
/// `_asm.zip`, in the same directory.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_asm.zip"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_suffix() {
        assert_eq!(
            output_path(Path::new("export.zip")),
            PathBuf::from("export_asm.zip")
        );
    }

    #[test]
    fn test_output_path_keeps_directory() {
        assert_eq!(
            output_path(Path::new("/data/rosters/export.zip")),
            PathBuf::from("/data/rosters/export_asm.zip")
        );
    }
}
