//! ASM archive writer with overwrite confirmation.
//!
//! Serializes the six derived tables into `<table>.csv` entries of a new
//! zip archive. When the target already exists, quiet mode overwrites it
//! unconditionally; otherwise the user is prompted and any answer other
//! than `y` aborts the run with the existing file untouched.

use std::fs::{self, File};
use std::io::{self, BufRead, Seek, Write};
use std::path::Path;

use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::asm::AsmData;
use crate::error::{WriteError, WriteResult};

/// Write the ASM tables to `path`, prompting on stdin before
/// overwriting an existing file (unless `quiet`).
pub fn write_asm_zip(path: &Path, asm: &AsmData, quiet: bool) -> WriteResult<()> {
    let stdin = io::stdin();
    write_asm_zip_with_prompt(path, asm, quiet, &mut stdin.lock())
}

/// Same as [`write_asm_zip`], reading prompt answers from `prompt_input`
/// so tests can script the confirmation.
pub fn write_asm_zip_with_prompt(
    path: &Path,
    asm: &AsmData,
    quiet: bool,
    prompt_input: &mut impl BufRead,
) -> WriteResult<()> {
    if path.exists() {
        if quiet {
            eprintln!(
                "Quiet Mode Enabled: Overwriting existing output file {}",
                path.display()
            );
        } else if !confirm_overwrite(prompt_input)? {
            return Err(WriteError::OverwriteDeclined);
        }
        fs::remove_file(path)?;
    }

    let mut zip = ZipWriter::new(File::create(path)?);
    let options = SimpleFileOptions::default();

    write_table(&mut zip, options, "locations.csv", &asm.locations)?;
    write_table(&mut zip, options, "students.csv", &asm.students)?;
    write_table(&mut zip, options, "staff.csv", &asm.staff)?;
    write_table(&mut zip, options, "courses.csv", &asm.courses)?;
    write_table(&mut zip, options, "classes.csv", &asm.classes)?;
    write_table(&mut zip, options, "rosters.csv", &asm.rosters)?;

    zip.finish()?;
    Ok(())
}

/// Ask for overwrite permission. Only `y` (any case) consents.
fn confirm_overwrite(input: &mut impl BufRead) -> WriteResult<bool> {
    eprint!("Output file already exists. Do you want to overwrite it? (y/n): ");
    io::stderr().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Serialize one table to CSV in memory and add it to the archive.
/// The header row comes from the row struct's field order.
fn write_table<W, S>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    name: &str,
    rows: &[S],
) -> WriteResult<()>
where
    W: Write + Seek,
    S: Serialize,
{
    eprintln!("Writing CSV: {name} ( {} )", rows.len());

    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        csv_writer.serialize(row)?;
    }
    let bytes = csv_writer
        .into_inner()
        .map_err(|e| WriteError::Io(e.into_error()))?;

    zip.start_file(name, options)?;
    zip.write_all(&bytes)?;
    Ok(())
}
