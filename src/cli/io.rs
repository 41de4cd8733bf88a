//! JSON output for one-shot commands
//!
//! One JSON document per command on stdout, UTF-8 only. Logs go to
//! stderr so stdout stays machine-readable.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a value as pretty JSON to stdout
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_json_to(value, &mut stdout)
}

/// Write a value as pretty JSON followed by a newline
pub fn write_json_to<T: Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
