//! Output handling for CLI
//!
//! Command results are plain text lines on stdout, UTF-8.

use std::io::{self, Write};

use super::errors::CliResult;

/// Write a single result line to stdout
pub fn write_value(value: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_line(&mut stdout, value)
}

/// Write `value` followed by a newline and flush
pub fn write_line<W: Write>(writer: &mut W, value: &str) -> CliResult<()> {
    writeln!(writer, "{}", value)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_a_bare_newline() {
        let mut buffer = Vec::new();
        write_line(&mut buffer, "").unwrap();
        assert_eq!(buffer, b"\n");
    }

    #[test]
    fn test_value_written_verbatim() {
        let mut buffer = Vec::new();
        write_line(&mut buffer, "  0.0.0.0:8888 ").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "  0.0.0.0:8888 \n");
    }
}
