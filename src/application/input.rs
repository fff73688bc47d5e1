//! Input text reconstruction from a line-oriented reader

use std::io::{self, BufRead};

use tracing::debug;

/// Read all lines from `reader` and join them with `\n`.
///
/// Line terminators (`\n` or `\r\n`) are stripped before joining, so a
/// trailing newline does not survive: `"a\nb\n"` becomes `"a\nb"`.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<String> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    debug!("read_lines: {} lines", lines.len());
    Ok(lines.join("\n"))
}

/// Text to transform: `given` when it is non-empty, else everything from `reader`.
pub fn acquire_input<R: BufRead>(given: Option<&str>, reader: R) -> io::Result<String> {
    match given {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => read_lines(reader),
    }
}
