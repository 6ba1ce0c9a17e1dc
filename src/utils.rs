//! Output helpers shared by the `jpx` binary.

use anyhow::Context as _;
use colored::Colorize;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::error::TokenizeError;
use crate::tokenizer::Tokens;

/// Write `tokens` to `writer` as a JSON array, pretty-printed or compact.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if serialization or writing to `writer` fails.
pub fn write_tokens<W: Write>(
    writer: &mut W,
    tokens: &Tokens,
    pretty: bool,
) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(tokens)
    } else {
        serde_json::to_string(tokens)
    }
    .context("serialize tokens")?;

    match writeln!(writer, "{json}") {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write tokens to stdout"),
    }
}

// ==============================================================================
// Diagnostics
// ==============================================================================

/// Write a diagnostic for `err` against the `input` it was raised on: the
/// message, the input line holding the offending offset and a caret below
/// it. Errors without an offset print the message only.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_diagnostic<W: Write>(
    writer: &mut W,
    input: &str,
    err: &TokenizeError,
) -> io::Result<()> {
    writeln!(writer, "{} {err}", "error:".red().bold())?;

    let Some(offset) = err.offset() else {
        return Ok(());
    };
    let (line, column) = locate(input, offset);

    writeln!(writer, "  {}", line.dimmed())?;
    writeln!(
        writer,
        "  {:width$}{}",
        "",
        "^".red().bold(),
        width = column
    )
}

/// Find the line of `input` containing byte `offset` and the character
/// column of the offset within it. An offset at the very end points one
/// past the last character.
fn locate(input: &str, offset: usize) -> (&str, usize) {
    let mut offset = offset.min(input.len());
    while !input.is_char_boundary(offset) {
        offset -= 1;
    }
    let line_start = input[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = input[offset..]
        .find('\n')
        .map_or(input.len(), |i| offset + i);
    let column = input[line_start..offset].chars().count();
    (&input[line_start..line_end], column)
}
