//! Output formatting for search and LCS results

use crate::index::suffix_array::{IndexStats, MatchIter};
use crate::utils::ColorMode;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One matched suffix in machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Start offset of the suffix in the indexed text
    pub position: usize,
    pub suffix: String,
}

/// Search results in machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub pattern: String,
    pub matches: Vec<MatchRecord>,
}

impl SearchReport {
    /// Drain `matches` into a report
    pub fn collect(pattern: &str, mut matches: MatchIter<'_>) -> Self {
        let mut records = Vec::with_capacity(matches.remaining());
        while let (Ok(position), Ok(suffix)) = (matches.position(), matches.get_str()) {
            records.push(MatchRecord {
                position,
                suffix: suffix.into_owned(),
            });
            if matches.advance().is_err() {
                break;
            }
        }
        Self {
            pattern: pattern.to_string(),
            matches: records,
        }
    }
}

/// Longest common substring in machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LcsReport {
    pub substring: String,
    pub length: usize,
}

impl LcsReport {
    pub fn new(substring: &[u8]) -> Self {
        Self {
            substring: String::from_utf8_lossy(substring).into_owned(),
            length: substring.len(),
        }
    }
}

/// Open stdout with the configured color mode
pub fn stdout(mode: ColorMode) -> StandardStream {
    let choice = match mode {
        ColorMode::Auto => ColorChoice::Auto,
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
    };
    StandardStream::stdout(choice)
}

/// Print every remaining match, highlighting the matched prefix
///
/// Returns the number of matches printed.
pub fn print_matches<W: WriteColor>(
    out: &mut W,
    matches: MatchIter<'_>,
    pattern_len: usize,
) -> io::Result<usize> {
    if matches.is_end() {
        writeln!(out, "No match found in the text.")?;
        return Ok(0);
    }

    writeln!(out, "Matches:")?;
    let mut count = 0;
    for suffix in matches {
        print_match_line(out, suffix, pattern_len)?;
        count += 1;
    }

    Ok(count)
}

/// Print a matched suffix with its prefix highlighted
fn print_match_line<W: WriteColor>(out: &mut W, suffix: &[u8], pattern_len: usize) -> io::Result<()> {
    let split = pattern_len.min(suffix.len());

    if split > 0 {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", String::from_utf8_lossy(&suffix[..split]))?;
        out.reset()?;
    }

    writeln!(out, "{}", String::from_utf8_lossy(&suffix[split..]))?;

    Ok(())
}

/// Print the longest common substring, or a notice when there is none
pub fn print_lcs<W: WriteColor>(out: &mut W, substring: &[u8]) -> io::Result<()> {
    if substring.is_empty() {
        writeln!(out, "No common substring found.")?;
        return Ok(());
    }

    write!(out, "Longest common substring: ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", String::from_utf8_lossy(substring))?;
    out.reset()?;
    writeln!(out)?;

    Ok(())
}

/// Print index statistics
pub fn print_stats<W: Write>(out: &mut W, stats: &IndexStats) -> io::Result<()> {
    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Text size:        {} bytes", stats.text_size)?;
    writeln!(out, "Suffix count:     {}", stats.suffix_count)?;
    writeln!(
        out,
        "Case-insensitive: {}",
        if stats.case_insensitive { "yes" } else { "no" }
    )?;
    Ok(())
}

/// Print a value as pretty JSON
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
