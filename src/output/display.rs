//! Display functions for command results

use super::formatters::line_tiles;
use crate::commands::{ClassifyResult, FrequencySort};
use crate::core::Word;
use colored::Colorize;
use std::io::{self, Write};

/// Print the feedback row for a classified guess
pub fn print_classify_result(result: &ClassifyResult) {
    println!(
        "\n{} {} {}",
        result.guess.to_uppercase().bright_white().bold(),
        "vs".bright_black(),
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("  {}  {}", line_tiles(&result.line), result.line.to_emoji());
    for symbol in result.line.symbols() {
        println!("  {symbol}");
    }
}

/// Write one word per line
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_words<'a, W: Write>(
    out: &mut W,
    words: impl IntoIterator<Item = &'a Word>,
) -> io::Result<()> {
    for word in words {
        writeln!(out, "{word}")?;
    }
    out.flush()
}

/// Report the words a frequency sort could not find, on stderr
pub fn print_missing_words(label: &str, result: &FrequencySort<'_>) {
    let missing: Vec<&str> = result.missing.iter().map(|w| w.text()).collect();
    eprintln!(
        "{} {}",
        format!("Missing words in {label}:").yellow(),
        missing.join(", ")
    );
    eprintln!("Count: {}", missing.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn write_words_one_per_line() {
        let words = words_from_slice(&["stare", "slain"]);
        let mut out = Vec::new();
        write_words(&mut out, &words).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "stare\nslain\n");
    }
}
