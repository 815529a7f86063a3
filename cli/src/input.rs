//! Line-based choice input.

use std::io::{self, BufRead};

/// Line that ends choice entry.
pub const SENTINEL: &str = "Q";

/// Read choice labels, one per line, until [`SENTINEL`] or end of input.
///
/// Trailing whitespace is trimmed and blank lines are skipped, so `"first "`
/// selects `first` and an empty line is not submitted as a label.
pub fn read_choices<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut choices = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let choice = line.trim_end();
        if choice == SENTINEL {
            break;
        }
        if choice.is_empty() {
            continue;
        }
        choices.push(choice.to_string());
    }
    Ok(choices)
}
