//! Request scripts for the `run` command
//!
//! One request per line: `ELEMENT TYPE COORDINATE`. The element and type are
//! single words; everything after them is the coordinate, kept verbatim so
//! `(10, 20)` survives. Blank lines and lines starting with `#` are skipped.

use anyhow::{anyhow, Result};

/// A single request read from a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequest {
    /// 1-based line number in the script
    pub line: usize,
    pub element: String,
    pub variant: String,
    pub coordinate: String,
}

/// Parse every request in `content`, failing on the first malformed line
pub fn parse_script(content: &str) -> Result<Vec<ScriptRequest>> {
    let mut requests = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (element, rest) = next_word(trimmed);
        let (variant, coordinate) = next_word(rest);
        if variant.is_empty() || coordinate.is_empty() {
            return Err(anyhow!(
                "line {}: expected ELEMENT TYPE COORDINATE, found {:?}",
                line,
                trimmed
            ));
        }

        requests.push(ScriptRequest {
            line,
            element: element.to_string(),
            variant: variant.to_string(),
            coordinate: coordinate.to_string(),
        });
    }

    Ok(requests)
}

/// Split off the first word; the remainder has its leading whitespace removed
fn next_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}
