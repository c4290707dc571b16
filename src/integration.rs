//! Pure core integration functions.
//!
//! Pure functions that connect the input sources to the protocol parser
//! for the main event loop, testable without any I/O.

use crate::model::ParseError;
use crate::protocol::{self, HostMessage};

/// Process new JSONL lines into host messages.
///
/// Parses each line, collecting recognized messages and parse errors
/// separately. Lines carrying an unknown action parse cleanly but produce
/// no message, so the output can be shorter than the input even without
/// errors.
///
/// # Arguments
///
/// * `lines` - Raw JSONL lines to process
/// * `starting_line_number` - Line number of the first line (for error reporting)
pub fn process_lines(
    lines: Vec<String>,
    starting_line_number: usize,
) -> (Vec<HostMessage>, Vec<ParseError>) {
    let mut messages = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = starting_line_number + index;
        if line.trim().is_empty() {
            continue;
        }
        match protocol::parse_message(&line, line_number) {
            Ok(Some(message)) => messages.push(message),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }

    (messages, errors)
}
