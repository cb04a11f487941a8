//! Line-oriented parser for allocator replay logs
//!
//! Each line is matched against `^([+-]) (-?[0-9]+) (-?[0-9]+)$`. Lines are
//! split on `\n` only, so a trailing `\r` makes a line malformed. Malformed
//! lines, including ones whose integers do not fit in an `i64`, are skipped
//! without error.

use super::event::{Event, Mode};
use regex::Regex;
use tracing::debug;

const EVENT_PATTERN: &str = r"^([+-]) (-?[0-9]+) (-?[0-9]+)$";

/// Extracts [`Event`]s from raw log text
pub struct Parser {
    pattern: Regex,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            // The pattern is a literal, it always compiles
            pattern: Regex::new(EVENT_PATTERN).expect("event pattern is valid"),
        }
    }

    /// Parse a single line, `None` if it is not an event
    pub fn parse_line(&self, line: &str) -> Option<Event> {
        let caps = self.pattern.captures(line)?;
        let mode = Mode::from_prefix(&caps[1])?;
        let offset = caps[2].parse::<i64>().ok()?;
        let size = caps[3].parse::<i64>().ok()?;
        Some(Event::new(mode, offset, size))
    }

    /// Parse every event in `text`, in line order
    pub fn parse(&self, text: &str) -> Vec<Event> {
        let mut events = Vec::new();
        let mut skipped = 0usize;

        for line in text.split('\n') {
            match self.parse_line(line) {
                Some(event) => events.push(event),
                None if line.is_empty() => {}
                None => skipped += 1,
            }
        }

        debug!(events = events.len(), skipped, "parsed replay log");
        events
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around [`Parser::parse`]
pub fn parse_events(text: &str) -> Vec<Event> {
    Parser::new().parse(text)
}
