//! Allocator event records

use std::fmt;

/// Direction of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Alloc,
    Free,
}

impl Mode {
    /// Parse the log prefix (`+` or `-`)
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "+" => Some(Mode::Alloc),
            "-" => Some(Mode::Free),
            _ => None,
        }
    }

    /// Occupancy delta applied to every unit covered by the event
    pub fn delta(self) -> i32 {
        match self {
            Mode::Alloc => 1,
            Mode::Free => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Alloc => "alloc",
            Mode::Free => "free",
        }
    }
}

/// One allocation or free, in address units
///
/// Offsets and sizes are kept exactly as logged; neither sign nor overlap is
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub mode: Mode,
    pub offset: i64,
    pub size: i64,
}

impl Event {
    pub fn new(mode: Mode, offset: i64, size: i64) -> Self {
        Event { mode, offset, size }
    }

    pub fn alloc(offset: i64, size: i64) -> Self {
        Self::new(Mode::Alloc, offset, size)
    }

    pub fn free(offset: i64, size: i64) -> Self {
        Self::new(Mode::Free, offset, size)
    }

    /// One past the last unit touched (`offset + size`), widened so it cannot overflow
    pub fn end(&self) -> i128 {
        self.offset as i128 + self.size as i128
    }
}

/// Renders the annotation line, e.g. `alloc 0x00000010 : 32`
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.offset < 0 { "-" } else { "" };
        write!(
            f,
            "{:<5} {}0x{:08x} : {}",
            self.mode.label(),
            sign,
            self.offset.unsigned_abs(),
            self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_alloc() {
        assert_eq!(Event::alloc(16, 32).to_string(), "alloc 0x00000010 : 32");
    }

    #[test]
    fn test_display_free_is_padded() {
        assert_eq!(Event::free(0xdead, 4).to_string(), "free  0x0000dead : 4");
    }

    #[test]
    fn test_display_negative_values() {
        assert_eq!(Event::alloc(-10, -3).to_string(), "alloc -0x0000000a : -3");
    }

    #[test]
    fn test_end_does_not_overflow() {
        let event = Event::alloc(i64::MAX, i64::MAX);
        assert_eq!(event.end(), i64::MAX as i128 * 2);
    }

    #[test]
    fn test_mode_prefix() {
        assert_eq!(Mode::from_prefix("+"), Some(Mode::Alloc));
        assert_eq!(Mode::from_prefix("-"), Some(Mode::Free));
        assert_eq!(Mode::from_prefix("*"), None);
        assert_eq!(Mode::Alloc.delta(), 1);
        assert_eq!(Mode::Free.delta(), -1);
    }
}
