//! Fallback log — bounded record of the recoveries an emitter took.
//!
//! Emitters never fail. When a walk meets something a validated program
//! cannot contain (an undefined point, a half-written statement) it recovers
//! silently as far as the output is concerned and notes the recovery here.

use std::collections::VecDeque;
use std::fmt;

/// The recovery an emitter took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// A test referenced a point never defined; an empty literal was used.
    UndefinedPoint { id: String },
    /// A point was defined again; the later definition replaced the earlier.
    Redefined { id: String },
    /// A point definition was cut short and skipped.
    AbandonedPointDef { id: String },
    /// A test statement was cut short and skipped.
    AbandonedTest,
    /// A coordinate was missing; zero was used.
    MissingNumber,
    /// A coordinate did not fit in 64 bits; it was saturated.
    NumberOutOfRange { lexeme: String },
}

/// A fallback together with the token index where it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEntry {
    pub pos: usize,
    pub fallback: Fallback,
}

impl fmt::Display for FallbackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token {}: ", self.pos)?;
        match &self.fallback {
            Fallback::UndefinedPoint { id } => {
                write!(f, "point '{id}' is not defined, substituted an empty literal")
            }
            Fallback::Redefined { id } => write!(f, "point '{id}' redefined, later definition wins"),
            Fallback::AbandonedPointDef { id } => {
                write!(f, "incomplete definition of '{id}' skipped")
            }
            Fallback::AbandonedTest => write!(f, "incomplete test statement skipped"),
            Fallback::MissingNumber => write!(f, "missing coordinate, used 0"),
            Fallback::NumberOutOfRange { lexeme } => {
                write!(f, "coordinate {lexeme} out of range, saturated")
            }
        }
    }
}

/// Circular buffer of recent fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackLog {
    entries: VecDeque<FallbackEntry>,
    capacity: usize,
    dropped: usize,
}

impl FallbackLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Record a fallback, evicting the oldest entry if at capacity.
    pub fn push(&mut self, pos: usize, fallback: Fallback) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(FallbackEntry { pos, fallback });
    }

    pub fn entries(&self) -> impl Iterator<Item = &FallbackEntry> {
        self.entries.iter()
    }

    /// Number of entries evicted because the log was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for FallbackLog {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = FallbackLog::new(10);
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.dropped(), 0);
    }

    #[test]
    fn push_and_read_in_order() {
        let mut log = FallbackLog::default();
        log.push(3, Fallback::AbandonedTest);
        log.push(9, Fallback::MissingNumber);
        let positions: Vec<usize> = log.entries().map(|e| e.pos).collect();
        assert_eq!(positions, vec![3, 9]);
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut log = FallbackLog::new(2);
        log.push(1, Fallback::AbandonedTest);
        log.push(2, Fallback::AbandonedTest);
        log.push(3, Fallback::AbandonedTest);
        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 1);
        assert_eq!(log.entries().next().map(|e| e.pos), Some(2));
    }

    #[test]
    fn zero_capacity_only_counts() {
        let mut log = FallbackLog::new(0);
        log.push(1, Fallback::AbandonedTest);
        assert!(log.is_empty());
        assert_eq!(log.dropped(), 1);
    }

    #[test]
    fn entry_display() {
        let entry = FallbackEntry {
            pos: 12,
            fallback: Fallback::UndefinedPoint { id: "d".into() },
        };
        assert_eq!(
            entry.to_string(),
            "token 12: point 'd' is not defined, substituted an empty literal"
        );
    }
}
