//! # Answers
//!
//! What the user typed, reduced to something the engine can grade.
//!
//! Parsing is lenient in the same way a browser's `parseInt` is: leading
//! whitespace and an optional sign are accepted, then the longest run of
//! digits is read and anything after it is ignored. Input without digits
//! becomes `NotANumber`, which never equals a correct answer.

/// A graded submission's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Value(i64),
    NotANumber,
}

impl Answer {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return Answer::NotANumber;
        }

        // Overflowing digit runs can never match a generated answer.
        match digits[..end].parse::<i64>() {
            Ok(value) if negative => Answer::Value(-value),
            Ok(value) => Answer::Value(value),
            Err(_) => Answer::NotANumber,
        }
    }

    /// Exact match against `expected`. `NotANumber` never matches.
    pub fn matches(&self, expected: i64) -> bool {
        matches!(self, Answer::Value(v) if *v == expected)
    }
}
