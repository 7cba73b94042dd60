//! Natural ("human") string ordering
//!
//! A string is split into alternating runs of ASCII digits and non-digits.
//! Runs compare pairwise: two digit runs by integer value with leading zeros
//! ignored, anything else lexicographically. When one run sequence is a
//! prefix of the other, the shorter sequence sorts first.

use std::cmp::Ordering;

/// One maximal run of digits or non-digits.
#[derive(Clone, Debug)]
enum Run {
    /// `raw` is the run as written; `digits` has leading zeros removed.
    Number { raw: String, digits: String },
    Text(String),
}

impl Run {
    fn raw(&self) -> &str {
        match self {
            Run::Number { raw, .. } => raw,
            Run::Text(text) => text,
        }
    }
}

impl Ord for Run {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Run::Number { digits: a, .. }, Run::Number { digits: b, .. }) => {
                // Without leading zeros a longer digit string is a larger
                // number, so length first keeps arbitrary widths exact.
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Run::Text(a), Run::Text(b)) => a.cmp(b),
            _ => self.raw().cmp(other.raw()),
        }
    }
}

impl PartialEq for Run {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Run {}

impl PartialOrd for Run {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pre-tokenized natural sort key.
///
/// Tokenizing once per entry keeps comparisons allocation free during the
/// sort itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NaturalKey(Vec<Run>);

impl NaturalKey {
    pub fn new(value: &str) -> Self {
        let mut runs = Vec::new();
        let mut current = String::new();
        let mut in_digits = false;

        for ch in value.chars() {
            let is_digit = ch.is_ascii_digit();
            if !current.is_empty() && is_digit != in_digits {
                runs.push(finish_run(std::mem::take(&mut current), in_digits));
            }
            in_digits = is_digit;
            current.push(ch);
        }
        if !current.is_empty() {
            runs.push(finish_run(current, in_digits));
        }

        NaturalKey(runs)
    }

    /// Number of runs the value was split into.
    pub fn run_count(&self) -> usize {
        self.0.len()
    }
}

fn finish_run(raw: String, digits: bool) -> Run {
    if digits {
        let stripped = raw.trim_start_matches('0');
        let digits = if stripped.is_empty() { "0" } else { stripped };
        Run::Number {
            digits: digits.to_string(),
            raw,
        }
    } else {
        Run::Text(raw)
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Vec's lexicographic order already puts a strict prefix first.
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}
