//! Validation of enumerated environment variable values
//!
//! Invalid values fall back to the current setting and print a warning with a
//! typo suggestion when one is close enough.

use std::io::Write;

/// Validator for an environment variable with a fixed set of accepted values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, writing a warning to `writer` and returning `default` on failure.
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, default: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let hint = match self.closest(value) {
            Some(candidate) => format!(". Did you mean '{}'?", candidate),
            None => String::new(),
        };
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        default
    }

    /// Closest accepted value within two edits, excluding exact matches.
    fn closest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|&candidate| (candidate, levenshtein(&input, candidate)))
            .filter(|&(_, dist)| dist > 0 && dist <= 2)
            .min_by_key(|&(_, dist)| dist)
            .map(|(candidate, _)| candidate)
    }
}

/// Byte-wise Levenshtein distance, used for typo suggestions.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
