use std::fmt;

// ── Patient ────────────────────────────────────────────────────────────────────

/// A patient waiting at (or already seen by) the intake desk.
///
/// A patient is nothing more than the name typed by the operator. Two patients
/// with the same name are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Patient(String);

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw name, exactly as typed.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Patient {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Patient {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Patient {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ── Intake count ───────────────────────────────────────────────────────────────

/// Interpret the operator's answer to "how many patients" as an iteration count.
///
/// Surrounding whitespace is ignored and the leading run of decimal digits
/// (after an optional sign) is read, so `"3 patients"` gives 3 and `"2.9"`
/// gives 2. Input with no leading digits, a negative value, or a value that
/// does not fit in `usize` gives 0: the intake phase is skipped and the menu
/// opens straight away.
///
/// # Examples
///
/// ```
/// use desk_core::models::parse_count;
///
/// assert_eq!(parse_count("2"), 2);
/// assert_eq!(parse_count(" 4 "), 4);
/// assert_eq!(parse_count("3 patients"), 3);
/// assert_eq!(parse_count("abc"), 0);
/// assert_eq!(parse_count("-5"), 0);
/// ```
pub fn parse_count(input: &str) -> usize {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        tracing::warn!(input, "patient count is not a number; collecting no patients");
        return 0;
    }
    if negative {
        // "-0" is still zero, only warn about real negatives.
        if digits.bytes().any(|b| b != b'0') {
            tracing::warn!(input, "patient count is negative; collecting no patients");
        }
        return 0;
    }

    match digits.parse::<usize>() {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(input, error = %e, "patient count out of range; collecting no patients");
            0
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Patient ───────────────────────────────────────────────────────────────

    #[test]
    fn test_patient_display_is_raw_name() {
        let p = Patient::new("  Ana Maria ");
        assert_eq!(p.to_string(), "  Ana Maria ");
        assert_eq!(p.name(), "  Ana Maria ");
    }

    #[test]
    fn test_patient_equality_is_exact() {
        assert_eq!(Patient::from("Alice"), Patient::new("Alice".to_string()));
        assert_ne!(Patient::from("Alice"), Patient::from("alice"));
        assert_ne!(Patient::from("Alice"), Patient::from("Alice "));
        assert!(Patient::from("Bob") == *"Bob");
    }

    #[test]
    fn test_patient_empty_name_allowed() {
        let p = Patient::from("");
        assert_eq!(p.name(), "");
    }

    // ── parse_count ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_count_plain_numbers() {
        assert_eq!(parse_count("0"), 0);
        assert_eq!(parse_count("2"), 2);
        assert_eq!(parse_count("15"), 15);
        assert_eq!(parse_count("+3"), 3);
    }

    #[test]
    fn test_parse_count_ignores_surrounding_whitespace() {
        assert_eq!(parse_count("  7\t"), 7);
        assert_eq!(parse_count("3\r"), 3);
    }

    #[test]
    fn test_parse_count_reads_leading_digits() {
        assert_eq!(parse_count("3 patients"), 3);
        assert_eq!(parse_count("2.9"), 2);
        assert_eq!(parse_count("12abc"), 12);
    }

    #[test]
    fn test_parse_count_non_numeric_is_zero() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("   "), 0);
        assert_eq!(parse_count("two"), 0);
        assert_eq!(parse_count("-"), 0);
        assert_eq!(parse_count("x3"), 0);
    }

    #[test]
    fn test_parse_count_negative_is_zero() {
        assert_eq!(parse_count("-1"), 0);
        assert_eq!(parse_count("-0"), 0);
        assert_eq!(parse_count("-42 people"), 0);
    }

    #[test]
    fn test_parse_count_overflow_is_zero() {
        assert_eq!(parse_count("99999999999999999999999999999"), 0);
    }
}
