//! Amount normalization for Indonesian chat shorthand.
//!
//! Handles `50000`, `50.000`, `50,000`, `1.500.000`, `50rb`, `50ribu`,
//! `50k`, `2jt`, `2juta`, and decimal-with-suffix forms like `1.5jt` or
//! `2,5rb`.
//!
//! Separator rule for plain literals: exactly three digits after the last
//! `.`/`,` means every separator is a thousands separator. Anything else
//! is read as a decimal point, and the currency has no fractional units,
//! so such literals (`50,5`, `12.50`) are rejected.

use std::sync::LazyLock;

use catat_core::AmountError;
use regex::Regex;

static SUFFIXED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<int>[0-9]+)(?:[.,](?P<frac>[0-9]+))?(?P<suffix>rb|ribu|k|jt|juta)$")
        .expect("suffixed amount pattern")
});

static THOUSANDS_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,][0-9]{3}$").expect("thousands tail pattern"));

static DECIMAL_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",([0-9]{1,2})$").expect("decimal comma pattern"));

/// Power of ten a suffix multiplies by.
fn suffix_digits(suffix: &str) -> u32 {
    match suffix {
        "jt" | "juta" => 6,
        _ => 3,
    }
}

/// `int.frac * 10^digits`, truncating any fraction finer than one rupiah.
fn scale(int: &str, frac: Option<&str>, digits: u32, raw: &str) -> Result<i64, AmountError> {
    let overflow = || AmountError::Overflow(raw.to_string());

    let whole: i64 = int.parse().map_err(|_| overflow())?;
    let mut value = whole.checked_mul(10i64.pow(digits)).ok_or_else(overflow)?;

    if let Some(frac) = frac {
        let keep = &frac[..frac.len().min(digits as usize)];
        let part: i64 = keep.parse().map_err(|_| overflow())?;
        let part = part * 10i64.pow(digits - keep.len() as u32);
        value = value.checked_add(part).ok_or_else(overflow)?;
    }

    Ok(value)
}

/// Rewrite a plain literal so at most one `.` remains, as the decimal point.
fn canonical_literal(s: &str) -> String {
    if THOUSANDS_TAIL_RE.is_match(s) {
        return s.replace(['.', ','], "");
    }

    let decimal = DECIMAL_COMMA_RE.replace(s, ".${1}");
    let mut out = decimal.replace(',', "");

    if out.matches('.').count() > 1 {
        if let Some(last) = out.rfind('.') {
            let (head, tail) = out.split_at(last);
            out = format!("{}{}", head.replace('.', ""), tail);
        }
    }
    out
}

/// Normalize an amount token into whole rupiah, explaining any rejection.
pub fn normalize_amount(text: &str) -> Result<i64, AmountError> {
    let s = text.trim().to_lowercase();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }

    let value = if let Some(caps) = SUFFIXED_RE.captures(&s) {
        let digits = suffix_digits(&caps["suffix"]);
        scale(
            &caps["int"],
            caps.name("frac").map(|m| m.as_str()),
            digits,
            &s,
        )?
    } else {
        let plain = s
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',');
        if !plain || !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(AmountError::NotNumeric(s));
        }

        let literal = canonical_literal(&s);
        let int = match literal.split_once('.') {
            Some((_, frac)) if !frac.is_empty() => return Err(AmountError::BareDecimal(s)),
            Some((int, _)) => int,
            None => literal.as_str(),
        };
        if int.is_empty() {
            return Err(AmountError::NotNumeric(s));
        }
        scale(int, None, 0, &s)?
    };

    if value <= 0 {
        return Err(AmountError::NotPositive);
    }
    Ok(value)
}

/// Parse an amount token; `None` for anything malformed or not positive.
pub fn parse_amount(text: &str) -> Option<i64> {
    normalize_amount(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(parse_amount("50rb"), Some(50_000));
        assert_eq!(parse_amount("50ribu"), Some(50_000));
        assert_eq!(parse_amount("50k"), Some(50_000));
        assert_eq!(parse_amount("2jt"), Some(2_000_000));
        assert_eq!(parse_amount("2JUTA"), Some(2_000_000));
    }

    #[test]
    fn test_decimal_with_suffix() {
        assert_eq!(parse_amount("1.5jt"), Some(1_500_000));
        assert_eq!(parse_amount("2,5jt"), Some(2_500_000));
        assert_eq!(parse_amount("7.5rb"), Some(7_500));
        assert_eq!(parse_amount("1.5k"), Some(1_500));
        assert_eq!(parse_amount("1.25jt"), Some(1_250_000));
        // Separator before a suffix is always a decimal point
        assert_eq!(parse_amount("1.500rb"), Some(1_500));
        // Sub-rupiah precision is truncated
        assert_eq!(parse_amount("1.2345rb"), Some(1_234));
    }

    #[test]
    fn test_separator_boundaries() {
        assert_eq!(parse_amount("50000"), Some(50_000));
        assert_eq!(parse_amount("50.000"), Some(50_000));
        assert_eq!(parse_amount("50,000"), Some(50_000));
        assert_eq!(parse_amount("1.500.000"), Some(1_500_000));
        assert_eq!(parse_amount("1,500,000"), Some(1_500_000));
    }

    #[test]
    fn test_two_digit_tail_is_decimal_and_rejected() {
        assert_eq!(
            normalize_amount("50,5"),
            Err(AmountError::BareDecimal("50,5".into()))
        );
        assert_eq!(parse_amount("50,50"), None);
        assert_eq!(parse_amount("12.50"), None);
        assert_eq!(parse_amount("1.500,25"), None);
        assert_eq!(parse_amount("1.2345"), None);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(normalize_amount(""), Err(AmountError::Empty));
        assert_eq!(normalize_amount("0"), Err(AmountError::NotPositive));
        assert_eq!(normalize_amount("0rb"), Err(AmountError::NotPositive));
        assert!(matches!(
            normalize_amount("abc"),
            Err(AmountError::NotNumeric(_))
        ));
        assert!(matches!(
            normalize_amount(".,"),
            Err(AmountError::NotNumeric(_))
        ));
        assert!(matches!(
            normalize_amount("1.500.000rb"),
            Err(AmountError::NotNumeric(_))
        ));
        assert!(matches!(
            normalize_amount("99999999999999999999"),
            Err(AmountError::Overflow(_))
        ));
        assert!(matches!(
            normalize_amount("9999999999999jt"),
            Err(AmountError::Overflow(_))
        ));
    }
}
