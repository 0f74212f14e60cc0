//! `xsd:duration` values.
//!
//! Durations are held as an exact [`TimeDelta`] with nanosecond precision,
//! the finest `TimeDelta` holds, so every value written parses back equal.
//! Calendar components are approximated on input: a year is 365 days and a
//! month 30 days. Output always uses the day/time form.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::scalar::ScalarError;

const SECOND: i128 = 1_000_000_000;
const FRACTION_DIGITS: usize = 9;
const MINUTE: i128 = 60 * SECOND;
const HOUR: i128 = 60 * MINUTE;
const DAY: i128 = 24 * HOUR;
const WEEK: i128 = 7 * DAY;
const MONTH: i128 = 30 * DAY;
const YEAR: i128 = 365 * DAY;

const KIND: &str = "xsd:duration";

/// An `xsd:duration` such as `PT2H30M` or `-P1D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsdDuration(pub TimeDelta);

impl XsdDuration {
    /// Returns the wrapped delta.
    #[must_use]
    pub fn as_delta(self) -> TimeDelta {
        self.0
    }
}

impl From<TimeDelta> for XsdDuration {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl FromStr for XsdDuration {
    type Err = ScalarError;

    fn from_str(text: &str) -> Result<Self, ScalarError> {
        parse(text).ok_or_else(|| ScalarError::text(KIND, text))
    }
}

fn parse(text: &str) -> Option<XsdDuration> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let rest = rest.strip_prefix('P')?;
    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };
    // `P` alone and a dangling `T` both name no component.
    if time == Some("") || (date.is_empty() && time.is_none()) {
        return None;
    }

    let mut nanos = components(date, &[('Y', YEAR), ('M', MONTH), ('W', WEEK), ('D', DAY)])?;
    if let Some(time) = time {
        nanos = nanos.checked_add(components(
            time,
            &[('H', HOUR), ('M', MINUTE), ('S', SECOND)],
        )?)?;
    }
    if negative {
        nanos = -nanos;
    }
    let secs = i64::try_from(nanos.div_euclid(SECOND)).ok()?;
    let subsec = u32::try_from(nanos.rem_euclid(SECOND)).ok()?;
    TimeDelta::new(secs, subsec).map(XsdDuration)
}

/// Sums `<number><designator>` pairs. Designators must appear in the order
/// given, each at most once; only seconds may carry a fraction, of at most
/// nine digits.
fn components(part: &str, units: &[(char, i128)]) -> Option<i128> {
    let mut total: i128 = 0;
    let mut next = 0;
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        let offset = units.get(next..)?.iter().position(|(d, _)| *d == c)?;
        let (designator, unit) = units[next + offset];
        next += offset + 1;
        total = total.checked_add(amount(&part[start..i], unit, designator == 'S')?)?;
        start = i + c.len_utf8();
    }
    // Digits with no designator after them.
    if start != part.len() {
        return None;
    }
    Some(total)
}

fn amount(digits: &str, unit: i128, fractional: bool) -> Option<i128> {
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match digits.split_once('.') {
        None if numeric(digits) => digits.parse::<i128>().ok()?.checked_mul(unit),
        Some((whole, frac))
            if fractional && numeric(whole) && numeric(frac) && frac.len() <= FRACTION_DIGITS =>
        {
            let whole = whole.parse::<i128>().ok()?.checked_mul(unit)?;
            let nanos = format!("{frac:0<width$}", width = FRACTION_DIGITS);
            whole.checked_add(nanos.parse::<i128>().ok()?)
        }
        _ => None,
    }
}

impl fmt::Display for XsdDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `subsec_nanos` carries the sign of the delta.
        let total =
            i128::from(self.0.num_seconds()) * SECOND + i128::from(self.0.subsec_nanos());
        if total < 0 {
            f.write_str("-")?;
        }
        let mut rest = total.abs();
        let days = rest / DAY;
        rest %= DAY;
        let hours = rest / HOUR;
        rest %= HOUR;
        let minutes = rest / MINUTE;
        rest %= MINUTE;
        let seconds = rest / SECOND;
        let nanos = rest % SECOND;

        f.write_str("P")?;
        if days > 0 {
            write!(f, "{days}D")?;
        }
        if hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
            if days == 0 {
                f.write_str("T0S")?;
            }
            return Ok(());
        }
        f.write_str("T")?;
        if hours > 0 {
            write!(f, "{hours}H")?;
        }
        if minutes > 0 {
            write!(f, "{minutes}M")?;
        }
        if nanos > 0 {
            let fraction = format!("{nanos:0>width$}", width = FRACTION_DIGITS);
            write!(f, "{seconds}.{}S", fraction.trim_end_matches('0'))?;
        } else if seconds > 0 {
            write!(f, "{seconds}S")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(text: &str) -> Option<i64> {
        parse(text).map(|d| d.0.num_milliseconds())
    }

    #[test]
    fn parses_time_components() {
        assert_eq!(millis("PT2H30M"), Some(9_000_000));
        assert_eq!(millis("PT1.5S"), Some(1_500));
        assert_eq!(millis("PT0.25S"), Some(250));
    }

    #[test]
    fn parses_date_components_with_calendar_approximation() {
        assert_eq!(millis("P1D"), Some(86_400_000));
        assert_eq!(millis("P1W"), Some(7 * 86_400_000));
        assert_eq!(millis("P1Y"), Some(365 * 86_400_000));
        assert_eq!(millis("P1M"), Some(30 * 86_400_000));
        assert_eq!(millis("P1MT1M"), Some(30 * 86_400_000 + 60_000));
    }

    #[test]
    fn negative_durations() {
        assert_eq!(millis("-PT5S"), Some(-5_000));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "P", "PT", "P1DT", "1D", "PD", "P1S", "PT1D", "P1.5D", "PT5", "P1D1Y", "PT1H1H"] {
            assert_eq!(millis(bad), None, "accepted {bad:?}");
        }
    }

    #[test]
    fn formats_canonically() {
        let show = |text: &str| parse(text).map(|d| d.to_string());
        assert_eq!(show("PT0S").as_deref(), Some("PT0S"));
        assert_eq!(show("PT90M").as_deref(), Some("PT1H30M"));
        assert_eq!(show("P1Y").as_deref(), Some("P365D"));
        assert_eq!(show("P1DT1.5S").as_deref(), Some("P1DT1.5S"));
        assert_eq!(show("-P2D").as_deref(), Some("-P2D"));
    }

    #[test]
    fn keeps_sub_millisecond_precision() {
        let micros = XsdDuration(TimeDelta::microseconds(1500));
        assert_eq!(micros.to_string(), "PT0.0015S");
        assert_eq!(parse("PT0.0015S"), Some(micros));
        assert_eq!(
            parse("PT1.000000001S").map(|d| d.0),
            Some(TimeDelta::nanoseconds(1_000_000_001))
        );
        assert_eq!(parse("PT1.0000000001S"), None);
    }

    #[test]
    fn negative_fractions_format_with_one_sign() {
        let delta = XsdDuration(TimeDelta::nanoseconds(-4_999_999_997));
        assert_eq!(delta.to_string(), "-PT4.999999997S");
        assert_eq!(parse(&delta.to_string()), Some(delta));
    }

    #[test]
    fn formatted_output_parses_back() {
        for text in ["PT5M", "P3DT4H", "PT0.001S", "-PT1H", "P400DT0.000000123S"] {
            let parsed = parse(text).expect("valid duration");
            assert_eq!(parse(&parsed.to_string()), Some(parsed));
        }
    }
}
