use crate::time::error::Error;
use serde_derive::Serialize;
use std::iter::repeat;

const MILLIS_DIGITS: usize = 3;

/// Start and stop of an execution in milliseconds. Both bounds are unset for an empty window.
#[derive(Debug, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<i64>,
}

impl TimeWindow {
    pub fn new(start: i64, stop: i64) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
        }
    }

    /// Window from the start of `first` to the stop of `last`.
    pub fn span(first: &TimeWindow, last: &TimeWindow) -> Self {
        Self {
            start: first.start,
            stop: last.stop,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.stop.is_none()
    }
}

/// Converts seconds into milliseconds, truncating toward zero.
///
/// The shortest decimal representation of the value is shifted by three digits,
/// so `12.345` gives exactly `12345` instead of a binary rounding artifact.
pub fn millis_from_seconds(seconds: Option<f64>) -> Option<i64> {
    seconds.and_then(|value| checked_millis(value).ok())
}

/// Builds a window from an optional start and a duration, both in seconds.
///
/// Without a start the window degenerates to `[duration, duration]`. Missing duration or
/// any conversion failure gives an empty window.
pub fn time_window(start: Option<f64>, duration: Option<f64>) -> TimeWindow {
    match duration {
        Some(duration) => checked_window(start, duration).unwrap_or_default(),
        None => TimeWindow::default(),
    }
}

fn checked_window(start: Option<f64>, duration: f64) -> Result<TimeWindow, Error> {
    let duration_ms = checked_millis(duration)?;
    match start {
        Some(start) => {
            let start_ms = checked_millis(start)?;
            let stop_ms = start_ms
                .checked_add(duration_ms)
                .ok_or_else(|| Error::Overflow(format!("{} + {}", start, duration)))?;
            Ok(TimeWindow::new(start_ms, stop_ms))
        }
        None => Ok(TimeWindow::new(duration_ms, duration_ms)),
    }
}

fn checked_millis(seconds: f64) -> Result<i64, Error> {
    if !seconds.is_finite() {
        return Err(Error::NotFinite(seconds.to_string()));
    }
    // Display of f64 is the shortest round-trip form and never uses an exponent
    let text = seconds.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (whole, fraction) = match digits.find('.') {
        Some(index) => (&digits[..index], &digits[index + 1..]),
        None => (digits, ""),
    };
    let mut shifted = String::with_capacity(whole.len() + MILLIS_DIGITS);
    shifted.push_str(whole);
    shifted.extend(fraction.chars().chain(repeat('0')).take(MILLIS_DIGITS));
    let magnitude = shifted
        .parse::<i64>()
        .map_err(|_| Error::Overflow(text.clone()))?;
    Ok(if negative { -magnitude } else { magnitude })
}
