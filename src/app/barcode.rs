//! Barcode validation for the front end.

use log::debug;

use crate::config::{BARCODE_MAX_LENGTH, BARCODE_MIN_LENGTH};
use crate::error_handling::messages::{BARCODE_BAD_LENGTH, BARCODE_NOT_NUMERIC, BARCODE_REQUIRED};
use crate::error_handling::{FailureKind, TrackingError};

/// Validates and normalizes a user-supplied barcode.
///
/// Trims surrounding whitespace, converts Persian (U+06F0..U+06F9) and
/// Arabic-Indic (U+0660..U+0669) digits to ASCII, then requires only digits and
/// a length within `BARCODE_MIN_LENGTH..=BARCODE_MAX_LENGTH`.
///
/// # Errors
///
/// Returns a `TrackingError` with the message to show the user when the input
/// is empty, contains a non-digit, or has the wrong length.
///
/// # Examples
///
/// ```
/// use iranpost_tracker::validate_barcode;
///
/// assert_eq!(validate_barcode(" ۱۲۳۴۵ ").unwrap(), "12345");
/// assert!(validate_barcode("12a45").is_err());
/// ```
pub fn validate_barcode(input: &str) -> Result<String, TrackingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(reject(BARCODE_REQUIRED));
    }

    let barcode: String = trimmed
        .chars()
        .map(|c| ascii_digit(c).ok_or_else(|| reject(BARCODE_NOT_NUMERIC)))
        .collect::<Result<_, _>>()?;

    if !(BARCODE_MIN_LENGTH..=BARCODE_MAX_LENGTH).contains(&barcode.len()) {
        debug!("Barcode has {} digit(s)", barcode.len());
        return Err(reject(BARCODE_BAD_LENGTH));
    }

    Ok(barcode)
}

fn reject(message: &str) -> TrackingError {
    debug!("{}: {}", FailureKind::Validation, message);
    TrackingError::new(message)
}

fn ascii_digit(c: char) -> Option<char> {
    let offset = match c {
        '0'..='9' => return Some(c),
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        _ => return None,
    };
    char::from_digit(offset, 10)
}
