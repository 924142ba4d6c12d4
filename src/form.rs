use crate::notify::notify_error;
use crate::notify::notify_success;
use crate::notify::AlertOptions;
use crate::store::Dispatch;

/// Strips spaces, dots, dashes and brackets. Returns `None` unless what is left
/// is an optional leading `+` followed by 7 to 15 digits.
pub fn normalize_phone(input: &str) -> Option<String> {
    let stripped: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    if digits.len() < 7 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(stripped)
}

/// Validates a phone number field and reports the outcome as an alert.
pub fn submit_phone(dispatch: &mut impl Dispatch, input: &str) -> Option<String> {
    match normalize_phone(input) {
        Some(phone) => {
            notify_success(
                dispatch,
                AlertOptions::default()
                    .title("Phone saved")
                    .message(phone.clone()),
            );
            Some(phone)
        }
        None => {
            notify_error(
                dispatch,
                AlertOptions::default()
                    .title("Invalid phone number")
                    .message(format!("\"{}\" is not a valid phone number", input.trim())),
            );
            None
        }
    }
}
