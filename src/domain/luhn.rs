//! The Luhn (mod 10) checksum.
//!
//! Both functions expect a plain digit string. Normalizing user input is the
//! job of [`CardNumber`](super::card_number::CardNumber), so anything that is
//! not an ASCII digit makes the input fail instead of being skipped.

/// Returns `true` when `digits` is a non-empty digit string whose Luhn sum is
/// a multiple of ten.
pub fn is_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    luhn_sum(digits, false) == Some(0)
}

/// Computes the digit that has to be appended to `payload` so that the
/// result passes [`is_valid`].
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }
    // The rightmost payload digit becomes the second digit from the right
    // once the check digit is appended, so doubling starts immediately.
    let sum = luhn_sum(payload, true)?;
    Some(((10 - sum) % 10) as u8)
}

/// Luhn sum modulo 10, or `None` if `digits` holds a non-digit.
fn luhn_sum(digits: &str, double_first: bool) -> Option<u32> {
    let mut sum: u32 = 0;
    let mut double = double_first;
    for byte in digits.bytes().rev() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = u32::from(byte - b'0');
        let value = if !double {
            digit
        } else if digit > 4 {
            digit * 2 - 9
        } else {
            digit * 2
        };
        sum = (sum + value) % 10;
        double = !double;
    }
    Some(sum)
}
