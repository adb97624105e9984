//! Integer exercises.

use crate::error::KataError;

/// `Fizz` for multiples of 3, `Buzz` for multiples of 5, `FizzBuzz` for
/// multiples of both, otherwise the number itself.
#[must_use]
pub fn fizzbuzz(n: u64) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}

/// `n!`
///
/// # Errors
///
/// Returns [`KataError::Overflow`] for `n > 20`.
pub fn factorial(n: u64) -> Result<u64, KataError> {
    (1..=n)
        .try_fold(1_u64, u64::checked_mul)
        .ok_or(KataError::Overflow {
            operation: "factorial",
        })
}

/// Sum of the decimal digits of `n`.
#[must_use]
pub const fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum until a single digit remains.
#[must_use]
pub const fn digital_root(mut n: u64) -> u64 {
    while n >= 10 {
        n = digit_sum(n);
    }
    n
}

/// Luhn checksum, as used for credit card numbers.
///
/// Starting from the rightmost digit, every second digit is doubled (with 9
/// subtracted when the result exceeds 9); the number is valid when the
/// total is a multiple of 10. Zero has no digits to check and is rejected.
#[must_use]
pub const fn is_luhn_valid(mut n: u64) -> bool {
    if n == 0 {
        return false;
    }
    let mut sum = 0;
    let mut double = false;
    while n > 0 {
        let mut digit = n % 10;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
        n /= 10;
    }
    sum % 10 == 0
}
