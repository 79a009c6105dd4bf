//! ISIN validation (ISO 6166).
//!
//! An ISIN is 12 characters: a 2-letter country code, a 9-character
//! alphanumeric NSIN and a single check digit. The check digit is a Luhn
//! mod-10 digit computed over the *expanded* digit string, in which every
//! letter is replaced by its two-digit value (A=10 … Z=35) and digits pass
//! through unchanged.
//!
//! The boolean functions in this module ([`is_valid`], [`checksum`]) never
//! fail: a malformed identifier is simply `false`. [`Isin::new`] performs the
//! same checks but reports which rule was broken.
//!
//! # Example
//!
//! ```
//! use bondval_bonds::identifiers::{self, Isin};
//!
//! assert!(identifiers::is_valid("US0378331005"));
//! assert_eq!(identifiers::generate("US037833100").unwrap(), "US0378331005");
//!
//! let isin = Isin::new("us0378331005").unwrap();
//! assert_eq!(isin.country_code(), "US");
//! assert_eq!(isin.nsin(), "037833100");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

const ISIN: &str = "ISIN";
const ISIN_LEN: usize = 12;

/// Validates format and checksum of an ISIN, case-insensitively.
#[must_use]
pub fn is_valid(isin: &str) -> bool {
    Isin::validate(isin).is_ok()
}

/// Returns true if the first two characters are letters.
#[must_use]
pub fn is_valid_country_code(country_code: &str) -> bool {
    country_code.len() == 2 && country_code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Returns true if the NSIN is exactly nine alphanumeric characters.
#[must_use]
pub fn is_valid_nsin(nsin: &str) -> bool {
    nsin.len() == 9 && nsin.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Verifies the Luhn checksum over the expanded digit string.
///
/// Only the checksum is tested; use [`is_valid`] for the full rule set.
/// Returns false if the input contains anything other than ASCII letters
/// and digits.
#[must_use]
pub fn checksum(isin: &str) -> bool {
    match to_digit_string(isin) {
        Some(digits) if !digits.is_empty() => luhn_remainder(&digits) == 0,
        _ => false,
    }
}

/// Calculates the check digit for the first 11 characters of an ISIN.
pub fn calculate_check_digit(isin11: &str) -> Result<u8, IdentifierError> {
    validate_base(isin11)?;

    let mut padded = isin11.to_ascii_uppercase();
    padded.push('0');
    let digits = to_digit_string(&padded).ok_or_else(|| IdentifierError::InvalidFormat {
        id_type: ISIN,
        reason: "Only letters and digits are allowed".to_string(),
    })?;

    let remainder = luhn_remainder(&digits);
    Ok((10 - remainder) % 10)
}

/// Builds a full 12-character ISIN by appending the check digit.
///
/// The result is uppercase.
pub fn generate(isin11: &str) -> Result<String, IdentifierError> {
    let check = calculate_check_digit(isin11)?;
    Ok(format!("{}{check}", isin11.to_ascii_uppercase()))
}

/// Expands letters to their two-digit values (A=10 … Z=35).
///
/// Returns `None` if any character is not an ASCII letter or digit.
#[must_use]
pub fn to_digit_string(value: &str) -> Option<String> {
    let mut digits = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c.is_ascii_alphabetic() {
            let v = u32::from(c.to_ascii_uppercase()) - u32::from('A') + 10;
            digits.push_str(&v.to_string());
        } else {
            return None;
        }
    }
    Some(digits)
}

/// Luhn mod-10 remainder of a digit string.
///
/// Scanning from the right, the rightmost digit is position 1 and is not
/// doubled; every even position is doubled, with 9 subtracted from results
/// above 9. A remainder of 0 means the string carries a valid check digit.
/// Non-digit characters are ignored.
#[must_use]
pub fn luhn_remainder(digits: &str) -> u8 {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    (sum % 10) as u8
}

/// Checks the 11-character prefix shared by validation and generation.
fn validate_base(base: &str) -> Result<(), IdentifierError> {
    let chars: Vec<char> = base.chars().collect();
    if chars.len() != ISIN_LEN - 1 {
        return Err(IdentifierError::InvalidLength {
            id_type: ISIN,
            expected: ISIN_LEN - 1,
            actual: chars.len(),
        });
    }

    if !chars[0].is_ascii_alphabetic() || !chars[1].is_ascii_alphabetic() {
        return Err(IdentifierError::InvalidFormat {
            id_type: ISIN,
            reason: "Country code must be two letters".to_string(),
        });
    }

    for (i, &c) in chars.iter().enumerate().skip(2) {
        if !c.is_ascii_alphanumeric() {
            return Err(IdentifierError::InvalidCharacter {
                id_type: ISIN,
                ch: c,
                position: i,
            });
        }
    }

    Ok(())
}

/// Validated ISIN, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isin(String);

impl Isin {
    /// Creates a new validated ISIN.
    pub fn new(value: &str) -> Result<Self, IdentifierError> {
        Self::validate(value)?;
        Ok(Self(value.to_ascii_uppercase()))
    }

    /// Validates an ISIN string, reporting the first rule it breaks.
    pub fn validate(value: &str) -> Result<(), IdentifierError> {
        let len = value.chars().count();
        if len != ISIN_LEN {
            return Err(IdentifierError::InvalidLength {
                id_type: ISIN,
                expected: ISIN_LEN,
                actual: len,
            });
        }

        // Length is checked in chars; everything below requires ASCII.
        if let Some((position, ch)) = value.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(IdentifierError::InvalidCharacter {
                id_type: ISIN,
                ch,
                position,
            });
        }

        validate_base(&value[..ISIN_LEN - 1])?;

        let check = value.as_bytes()[ISIN_LEN - 1] as char;
        if !check.is_ascii_digit() {
            return Err(IdentifierError::InvalidFormat {
                id_type: ISIN,
                reason: "Check digit must be numeric".to_string(),
            });
        }

        if !checksum(value) {
            return Err(IdentifierError::InvalidCheckDigit {
                id_type: ISIN,
                value: value.to_ascii_uppercase(),
            });
        }

        Ok(())
    }

    /// Returns the country code (first 2 characters).
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.0[0..2]
    }

    /// Returns the NSIN (National Securities Identifying Number, chars 3-11).
    #[must_use]
    pub fn nsin(&self) -> &str {
        &self.0[2..11]
    }

    /// Returns the check digit.
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[11] - b'0'
    }

    /// Returns the full ISIN string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Isin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Isin {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Isin {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Isin> for String {
    fn from(isin: Isin) -> Self {
        isin.0
    }
}
