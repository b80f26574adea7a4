use serde::{Serialize, Serializer};
use std::fmt;

use crate::utils::error::{KeyError, Result};

/// Bank code of Algérie Poste, fixed for every CCP account.
pub const BANK_CODE: &str = "007";
/// Agency code shared by every CCP account.
pub const AGENCY_CODE: &str = "99999";
/// Logical width of an account number, in digits.
pub const ACCOUNT_WIDTH: usize = 10;

/// A CCP account number, left-zero-padded to exactly ten digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Strips any stray non-digit characters, then left-pads with zeros
    /// to ten digits. Callers are expected to pre-sanitize; the strip is
    /// a documented fallback. More than ten digits is refused rather
    /// than truncated.
    pub fn normalize(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() > ACCOUNT_WIDTH {
            return Err(KeyError::TooManyDigits {
                count: digits.len(),
            });
        }
        Ok(AccountNumber(format!("{:0>width$}", digits, width = ACCOUNT_WIDTH)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the padded account. Ten digits top out at
    /// 9_999_999_999, exact in a u64.
    pub fn value(&self) -> u64 {
        self.0.bytes().fold(0, |n, b| n * 10 + u64::from(b - b'0'))
    }

    fn digit_values(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.bytes().map(|b| u64::from(b - b'0'))
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountNumber {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A check key in 0..=99, rendered as two zero-padded digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckKey(u8);

impl CheckKey {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CheckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for CheckKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Everything derived from one account number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Computation {
    pub account: AccountNumber,
    pub ccp_key: CheckKey,
    pub rip_key: CheckKey,
    pub identifier: String,
}

/// CCP key: weighted sum over the padded digits, weights 13 down to 4
/// left to right, taken modulo 100.
pub fn ccp_key(account: &AccountNumber) -> CheckKey {
    let sum: u64 = account
        .digit_values()
        .enumerate()
        .map(|(i, d)| d * (13 - i as u64))
        .sum();
    CheckKey((sum % 100) as u8)
}

/// RIP key for bank 007 / agency 99999:
/// k = 97 - (((n mod 97) * 3 mod 97 + 85) mod 97), with 97 mapped to 0.
/// The constants are specific to this bank/agency pair and are not
/// assumed to generalize.
pub fn rip_key(account: &AccountNumber) -> CheckKey {
    let r = account.value() % 97;
    let k = 97 - ((r * 3) % 97 + 85) % 97;
    CheckKey(if k == 97 { 0 } else { k as u8 })
}

/// Composite RIP line: bank, agency, padded account, RIP key, separated
/// by single spaces.
pub fn format_identifier(account: &AccountNumber, rip_key: CheckKey) -> String {
    format!("{} {} {} {}", BANK_CODE, AGENCY_CODE, account, rip_key)
}

/// Normalizes the raw input, derives both keys and formats the RIP
/// identifier. Input without a single digit reports `EmptyInput`, which
/// callers treat as "no result yet" rather than a failure.
pub fn compute(raw: &str) -> Result<Computation> {
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(KeyError::EmptyInput);
    }
    let account = AccountNumber::normalize(raw)?;
    let ccp_key = ccp_key(&account);
    let rip_key = rip_key(&account);
    let identifier = format_identifier(&account, rip_key);
    Ok(Computation {
        account,
        ccp_key,
        rip_key,
        identifier,
    })
}
