use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Natural key of an account row. Always trimmed and non-empty, including
/// when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::MissingAccountNumber);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = InputError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<AccountNumber> for String {
    fn from(account_number: AccountNumber) -> Self {
        account_number.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every column except the key; this is what an update replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub balance: f64,
    pub transaction_history: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: AccountNumber,
    #[serde(flatten)]
    pub details: AccountDetails,
}

pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate)
}

pub fn parse_balance(raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidBalance),
    }
}

/// Renders a balance the way the form shows it: plain decimal digits, never
/// exponent notation, and always with a fractional part.
pub fn format_balance(balance: f64) -> String {
    let rendered = balance.to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_number_is_trimmed_and_required() {
        assert_eq!(
            AccountNumber::parse("  ACC-1 ").expect("key").as_str(),
            "ACC-1"
        );
        assert_eq!(
            AccountNumber::parse("   "),
            Err(InputError::MissingAccountNumber)
        );
        assert_eq!(AccountNumber::parse(""), Err(InputError::MissingAccountNumber));
    }

    #[test]
    fn rejects_out_of_range_calendar_dates() {
        assert_eq!(parse_date_of_birth("2024-13-40"), Err(InputError::InvalidDate));
        assert_eq!(parse_date_of_birth("04/05/1990"), Err(InputError::InvalidDate));
        assert_eq!(
            parse_date_of_birth("1990-05-04").expect("date"),
            NaiveDate::from_ymd_opt(1990, 5, 4).expect("valid")
        );
    }

    #[test]
    fn balance_must_be_a_finite_number() {
        assert_eq!(parse_balance(" 1500.25 "), Ok(1500.25));
        assert_eq!(parse_balance("-3"), Ok(-3.0));
        assert_eq!(parse_balance("abc"), Err(InputError::InvalidBalance));
        assert_eq!(parse_balance(""), Err(InputError::InvalidBalance));
        assert_eq!(parse_balance("NaN"), Err(InputError::InvalidBalance));
        assert_eq!(parse_balance("inf"), Err(InputError::InvalidBalance));
    }

    #[test]
    fn formats_whole_balances_with_fraction() {
        assert_eq!(format_balance(1500.0), "1500.0");
        assert_eq!(format_balance(12.5), "12.5");
        assert_eq!(format_balance(-3.0), "-3.0");
    }

    #[test]
    fn large_and_tiny_balances_stay_in_plain_decimal() {
        assert_eq!(format_balance(1e16), "10000000000000000.0");
        assert_eq!(format_balance(1e-7), "0.0000001");
        for balance in [1e16, 1e-7, 123456789012.345] {
            assert_eq!(parse_balance(&format_balance(balance)), Ok(balance));
        }
    }

    #[test]
    fn deserialized_account_numbers_are_parsed() {
        let key: AccountNumber = serde_json::from_str("\" ACC-2 \"").expect("key");
        assert_eq!(key.as_str(), "ACC-2");
        assert!(serde_json::from_str::<AccountNumber>("\"   \"").is_err());
    }

    #[test]
    fn account_serializes_flat_with_plain_key() {
        let account = Account {
            account_number: AccountNumber::parse("ACC-9").expect("key"),
            details: AccountDetails {
                full_name: "Asha Rao".into(),
                date_of_birth: NaiveDate::from_ymd_opt(1988, 2, 29).expect("valid"),
                phone_number: "555-0100".into(),
                balance: 10.0,
                transaction_history: String::new(),
            },
        };
        let value = serde_json::to_value(&account).expect("json");
        assert_eq!(value["account_number"], "ACC-9");
        assert_eq!(value["date_of_birth"], "1988-02-29");
        assert_eq!(value["balance"], 10.0);
    }
}
