//! Raw text held by the account form and its conversion into typed records.

use shared::{
    domain::{
        format_balance, parse_balance, parse_date_of_birth, Account, AccountDetails,
        AccountNumber,
    },
    error::InputError,
};

/// Field text exactly as the operator typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub account_number: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub balance: String,
    pub transaction_history: String,
}

impl FormFields {
    pub fn account_number(&self) -> Result<AccountNumber, InputError> {
        AccountNumber::parse(&self.account_number)
    }

    /// Validates date then balance; history is taken verbatim.
    pub fn details(&self) -> Result<AccountDetails, InputError> {
        let date_of_birth = parse_date_of_birth(&self.date_of_birth)?;
        let balance = parse_balance(&self.balance)?;
        Ok(AccountDetails {
            full_name: self.full_name.clone(),
            date_of_birth,
            phone_number: self.phone_number.clone(),
            balance,
            transaction_history: self.transaction_history.clone(),
        })
    }

    pub fn load(&mut self, account: &Account) {
        let details = &account.details;
        self.account_number = account.account_number.to_string();
        self.full_name = details.full_name.clone();
        self.date_of_birth = details.date_of_birth.format("%Y-%m-%d").to_string();
        self.phone_number = details.phone_number.clone();
        self.balance = format_balance(details.balance);
        self.transaction_history = details.transaction_history.clone();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn filled() -> FormFields {
        FormFields {
            account_number: "CA-77".into(),
            full_name: "Ravi Menon".into(),
            date_of_birth: "1979-11-02".into(),
            phone_number: "0471 255 0000".into(),
            balance: "99.5".into(),
            transaction_history: "note".into(),
        }
    }

    #[test]
    fn date_error_wins_over_balance_error() {
        let mut fields = filled();
        fields.date_of_birth = "1979-02-30".into();
        fields.balance = "ninety".into();
        assert_eq!(fields.details(), Err(InputError::InvalidDate));
    }

    #[test]
    fn load_renders_typed_values_back_to_text() {
        let account = Account {
            account_number: AccountNumber::parse("CA-77").expect("key"),
            details: AccountDetails {
                full_name: "Ravi Menon".into(),
                date_of_birth: NaiveDate::from_ymd_opt(1979, 11, 2).expect("date"),
                phone_number: "0471 255 0000".into(),
                balance: 100.0,
                transaction_history: "history".into(),
            },
        };
        let mut fields = FormFields::default();
        fields.load(&account);
        assert_eq!(fields.date_of_birth, "1979-11-02");
        assert_eq!(fields.balance, "100.0");
        assert_eq!(fields.details().expect("valid"), account.details);
    }

    #[test]
    fn clear_empties_every_field() {
        let mut fields = filled();
        fields.clear();
        assert!(fields.is_empty());
    }
}
