//! Account form controller: validates field text, runs the four account
//! statements through an [`AccountStore`], and reports one [`Notice`] per action.

use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};

use shared::{
    domain::{Account, AccountNumber},
    error::{Notice, NoticeKind},
};
use storage::AccountStore;

pub mod fields;
pub mod history;
pub mod mode;

pub use fields::FormFields;
pub use mode::{FormAction, FormMode};

/// Source of the creation timestamp written into a new account's history.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Asked before a locked account is deleted. Returning `false` aborts the
/// deletion without touching the store.
pub trait ConfirmDelete {
    fn confirm_delete(&mut self, account_number: &AccountNumber) -> bool;
}

/// Fixed answer, for non-interactive callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl ConfirmDelete for Confirmation {
    fn confirm_delete(&mut self, _account_number: &AccountNumber) -> bool {
        *self == Confirmation::Yes
    }
}

pub struct FormController<S> {
    store: S,
    fields: FormFields,
    mode: FormMode,
    clock: Clock,
}

impl<S: AccountStore> FormController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            fields: FormFields::default(),
            mode: FormMode::Unlocked,
            clock: local_now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_locked(&self) -> bool {
        self.mode.is_locked()
    }

    pub async fn dispatch(
        &mut self,
        action: FormAction,
        confirm: &mut dyn ConfirmDelete,
    ) -> Notice {
        let notice = match action {
            FormAction::Create => self.create().await,
            FormAction::Fetch => self.fetch().await,
            FormAction::Update => self.update().await,
            FormAction::Delete => self.delete(confirm).await,
            FormAction::Clear => self.clear(),
        };

        match notice.kind {
            NoticeKind::Success => info!(action = action.name(), "{}", notice.message),
            NoticeKind::DataError => error!(action = action.name(), "{}", notice.message),
            NoticeKind::InputError | NoticeKind::OperationError | NoticeKind::NotFound => {
                warn!(action = action.name(), kind = ?notice.kind, "{}", notice.message)
            }
        }
        notice
    }

    pub async fn create(&mut self) -> Notice {
        let account_number = match self.fields.account_number() {
            Ok(account_number) => account_number,
            Err(err) => return err.into(),
        };
        let mut details = match self.fields.details() {
            Ok(details) => details,
            Err(err) => return err.into(),
        };
        details.transaction_history = history::seed_history(
            (self.clock)(),
            &self.fields.balance,
            &self.fields.transaction_history,
        );

        let account = Account {
            account_number,
            details,
        };
        match self.store.create_account(&account).await {
            Ok(0) => Notice::data_error(format!(
                "Error inserting account: no row was written for {}",
                account.account_number
            )),
            Ok(_) => {
                self.clear();
                Notice::success("Account created successfully!")
            }
            Err(err) => Notice::data_error(format!("Error inserting account: {err}")),
        }
    }

    pub async fn fetch(&mut self) -> Notice {
        let account_number = match self.fields.account_number() {
            Ok(account_number) => account_number,
            Err(err) => return err.into(),
        };

        match self.store.fetch_account(&account_number).await {
            Ok(Some(account)) => {
                self.fields.load(&account);
                self.mode = FormMode::Locked {
                    account_number: account.account_number,
                };
                Notice::success("Account details fetched.")
            }
            Ok(None) => {
                self.clear();
                Notice::not_found("Not Found", "Account not found.")
            }
            Err(err) => Notice::data_error(format!("Error fetching account: {err}")),
        }
    }

    /// Writes every field except the key back to the locked account. History
    /// is stored exactly as it appears in the form.
    pub async fn update(&mut self) -> Notice {
        let Some(account_number) = self.permitted_key(FormAction::Update) else {
            return Notice::operation_error(
                "Operation Error",
                "Please fetch an account before updating.",
            );
        };
        let details = match self.fields.details() {
            Ok(details) => details,
            Err(err) => return err.into(),
        };

        match self.store.update_account(&account_number, &details).await {
            Ok(0) => Notice::not_found("Error", "Could not find the account to update."),
            Ok(_) => Notice::success("Account updated successfully!"),
            Err(err) => Notice::data_error(format!("Error updating account: {err}")),
        }
    }

    pub async fn delete(&mut self, confirm: &mut dyn ConfirmDelete) -> Notice {
        let Some(account_number) = self.permitted_key(FormAction::Delete) else {
            return Notice::operation_error(
                "Operation Error",
                "Please fetch an account before deleting.",
            );
        };
        if !confirm.confirm_delete(&account_number) {
            return Notice::operation_error(
                "Deletion Cancelled",
                format!("Account {account_number} was not deleted."),
            );
        }

        match self.store.delete_account(&account_number).await {
            Ok(0) => Notice::not_found("Deletion Failed", "Account could not be found or deleted."),
            Ok(_) => {
                self.clear();
                Notice::success("Account deleted successfully.")
            }
            Err(err) => Notice::data_error(format!("Error deleting account: {err}")),
        }
    }

    pub fn clear(&mut self) -> Notice {
        self.fields.clear();
        self.mode = FormMode::Unlocked;
        Notice::success("Fields cleared.")
    }

    /// The locked key, if the current mode permits `action` on it.
    fn permitted_key(&self, action: FormAction) -> Option<AccountNumber> {
        if !self.mode.permits(action) {
            return None;
        }
        self.mode.locked_key().cloned()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
