use shared::domain::AccountNumber;

/// The five actions the account form exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormAction {
    Create,
    Fetch,
    Update,
    Delete,
    Clear,
}

impl FormAction {
    pub const ALL: [FormAction; 5] = [
        FormAction::Create,
        FormAction::Fetch,
        FormAction::Update,
        FormAction::Delete,
        FormAction::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormAction::Create => "create",
            FormAction::Fetch => "fetch",
            FormAction::Update => "update",
            FormAction::Delete => "delete",
            FormAction::Clear => "clear",
        }
    }
}

/// Whether an account has been fetched into the form. While locked the key
/// field is read-only and update/delete act on the locked key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Unlocked,
    Locked {
        account_number: AccountNumber,
    },
}

impl FormMode {
    pub fn is_locked(&self) -> bool {
        matches!(self, FormMode::Locked { .. })
    }

    pub fn locked_key(&self) -> Option<&AccountNumber> {
        match self {
            FormMode::Locked { account_number } => Some(account_number),
            FormMode::Unlocked => None,
        }
    }

    /// Create, fetch and clear are always allowed; re-fetching while locked
    /// simply reloads the form.
    pub fn permits(&self, action: FormAction) -> bool {
        match action {
            FormAction::Update | FormAction::Delete => self.is_locked(),
            FormAction::Create | FormAction::Fetch | FormAction::Clear => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_refuses_only_mutations() {
        let mode = FormMode::Unlocked;
        let permitted: Vec<_> = FormAction::ALL
            .into_iter()
            .filter(|action| mode.permits(*action))
            .collect();
        assert_eq!(
            permitted,
            vec![FormAction::Create, FormAction::Fetch, FormAction::Clear]
        );
    }

    #[test]
    fn locked_permits_everything() {
        let mode = FormMode::Locked {
            account_number: AccountNumber::parse("K-1").expect("key"),
        };
        assert!(FormAction::ALL.into_iter().all(|action| mode.permits(action)));
        assert_eq!(mode.locked_key().map(AccountNumber::as_str), Some("K-1"));
    }
}
