use form_core::{Confirmation, FormAction, FormController};
use shared::error::NoticeKind;
use storage::Storage;

#[tokio::test]
async fn account_lifecycle_survives_reopening_the_database() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("bank").join("accounts.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let mut form = FormController::new(Storage::new(&database_url).await.expect("db"));
    {
        let fields = form.fields_mut();
        fields.account_number = "CUR-0042".to_string();
        fields.full_name = "Joseph Thomas".to_string();
        fields.date_of_birth = "1969-12-31".to_string();
        fields.phone_number = "0484 123 4567".to_string();
        fields.balance = "70250.40".to_string();
        fields.transaction_history = "KYC verified".to_string();
    }
    let notice = form.dispatch(FormAction::Create, &mut Confirmation::No).await;
    assert_eq!(notice.kind, NoticeKind::Success, "{notice:?}");
    drop(form);

    let mut form = FormController::new(Storage::new(&database_url).await.expect("reopen"));
    form.fields_mut().account_number = "CUR-0042".to_string();
    let notice = form.dispatch(FormAction::Fetch, &mut Confirmation::No).await;
    assert_eq!(notice.kind, NoticeKind::Success, "{notice:?}");
    assert!(form.is_locked());

    let history = form.fields().transaction_history.clone();
    assert!(history.starts_with("Account created on "));
    assert!(history.contains("\nInitial Balance: 70250.40\n---\n"));
    assert!(history.ends_with("KYC verified"));
    assert_eq!(form.fields().balance, "70250.4");

    let first = form.fields().clone();
    let notice = form.dispatch(FormAction::Update, &mut Confirmation::No).await;
    assert_eq!(notice.kind, NoticeKind::Success, "{notice:?}");
    let notice = form.dispatch(FormAction::Fetch, &mut Confirmation::No).await;
    assert_eq!(notice.kind, NoticeKind::Success, "{notice:?}");
    assert_eq!(form.fields(), &first);

    let notice = form.dispatch(FormAction::Delete, &mut Confirmation::Yes).await;
    assert_eq!(notice.kind, NoticeKind::Success, "{notice:?}");
    assert!(form.fields().is_empty());
    assert!(!form.is_locked());
}
