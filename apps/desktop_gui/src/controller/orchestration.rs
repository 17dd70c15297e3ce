//! Routes one UI action through the backend and hands back its single notice.

use form_core::{ConfirmDelete, FormAction};
use shared::error::Notice;

use crate::backend_bridge::Backend;

pub fn dispatch_form_action(
    backend: &mut Backend,
    action: FormAction,
    confirm: &mut dyn ConfirmDelete,
) -> Notice {
    tracing::debug!(
        command = action.name(),
        locked = backend.form().is_locked(),
        "running form action"
    );
    backend.run(action, confirm)
}
