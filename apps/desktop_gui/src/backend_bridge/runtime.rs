//! Blocking bridge between the UI thread and the async account store.

use anyhow::{Context, Result};
use form_core::{ConfirmDelete, FormAction, FormController};
use shared::error::Notice;
use storage::Storage;

/// Owns the single store connection and the runtime that drives it. Every
/// action runs to completion on the calling (UI) thread.
pub struct Backend {
    // Declared before `runtime` so the pool is released while the runtime is alive.
    form: FormController<Storage>,
    runtime: tokio::runtime::Runtime,
}

impl Backend {
    pub fn open(database_url: &str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to build backend runtime")?;
        let storage = runtime.block_on(async {
            let storage = Storage::new(database_url).await?;
            storage.health_check().await?;
            anyhow::Ok(storage)
        })?;

        Ok(Self {
            form: FormController::new(storage),
            runtime,
        })
    }

    pub fn form(&self) -> &FormController<Storage> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController<Storage> {
        &mut self.form
    }

    pub fn run(&mut self, action: FormAction, confirm: &mut dyn ConfirmDelete) -> Notice {
        self.runtime.block_on(self.form.dispatch(action, confirm))
    }
}
