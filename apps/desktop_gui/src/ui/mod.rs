//! UI layer for the desktop form: app shell and native dialogs.

pub mod app;
pub mod dialogs;

pub use app::BankDeskApp;
