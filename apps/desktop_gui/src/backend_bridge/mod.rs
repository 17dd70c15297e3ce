//! Bridge from UI actions to the blocking account backend.

pub mod runtime;

pub use runtime::Backend;
