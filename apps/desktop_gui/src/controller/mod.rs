//! Controller layer: action labels, notice presentation, and action dispatch.

pub mod events;
pub mod orchestration;
