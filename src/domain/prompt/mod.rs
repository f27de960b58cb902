//! Prompt composition for the three operating modes.

mod composer;

pub use composer::{ComposedPrompt, compose_didactic, compose_freeform, compose_guided};
