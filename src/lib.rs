//! quickcrh: draft and review French hospital discharge summaries (CRH)
//! through a hosted chat-completion endpoint.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use domain::{AppConfig, AppError, Mode};
