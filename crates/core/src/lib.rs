//! realmctl Core — configuration, error taxonomy, credential lifecycle, and Admin API models.

pub mod config;
pub mod error;
pub mod models;
pub mod token;
