//! BuscaCEP Library
//!
//! Interactive CEP (Brazilian postal code) lookup against the ViaCEP
//! service, with a deduplicated lookup history persisted across sessions.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `history`: History list, storage port and repositories.
//! - `models`: Address record and code normalization.
//! - `notify`: Notification port and implementations.
//! - `services`: ViaCEP HTTP client.
//! - `view`: Lookup view orchestration and state.

pub mod config;
pub mod errors;
pub mod history;
pub mod models;
pub mod notify;
pub mod services;
pub mod view;
