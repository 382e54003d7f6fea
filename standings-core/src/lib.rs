//! Core types for standings.
//!
//! This crate provides everything the server and CLI share:
//! - `Event` and `Participant`, the persisted record types
//! - `store` for the directory-backed record store
//! - `config` and `logging` for the ambient setup of both binaries

pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod slug;
pub mod store;

pub use config::StandingsConfig;
pub use error::{StoreError, StoreResult};
pub use event::{Event, EventInput, Participant};
pub use store::EventStore;
