//! Typed Home Assistant MQTT discovery payloads.
//!
//! The [`catalog`] holds one record type per entity kind. Serialize an instance with
//! `serde_json` and publish it to [`model::Announce::topic_for`]. The `generator` module (feature
//! `generator`) produces new catalog entries from the Home Assistant documentation.

pub mod catalog;
#[cfg(feature = "generator")]
pub mod generator;
pub mod model;

mod error;
mod utils;

pub use error::*;
