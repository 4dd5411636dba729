//! Shared client core for the 4Nyan addons
//!
//! This crate provides the pieces both addons build on: server
//! configuration, the bNyan endpoint table, the HTTP fetcher, the wire
//! models, content classification, tag resolution, media descriptor
//! building and the presentation boundary toward the host.

pub mod api;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod directory;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod tags;
