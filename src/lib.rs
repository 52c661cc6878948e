//! Session Todos - named to-do lists kept in the visitor's session
//!
//! Lists and their todos live in a per-browser session record. Each request
//! rebuilds live aggregates from that record, applies one operation and
//! snapshots the result back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
