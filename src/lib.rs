//! Utilities for converting host inventory documents into discovery resources.
//!
//! The library exposes helpers that load YAML files describing monitored hosts
//! and transform them into the JSON resource document consumed by the
//! monitoring discovery mechanism. All public APIs are documented with
//! invariants and error semantics to facilitate integration in automation
//! tooling.

mod config;
mod converter;
mod error;

pub use config::HostEntry;
pub use converter::{
    build_resources, convert, load_hosts, parse_hosts, write_resources, Resource, ResourceDocument,
    ResourceLabels,
};
pub use error::{io_error, Error};
