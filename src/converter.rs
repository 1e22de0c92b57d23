//! Transformation from host inventory entries into discovery resources.
//!
//! The converter performs a single synchronous pass: parse the YAML
//! inventory, map every entry onto a resource record tagged with the fixed
//! device-type label, and serialize the aggregate document as pretty-printed
//! JSON.

use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::HostEntry,
    error::{self, Error},
};

const DEVICE_TYPE: &str = "host";

/// Fixed label set attached to every generated resource.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResourceLabels {
    /// Device category consumed by downstream discovery tooling.
    pub device_type: String,
}

impl Default for ResourceLabels {
    fn default() -> Self {
        Self {
            device_type: DEVICE_TYPE.to_owned(),
        }
    }
}

/// Resource record describing one monitored host.
///
/// Field order matches the JSON key order expected by the discovery
/// mechanism: `name`, `ip`, `labels`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Host identifier copied from the inventory entry.
    pub name: String,
    /// IPv4 address copied from the entry's `global_ip4` field.
    pub ip: String,
    /// Fixed labels tagging the resource.
    pub labels: ResourceLabels,
}

/// Document containing all generated resources, order preserved from input.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResourceDocument {
    /// Aggregated resources derived from the inventory.
    pub resource: Vec<Resource>,
}

/// Parses hosts from the provided YAML inventory string.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the document is not a valid YAML sequence or
/// an element lacks a required key.
pub fn parse_hosts(contents: &str) -> Result<Vec<HostEntry>, Error> {
    let hosts: Vec<HostEntry> = serde_yaml::from_str(contents)?;
    Ok(hosts)
}

/// Loads hosts from the provided YAML inventory file path.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Parse`]
/// when its contents are invalid.
pub fn load_hosts(path: &Path) -> Result<Vec<HostEntry>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_hosts(&contents)
}

/// Builds the resource document from the ordered host list.
///
/// Infallible: every entry yields exactly one resource, in input order.
pub fn build_resources(hosts: &[HostEntry]) -> ResourceDocument {
    let resource = hosts
        .iter()
        .map(|host| Resource {
            name: host.name.clone(),
            ip: host.global_ip4.clone(),
            labels: ResourceLabels::default(),
        })
        .collect();

    ResourceDocument { resource }
}

/// Serializes the document as pretty-printed JSON (2-space indentation) to
/// the output path, overwriting any existing content.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be created or flushed and
/// [`Error::Serialize`] when serialization fails. No partial file is
/// guaranteed on failure.
pub fn write_resources(path: &Path, document: &ResourceDocument) -> Result<(), Error> {
    let file = fs::File::create(path).map_err(|source| error::io_error(path, source))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush().map_err(|source| error::io_error(path, source))?;

    Ok(())
}

/// Converts the YAML inventory at `input` into the JSON resource document at
/// `output`.
///
/// The operation is a single pass with no intermediate state: any failure
/// aborts the run before or during the write, with no retry.
///
/// # Errors
///
/// Propagates the first [`Error`] from loading, parsing, or writing.
pub fn convert(input: &Path, output: &Path) -> Result<(), Error> {
    debug!("loading host inventory from {}", input.display());
    let hosts = load_hosts(input)?;

    let document = build_resources(&hosts);
    write_resources(output, &document)?;

    info!("generated resource document: {}", output.display());
    Ok(())
}
