//! Input document types describing monitored hosts.
//!
//! The types in this module mirror the structure of the YAML inventory
//! consumed by the converter CLI. Unknown keys on an entry are ignored so the
//! inventory can carry additional per-host data for other tooling.

use serde::Deserialize;

/// Raw inventory entry describing a single monitored host.
///
/// Instances are typically created by deserializing a YAML sequence. Both
/// fields are required; deserialization fails when either is absent.
///
/// # Examples
///
/// ```
/// use hosts_converter::HostEntry;
///
/// let yaml = r#"
/// - name: web1
///   global_ip4: 10.0.0.1
/// "#;
/// let hosts: Vec<HostEntry> = serde_yaml::from_str(yaml).expect("valid inventory");
/// assert_eq!(hosts.len(), 1);
/// assert_eq!(hosts[0].name, "web1");
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Host identifier used as the resource name.
    pub name: String,

    /// Textual IPv4 address of the host.
    pub global_ip4: String,
}

#[cfg(test)]
mod tests {
    use super::HostEntry;

    #[test]
    fn deserializes_minimal_entry() {
        let yaml = "name: db1\nglobal_ip4: 10.0.0.2\n";
        let entry: HostEntry = serde_yaml::from_str(yaml).expect("expected valid entry");

        assert_eq!(entry.name, "db1");
        assert_eq!(entry.global_ip4, "10.0.0.2");
    }

    #[test]
    fn ignores_additional_keys() {
        let yaml = "name: web1\nglobal_ip4: 10.0.0.1\nos: debian\nrack: 4\n";
        let entry: HostEntry = serde_yaml::from_str(yaml).expect("expected valid entry");

        assert_eq!(entry.name, "web1");
        assert_eq!(entry.global_ip4, "10.0.0.1");
    }

    #[test]
    fn rejects_missing_global_ip4() {
        let yaml = "name: web1\n";
        let result = serde_yaml::from_str::<HostEntry>(yaml);

        let message = result.expect_err("expected missing key error").to_string();
        assert!(message.contains("global_ip4"));
    }

    #[test]
    fn rejects_missing_name() {
        let yaml = "global_ip4: 10.0.0.1\n";
        let result = serde_yaml::from_str::<HostEntry>(yaml);

        let message = result.expect_err("expected missing key error").to_string();
        assert!(message.contains("name"));
    }
}
