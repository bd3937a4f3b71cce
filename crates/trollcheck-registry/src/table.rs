//! Ordered, immutable support table.

use crate::builtin;
use crate::record::SupportRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trollcheck_core::TrollcheckError;

/// Deserializing resolves each record's architectures and validates it,
/// same as [`SupportTable::from_yaml`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct SupportTable {
    /// Label identifying this revision of the table
    pub revision: String,
    records: Vec<SupportRecord>,
}

#[derive(Deserialize)]
struct RawTable {
    #[serde(default = "default_revision")]
    revision: String,
    records: Vec<SupportRecord>,
}

impl TryFrom<RawTable> for SupportTable {
    type Error = TrollcheckError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        let mut records = raw.records;
        for (index, record) in records.iter_mut().enumerate() {
            record.resolve_architectures();
            validate(index, record)?;
        }
        Ok(Self::new(raw.revision, records))
    }
}

fn default_revision() -> String {
    "unnamed".to_string()
}

impl SupportTable {
    pub fn new(revision: impl Into<String>, records: Vec<SupportRecord>) -> Self {
        Self {
            revision: revision.into(),
            records,
        }
    }

    /// The table compiled into the crate
    pub fn builtin() -> Self {
        Self::new(builtin::REVISION, builtin::records())
    }

    /// Parse a table revision from YAML.
    ///
    /// Records without an explicit `architectures` list take them from
    /// their `platforms` text. Every record needs both bounds and at least
    /// one architecture.
    pub fn from_yaml(yaml: &str) -> Result<Self, TrollcheckError> {
        let raw: RawTable = serde_yaml::from_str(yaml)
            .map_err(|e| TrollcheckError::TableError(format!("invalid YAML: {}", e)))?;
        let table = SupportTable::try_from(raw)?;

        debug!(revision = %table.revision, records = table.records.len(), "loaded support table");
        Ok(table)
    }

    pub fn records(&self) -> &[SupportRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SupportRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a SupportTable {
    type Item = &'a SupportRecord;
    type IntoIter = std::slice::Iter<'a, SupportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate(index: usize, record: &SupportRecord) -> Result<(), TrollcheckError> {
    if record.from_version.trim().is_empty() || record.to_version.trim().is_empty() {
        return Err(TrollcheckError::TableError(format!(
            "record {} has an empty version bound",
            index
        )));
    }
    if record.architectures.is_empty() {
        return Err(TrollcheckError::TableError(format!(
            "record {} ({} - {}) covers no known architecture",
            index, record.from_version, record.to_version
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trollcheck_core::Architecture;

    #[test]
    fn test_builtin_shape() {
        let table = SupportTable::builtin();
        assert_eq!(table.len(), 12);
        assert_eq!(table.revision, "builtin");

        // first two rows are arm64 only
        assert!(!table.records()[0].covers(Architecture::Arm64e));
        assert!(!table.records()[1].covers(Architecture::Arm64e));
        assert!(table.iter().skip(2).all(|r| r.covers(Architecture::Arm64e)));
    }

    #[test]
    fn test_builtin_tool_order_preserved() {
        let table = SupportTable::builtin();
        let tools: Vec<&str> = table.records()[4].supported.iter().map(|t| t.tool.as_str()).collect();
        assert_eq!(tools, vec!["TrollHelperOTA", "TrollInstallerX", "TrollInstallerMDC"]);
    }

    #[test]
    fn test_from_yaml() {
        let table = SupportTable::from_yaml(r#"
revision: "2023-11"
records:
  - from_version: "15.0"
    to_version: "15.0"
    platforms: "arm64 (A8) - arm64e (A12-A17/M1-M2)"
    supported:
      - tool: TrollHelperOTA
        url: https://ios.cfw.guide/installing-trollstore-trollhelperota
  - from_version: "16.7"
    to_version: "16.7.7"
    platforms: "arm64e"
    architectures: [arm64e]
"#).unwrap();

        assert_eq!(table.revision, "2023-11");
        assert_eq!(table.len(), 2);
        assert!(table.records()[0].covers(Architecture::Arm64));
        assert!(!table.records()[1].covers(Architecture::Arm64));
        assert!(!table.records()[1].has_install_method());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_platform() {
        let err = SupportTable::from_yaml(r#"
records:
  - from_version: "15.0"
    to_version: "15.0"
    platforms: "x86_64"
"#).unwrap_err();
        assert!(err.to_string().starts_with("TABLE/"));
    }

    #[test]
    fn test_from_yaml_rejects_empty_bound() {
        let result = SupportTable::from_yaml(r#"
records:
  - from_version: ""
    to_version: "15.0"
    platforms: "arm64"
"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_resolves_architectures() {
        let table: SupportTable = serde_yaml::from_str(r#"
records:
  - from_version: "15.0"
    to_version: "15.0"
    platforms: "arm64 (A8) - arm64e (A12-A17/M1-M2)"
"#).unwrap();

        assert_eq!(table.revision, "unnamed");
        assert!(table.records()[0].covers(Architecture::Arm64));
        assert!(table.records()[0].covers(Architecture::Arm64e));
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<SupportTable, _> = serde_yaml::from_str(r#"
records:
  - from_version: "15.0"
    to_version: "15.0"
    platforms: "x86_64"
"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("covers no known architecture"), "{}", err);
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        assert!(SupportTable::from_yaml("records: 12").is_err());
    }
}
