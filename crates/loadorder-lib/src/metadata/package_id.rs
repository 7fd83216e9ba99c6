use serde::{Serialize, Deserialize};

/// A stable, case-insensitive string identity for a mod.
///
/// All dependency and rule declarations refer to mods by package id.
/// Comparison is case-insensitive everywhere, so the raw string is folded to
/// lowercase at construction and deserialization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct PackageId(String);

impl PackageId {
	pub fn new(raw: impl AsRef<str>) -> Self {
		Self(raw.as_ref().to_lowercase())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<String> for PackageId {
	fn from(raw: String) -> Self {
		Self::new(raw)
	}
}

impl From<&str> for PackageId {
	fn from(raw: &str) -> Self {
		Self::new(raw)
	}
}

impl std::fmt::Display for PackageId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
