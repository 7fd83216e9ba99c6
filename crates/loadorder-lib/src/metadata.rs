//! # Mod metadata store
//!
//! Read-only mapping from a mod's session handle to its declared metadata.
//! The store is populated by whatever loads the manifests (About.xml, workshop
//! databases, etc.) and is only ever borrowed by the sorter and diagnostics;
//! nothing in this crate reaches for it through globals.

use std::collections::{BTreeSet, HashMap};
use serde::{Serialize, Deserialize};

mod package_id;
pub use package_id::PackageId;

mod rules;
pub use rules::LoadRule;
pub use rules::DataSource;

pub mod replacements;

/// Opaque identifier for one mod instance, stable for the session.
///
/// Maps 1:1 to a [`ModMetadata`] record. Distinct from [`PackageId`]: two
/// filesystem copies of the same mod get different handles but share a
/// package id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModHandle(String);

impl ModHandle {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for ModHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Declared metadata for a single mod.
///
/// Validated once at the store boundary; the sorter and diagnostics treat
/// every field as opaque and never re-validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModMetadata {
	pub package_id: PackageId,
	/// Display name, used as the sort tiebreaker and in diagnostics.
	pub name: String,
	pub dependencies: BTreeSet<PackageId>,
	pub incompatibilities: BTreeSet<PackageId>,
	/// Mods this one declares it loads before.
	pub load_these_before: Vec<LoadRule>,
	/// Mods this one declares it loads after.
	pub load_these_after: Vec<LoadRule>,
	/// Game versions the mod declares support for. Empty means unknown,
	/// which is never reported as a mismatch.
	pub supported_versions: BTreeSet<String>,
	pub source: DataSource,
	/// Anchor the mod to the top tier regardless of sort algorithm.
	pub load_first: bool,
	/// Anchor the mod to the bottom tier regardless of sort algorithm.
	pub load_last: bool,
}

impl ModMetadata {
	pub fn new(package_id: PackageId, name: impl Into<String>) -> Self {
		Self {
			package_id,
			name: name.into(),
			dependencies: Default::default(),
			incompatibilities: Default::default(),
			load_these_before: Default::default(),
			load_these_after: Default::default(),
			supported_versions: Default::default(),
			source: Default::default(),
			load_first: false,
			load_last: false,
		}
	}

	/// Whether the mod must load before everything that depends on it.
	///
	/// Core game content counts as an anchor even without an explicit flag.
	pub fn is_top_anchor(&self) -> bool {
		self.load_first || matches!(self.source, DataSource::Expansion)
	}

	pub fn is_bottom_anchor(&self) -> bool {
		self.load_last
	}
}

/// Owning store of all known mod metadata for the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataStore {
	mods: HashMap<ModHandle, ModMetadata>,
}

impl MetadataStore {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn insert(&mut self, handle: ModHandle, metadata: ModMetadata) {
		self.mods.insert(handle, metadata);
	}

	/// Metadata for an active handle.
	///
	/// The caller guarantees every handle it passes into the sorter or
	/// diagnostics resolves; an unknown handle is a caller bug.
	pub fn metadata(&self, handle: &ModHandle) -> &ModMetadata {
		self.mods.get(handle).expect("active handle missing from metadata store")
	}

	pub fn get(&self, handle: &ModHandle) -> Option<&ModMetadata> {
		self.mods.get(handle)
	}

	pub fn len(&self) -> usize {
		self.mods.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mods.is_empty()
	}
}

impl FromIterator<(ModHandle, ModMetadata)> for MetadataStore {
	fn from_iter<T: IntoIterator<Item = (ModHandle, ModMetadata)>>(iter: T) -> Self {
		Self { mods: iter.into_iter().collect() }
	}
}
