//! User-facing options the surrounding application persists between runs.

use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use crate::metadata::PackageId;
use crate::sorter::SortAlgorithm;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadOrderOptions {
	sorting_algorithm: SortAlgorithm,
	game_version: String,
	ignored_warnings: HashSet<PackageId>,
}

impl LoadOrderOptions {
	pub fn sorting_algorithm(&self) -> SortAlgorithm {
		self.sorting_algorithm
	}
	pub fn set_sorting_algorithm(&mut self, algorithm: SortAlgorithm) {
		self.sorting_algorithm = algorithm;
	}

	/// The currently loaded game version, matched verbatim against each
	/// mod's supported versions.
	pub fn game_version(&self) -> &str {
		&self.game_version
	}
	pub fn set_game_version(&mut self, version: impl Into<String>) {
		self.game_version = version.into();
	}

	/// Package ids the user chose to silence warnings for.
	pub fn ignored_warnings(&self) -> &HashSet<PackageId> {
		&self.ignored_warnings
	}

	/// Flips warning suppression for one package id.
	pub fn toggle_warning(&mut self, package_id: &PackageId) {
		if !self.ignored_warnings.remove(package_id) {
			self.ignored_warnings.insert(package_id.clone());
		}
	}
}
