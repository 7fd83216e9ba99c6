//! Per-mod error and warning computation for the active list.
//!
//! Recalculated from scratch on every list mutation (move, filter, sort).
//! The pass is a single walk over the current order, O(n x rule count), and
//! never fails: absent metadata fields degrade to empty sets, not errors.
//! Missing dependencies and incompatibilities are errors; ordering
//! violations and version mismatches are warnings.

use std::collections::{BTreeSet, HashMap, HashSet};
use serde::{Serialize, Deserialize};

use crate::metadata::{replacements, MetadataStore, ModHandle, PackageId};

/// Everything wrong with one mod relative to the current active list.
///
/// Built fresh on each recalculation over a snapshot of the list; a set is
/// replaced wholesale, never patched across passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSet {
	/// Declared dependencies that are neither active nor covered by an
	/// active known replacement.
	pub missing_dependencies: BTreeSet<PackageId>,
	/// Declared incompatibilities that are present in the active set.
	pub conflicting_incompatibilities: BTreeSet<PackageId>,
	/// Strict load-before targets this mod is currently positioned after.
	pub load_before_violations: BTreeSet<PackageId>,
	/// Strict load-after targets this mod is currently positioned at or
	/// before.
	pub load_after_violations: BTreeSet<PackageId>,
	/// The mod declares supported versions and the loaded game version is
	/// not among them. Computed even for ignored mods; only the warning
	/// totals suppress it.
	pub version_mismatch: bool,
}

impl DiagnosticSet {
	pub fn has_errors(&self) -> bool {
		!self.missing_dependencies.is_empty() || !self.conflicting_incompatibilities.is_empty()
	}

	pub fn has_order_violations(&self) -> bool {
		!self.load_before_violations.is_empty() || !self.load_after_violations.is_empty()
	}

	pub fn is_clean(&self) -> bool {
		!self.has_errors() && !self.has_order_violations() && !self.version_mismatch
	}
}

/// Error and warning totals across the whole active list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSummary {
	/// Mods with missing dependencies or active incompatibilities.
	pub errors: usize,
	/// Mods with ordering violations or an unsuppressed version mismatch.
	pub warnings: usize,
}

/// Recomputes diagnostics for the active list in its current order.
///
/// `ignore` silences the rule-violation categories for the listed package
/// ids; the version mismatch flag is still computed for them so the UI can
/// keep marking the item, it just stays out of the warning totals.
pub fn recalculate(
	store: &MetadataStore,
	active: &[ModHandle],
	ignore: &HashSet<PackageId>,
	game_version: &str,
) -> HashMap<ModHandle, DiagnosticSet> {
	log::debug!("recalculating diagnostics for {} active mods", active.len());

	let index_of: HashMap<PackageId, usize> = active.iter()
		.enumerate()
		.map(|(index, handle)| (store.metadata(handle).package_id.clone(), index))
		.collect();
	let active_ids: HashSet<PackageId> = index_of.keys().cloned().collect();

	let mut results = HashMap::with_capacity(active.len());
	for (index, handle) in active.iter().enumerate() {
		let metadata = store.metadata(handle);
		let mut set = DiagnosticSet {
			version_mismatch: !metadata.supported_versions.is_empty()
				&& !metadata.supported_versions.contains(game_version),
			..Default::default()
		};

		if !ignore.contains(&metadata.package_id) {
			set.missing_dependencies = metadata.dependencies.iter()
				.filter(|dep| {
					!active_ids.contains(*dep)
						&& !replacements::has_active_replacement(*dep, &active_ids)
				})
				.cloned()
				.collect();

			set.conflicting_incompatibilities = metadata.incompatibilities.iter()
				.filter(|incompatible| active_ids.contains(*incompatible))
				.cloned()
				.collect();

			for rule in &metadata.load_these_before {
				if !rule.strict {
					continue;
				}
				if let Some(&target_index) = index_of.get(&rule.target) {
					if index > target_index {
						set.load_before_violations.insert(rule.target.clone());
					}
				}
			}

			for rule in &metadata.load_these_after {
				if !rule.strict {
					continue;
				}
				if let Some(&target_index) = index_of.get(&rule.target) {
					if index <= target_index {
						set.load_after_violations.insert(rule.target.clone());
					}
				}
			}
		}

		results.insert(handle.clone(), set);
	}
	results
}

/// Totals a recalculation pass into error and warning counts.
///
/// The mismatch flag is computed for ignored mods too, so it has to be
/// re-checked against `ignore` here to avoid counting a suppressed warning.
pub fn summarize(
	store: &MetadataStore,
	diagnostics: &HashMap<ModHandle, DiagnosticSet>,
	ignore: &HashSet<PackageId>,
) -> DiagnosticSummary {
	let mut summary = DiagnosticSummary::default();
	for (handle, set) in diagnostics {
		if set.has_errors() {
			summary.errors += 1;
		}
		let mismatch_counts = set.version_mismatch
			&& !ignore.contains(&store.metadata(handle).package_id);
		if set.has_order_violations() || mismatch_counts {
			summary.warnings += 1;
		}
	}
	summary
}

/// Display names for every active package id, for rendering diagnostics.
pub fn display_names(store: &MetadataStore, active: &[ModHandle]) -> HashMap<PackageId, String> {
	active.iter()
		.map(|handle| {
			let metadata = store.metadata(handle);
			(metadata.package_id.clone(), metadata.name.clone())
		})
		.collect()
}

/// Renders one mod's diagnostics as the multi-line text shown in its
/// tooltip. Targets without an active metadata record fall back to their
/// package id. Returns an empty string for a clean set.
pub fn describe(set: &DiagnosticSet, names: &HashMap<PackageId, String>) -> String {
	let mut text = String::new();
	let sections: [(&BTreeSet<PackageId>, &str); 4] = [
		(&set.missing_dependencies, "Missing dependencies:"),
		(&set.conflicting_incompatibilities, "Incompatible with:"),
		/* A broken load-before rule means the target should move after
		this mod, and vice versa, hence the swapped headings. */
		(&set.load_before_violations, "Should be loaded after:"),
		(&set.load_after_violations, "Should be loaded before:"),
	];
	for (ids, heading) in sections {
		if ids.is_empty() {
			continue;
		}
		text.push('\n');
		text.push_str(heading);
		for id in ids {
			let name = names.get(id).cloned().unwrap_or_else(|| id.to_string());
			text.push_str("\n  * ");
			text.push_str(&name);
		}
	}
	if set.version_mismatch {
		text.push_str("\nMod and game version mismatch");
	}
	text
}
