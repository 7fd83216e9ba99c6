//! Community-maintained table of retired package ids and the mods known to
//! supersede them.
//!
//! A dependency on a retired id is considered satisfied when any of its
//! replacements is active, so a mod list that moved to a continued fork does
//! not report a missing dependency for the abandoned original.

use std::collections::HashSet;
use super::PackageId;

const KNOWN_REPLACEMENTS: &[(&str, &[&str])] = &[
	("automatic.bionicicons", &["automatic.bionicicons.continued"]),
	("fluffy.worktab", &["arof.fluffy.worktab.continued"]),
	("jecrell.jecstools", &["jecstools.continued"]),
	("syrchalis.harvestorgans", &["syrchalis.harvestpostmortem"]),
	("unlimitedhugs.allowtool", &["unlimitedhugs.allowtool.continued"]),
];

/// Package ids known to supersede `dep`. Empty when `dep` has no entry.
pub fn replacements_for(dep: &PackageId) -> &'static [&'static str] {
	KNOWN_REPLACEMENTS.iter()
		.find(|(retired, _)| *retired == dep.as_str())
		.map(|(_, successors)| *successors)
		.unwrap_or(&[])
}

/// Whether any known replacement for `dep` is present in the active set.
pub fn has_active_replacement(dep: &PackageId, active_ids: &HashSet<PackageId>) -> bool {
	replacements_for(dep).iter().any(|successor| {
		let satisfied = active_ids.contains(&PackageId::new(successor));
		if satisfied {
			log::debug!("dependency {} satisfied by replacement {}", dep, successor);
		}
		satisfied
	})
}
