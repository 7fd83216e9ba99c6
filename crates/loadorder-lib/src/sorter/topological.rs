//! Kahn-style leveled topological sort of one tier.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::metadata::{MetadataStore, ModHandle, PackageId};
use super::dependency_graph::DependencyGraph;

/// A tier's graph contains a cycle no extraction order can satisfy.
///
/// The whole sort aborts on this; the caller keeps the previous order and may
/// hand the graph to [`super::find_cycles`] for a human-readable report.
#[derive(Debug, Clone, thiserror::Error)]
#[error("circular dependency among {} mods: {}", .unsorted.len(), join_ids(.unsorted))]
pub struct CircularDependencyError {
	/// Package ids left over once no further extraction was possible,
	/// in id order. A superset of the actual cycle members.
	pub unsorted: Vec<PackageId>,
}

fn join_ids(ids: &[PackageId]) -> String {
	ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")
}

/// Sorts one tier topologically.
///
/// Repeatedly extracts the set of packages with no remaining unresolved
/// dependencies; each extraction is one level, and members of a level are
/// ordered by case-insensitive display name (package id as the final
/// tiebreaker) so repeated sorts produce identical output.
pub fn sort_tier(
	graph: &DependencyGraph,
	store: &MetadataStore,
	id_to_handle: &HashMap<PackageId, ModHandle>,
) -> Result<Vec<ModHandle>, CircularDependencyError> {
	let mut remaining: BTreeMap<PackageId, BTreeSet<PackageId>> = graph.iter()
		.map(|(id, deps)| (id.clone(), deps.clone()))
		.collect();
	let mut ordered = Vec::with_capacity(remaining.len());

	while !remaining.is_empty() {
		let level = remaining.iter()
			.filter(|(_, deps)| deps.is_empty())
			.map(|(id, _)| id.clone())
			.collect::<Vec<_>>();
		if level.is_empty() {
			let unsorted = remaining.keys().cloned().collect::<Vec<_>>();
			return Err(CircularDependencyError { unsorted });
		}

		for id in &level {
			remaining.remove(id);
		}
		for deps in remaining.values_mut() {
			for id in &level {
				deps.remove(id);
			}
		}

		ordered.extend(sort_level_by_name(level, store, id_to_handle));
	}

	Ok(ordered)
}

pub(super) fn sort_level_by_name(
	level: Vec<PackageId>,
	store: &MetadataStore,
	id_to_handle: &HashMap<PackageId, ModHandle>,
) -> Vec<ModHandle> {
	let mut handles = level.into_iter()
		.filter_map(|id| id_to_handle.get(&id).cloned())
		.collect::<Vec<_>>();
	handles.sort_by_key(|handle| {
		let metadata = store.metadata(handle);
		(metadata.name.to_lowercase(), metadata.package_id.clone())
	});
	handles
}
