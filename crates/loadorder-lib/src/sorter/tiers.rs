//! Three-tier partition of the active set.
//!
//! Anchored mods are kept at the very top or bottom of the load order no
//! matter which sort algorithm runs. Tier membership is recomputed on every
//! sort and never persisted.

use std::collections::BTreeSet;

use crate::metadata::{MetadataStore, ModHandle, PackageId};
use super::dependency_graph::DependencyGraph;

/// The active set split into top, middle and bottom tiers, each with the
/// dependency sub-graph induced on its members.
#[derive(Debug, Clone)]
pub struct TierPartition {
	pub top: DependencyGraph,
	pub top_mods: BTreeSet<PackageId>,
	pub middle: DependencyGraph,
	pub bottom: DependencyGraph,
	pub bottom_mods: BTreeSet<PackageId>,
}

/// Splits the active set into tiers.
///
/// Top: every top anchor (explicit load-first flag or core game content)
/// together with its transitive active dependencies, so an anchor never ends
/// up ordered after something it needs.
///
/// Bottom: every bottom anchor together with everything that transitively
/// depends on it, walked over the reverse graph; a mod required only by
/// bottom-tier mods has no business loading earlier.
///
/// A mod qualifying for both tiers goes to the top: a contradictory
/// declaration is resolved Top-wins, deterministically.
pub fn partition(
	store: &MetadataStore,
	active: &[ModHandle],
	forward: &DependencyGraph,
	reverse: &DependencyGraph,
) -> TierPartition {
	let mut top_anchors = BTreeSet::new();
	let mut bottom_anchors = BTreeSet::new();
	for handle in active {
		let metadata = store.metadata(handle);
		if metadata.is_top_anchor() {
			top_anchors.insert(metadata.package_id.clone());
		}
		if metadata.is_bottom_anchor() {
			bottom_anchors.insert(metadata.package_id.clone());
		}
	}

	let top_mods = closure(&top_anchors, forward);
	let mut bottom_mods = closure(&bottom_anchors, reverse);
	/* Top-wins when a mod is reachable from both anchor sets. */
	bottom_mods.retain(|id| !top_mods.contains(id));

	let middle_mods = forward.package_ids()
		.filter(|id| !top_mods.contains(*id) && !bottom_mods.contains(*id))
		.cloned()
		.collect::<BTreeSet<_>>();

	log::debug!(
		"tier partition: {} top, {} middle, {} bottom",
		top_mods.len(), middle_mods.len(), bottom_mods.len(),
	);

	TierPartition {
		top: forward.induced(&top_mods),
		top_mods,
		middle: forward.induced(&middle_mods),
		bottom: forward.induced(&bottom_mods),
		bottom_mods,
	}
}

/// All packages reachable from `seeds` by following `graph` edges, seeds
/// included.
fn closure(seeds: &BTreeSet<PackageId>, graph: &DependencyGraph) -> BTreeSet<PackageId> {
	let mut reached = seeds.clone();
	let mut pending = seeds.iter().cloned().collect::<Vec<_>>();
	while let Some(id) = pending.pop() {
		if let Some(next) = graph.dependencies_of(&id) {
			for neighbour in next {
				if reached.insert(neighbour.clone()) {
					pending.push(neighbour.clone());
				}
			}
		}
	}
	reached
}
