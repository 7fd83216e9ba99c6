//! Flat alphabetical sort of one tier.
//!
//! Mimics the base game's legacy behaviour: a tier is ordered purely by
//! case-insensitive display name, trusting tier partitioning to have already
//! pinned anything order-sensitive. Graph edges inside the tier are
//! deliberately ignored and this strategy can never fail on a cycle.

use std::collections::HashMap;

use crate::metadata::{MetadataStore, ModHandle, PackageId};
use super::dependency_graph::DependencyGraph;
use super::topological::sort_level_by_name;

pub fn sort_tier(
	graph: &DependencyGraph,
	store: &MetadataStore,
	id_to_handle: &HashMap<PackageId, ModHandle>,
) -> Vec<ModHandle> {
	let members = graph.package_ids().cloned().collect::<Vec<_>>();
	sort_level_by_name(members, store, id_to_handle)
}
