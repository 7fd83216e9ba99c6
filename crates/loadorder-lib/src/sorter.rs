//! Computes a validated, deterministic load order for the active mod set.
//!
//! # Usage
//! 1. Build a [`crate::MetadataStore`] covering every active handle.
//! 1. Call [`sort_active_mods()`] with the current order and a [`SortAlgorithm`].
//! 1. On success apply [`SortOutcome::order`]; when [`SortOutcome::changed`]
//! is false the list is already sorted and a UI refresh can be skipped.
//! 1. On [`CircularDependencyError`] keep the previous order untouched, build
//! the forward graph with [`build_graph()`] and pass it to [`find_cycles()`]
//! to show the user which mods to break apart.
//!
//! The sort runs in three phases: the active set is partitioned into tiers
//! (anchored-first, middle, anchored-last), each tier is ordered by the
//! chosen algorithm, and the tiers are concatenated top to bottom. If any
//! tier fails the whole sort fails and nothing is reordered.

use std::collections::HashMap;
use serde::{Serialize, Deserialize};

use crate::metadata::{MetadataStore, ModHandle, PackageId};

pub mod dependency_graph;
pub use dependency_graph::DependencyGraph;
pub use dependency_graph::build_graph;
pub use dependency_graph::build_reverse_graph;

mod tiers;
pub use tiers::TierPartition;
pub use tiers::partition;

mod topological;
pub use topological::CircularDependencyError;

mod alphabetical;

mod cycles;
pub use cycles::find_cycles;

/// Which strategy orders the mods inside each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAlgorithm {
	/// Case-insensitive name order, no dependency awareness inside a tier.
	Alphabetical,
	/// Dependency-respecting leveled sort with name tiebreak.
	#[default] Topological,
}

/// Result of a successful sort.
#[derive(Debug, Clone)]
pub struct SortOutcome {
	/// A permutation of the input handles, tiers concatenated top to bottom.
	pub order: Vec<ModHandle>,
	/// False when the input was already in sorted order.
	pub changed: bool,
}

/// Sorts the active mods with the chosen algorithm.
///
/// Deterministic for a fixed handle sequence and metadata snapshot. The
/// returned order is always a permutation of `active`: nothing is dropped or
/// duplicated.
pub fn sort_active_mods(
	store: &MetadataStore,
	active: &[ModHandle],
	algorithm: SortAlgorithm,
) -> Result<SortOutcome, CircularDependencyError> {
	log::info!("sorting {} active mods with {:?}", active.len(), algorithm);

	let forward = dependency_graph::build_graph(store, active);
	let reverse = dependency_graph::build_reverse_graph(store, active);
	let partition = tiers::partition(store, active, &forward, &reverse);

	let id_to_handle: HashMap<PackageId, ModHandle> = active.iter()
		.map(|handle| (store.metadata(handle).package_id.clone(), handle.clone()))
		.collect();

	let mut order = Vec::with_capacity(active.len());
	for tier in [&partition.top, &partition.middle, &partition.bottom] {
		let sorted = match algorithm {
			SortAlgorithm::Alphabetical => alphabetical::sort_tier(tier, store, &id_to_handle),
			SortAlgorithm::Topological => topological::sort_tier(tier, store, &id_to_handle)?,
		};
		order.extend(sorted);
	}

	let changed = order != active;
	if !changed {
		log::info!("active mods already in sorted order");
	}
	Ok(SortOutcome { order, changed })
}
