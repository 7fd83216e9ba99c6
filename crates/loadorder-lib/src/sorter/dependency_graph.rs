//! Immutable dependency graph views over the active mod set.
//!
//! Graphs are plain values built once by the functions here and never mutated
//! afterwards. Edges only ever connect packages inside the active set: a
//! declared dependency on something inactive is not an edge, it surfaces as a
//! missing-dependency diagnostic instead.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use petgraph::prelude::*;
use serde::{Serialize, Deserialize};

use crate::metadata::{MetadataStore, ModHandle, PackageId};

/// Mapping from package id to the set of active package ids it depends on.
///
/// Backed by ordered maps so every iteration order is deterministic.
/// Invariant: every key and every member of every set is a package id present
/// in the active set the graph was built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
	edges: BTreeMap<PackageId, BTreeSet<PackageId>>,
}

impl DependencyGraph {
	pub fn dependencies_of(&self, id: &PackageId) -> Option<&BTreeSet<PackageId>> {
		self.edges.get(id)
	}

	pub fn package_ids(&self) -> impl Iterator<Item = &PackageId> {
		self.edges.keys()
	}

	pub fn contains(&self, id: &PackageId) -> bool {
		self.edges.contains_key(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&PackageId, &BTreeSet<PackageId>)> {
		self.edges.iter()
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Sub-graph restricted to `members`: keys outside the set are dropped
	/// and edges leading outside the set are cut.
	pub(crate) fn induced(&self, members: &BTreeSet<PackageId>) -> DependencyGraph {
		let edges = self.edges.iter()
			.filter(|(id, _)| members.contains(*id))
			.map(|(id, deps)| {
				let kept = deps.intersection(members).cloned().collect::<BTreeSet<_>>();
				(id.clone(), kept)
			})
			.collect();
		DependencyGraph { edges }
	}

	/// Directed petgraph view, used by the cycle reporter.
	pub(crate) fn to_petgraph(&self) -> DiGraph<PackageId, ()> {
		let mut graph = DiGraph::new();
		let mut indices = HashMap::new();
		for id in self.edges.keys() {
			indices.insert(id.clone(), graph.add_node(id.clone()));
		}
		for (id, deps) in &self.edges {
			for dep in deps {
				/* Both endpoints are keys by the active-set invariant. */
				graph.add_edge(indices[id], indices[dep], ());
			}
		}
		graph
	}
}

/// Builds the forward dependency graph for the active mods.
///
/// Each active mod's declared dependencies are intersected with the active
/// package id set; every active mod gets a key even when nothing survives the
/// intersection.
pub fn build_graph(store: &MetadataStore, active: &[ModHandle]) -> DependencyGraph {
	let active_ids = active_id_set(store, active);
	let mut edges = BTreeMap::new();
	for handle in active {
		let metadata = store.metadata(handle);
		let deps = metadata.dependencies.iter()
			.filter(|dep| active_ids.contains(*dep))
			.cloned()
			.collect::<BTreeSet<_>>();
		edges.insert(metadata.package_id.clone(), deps);
	}
	log::debug!("built dependency graph over {} active mods", edges.len());
	DependencyGraph { edges }
}

/// Builds the reverse dependency graph: an edge B -> A for every active A
/// depending on active B. Answers "what depends on me" for bottom-tier
/// placement.
pub fn build_reverse_graph(store: &MetadataStore, active: &[ModHandle]) -> DependencyGraph {
	let forward = build_graph(store, active);
	let mut edges: BTreeMap<PackageId, BTreeSet<PackageId>> = forward.edges.keys()
		.map(|id| (id.clone(), BTreeSet::new()))
		.collect();
	for (id, deps) in &forward.edges {
		for dep in deps {
			if let Some(dependents) = edges.get_mut(dep) {
				dependents.insert(id.clone());
			}
		}
	}
	DependencyGraph { edges }
}

fn active_id_set(store: &MetadataStore, active: &[ModHandle]) -> HashSet<PackageId> {
	active.iter().map(|handle| store.metadata(handle).package_id.clone()).collect()
}
