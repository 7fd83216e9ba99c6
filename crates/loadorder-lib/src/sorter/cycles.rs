//! Simple-cycle enumeration for failed sorts.
//!
//! Strictly a failure-path diagnostic: enumeration is exponential on dense
//! pathological graphs, so it must never run on the success path. Strongly
//! connected components are computed first and the search never leaves one,
//! which keeps real-world mod lists cheap.

use std::collections::{HashMap, HashSet};
use petgraph::prelude::*;
use petgraph::algo::tarjan_scc;

use crate::metadata::PackageId;
use super::dependency_graph::DependencyGraph;

/// Enumerates every simple cycle in the graph as an arrow-joined package id
/// chain, e.g. `a -> b -> a`. Returns an empty list for an acyclic graph.
pub fn find_cycles(graph: &DependencyGraph) -> Vec<String> {
	let digraph = graph.to_petgraph();
	let mut cycles = Vec::new();

	for component in tarjan_scc(&digraph) {
		if component.len() == 1 {
			let node = component[0];
			if digraph.find_edge(node, node).is_some() {
				let id = &digraph[node];
				cycles.push(format!("{} -> {}", id, id));
			}
			continue;
		}

		/* Each cycle is emitted exactly once: only at the member that sorts
		first, and the walk never descends to a node sorting earlier. */
		let mut members = component.clone();
		members.sort_by(|a, b| digraph[*a].cmp(&digraph[*b]));
		let positions: HashMap<NodeIndex, usize> = members.iter()
			.enumerate()
			.map(|(position, node)| (*node, position))
			.collect();

		for (position, start) in members.iter().enumerate() {
			let mut path = vec![*start];
			let mut on_path = HashSet::from([*start]);
			walk(&digraph, &positions, position, *start, &mut path, &mut on_path, &mut cycles);
		}
	}

	cycles.sort();
	for cycle in &cycles {
		log::info!("dependency cycle: {}", cycle);
	}
	cycles
}

fn walk(
	digraph: &DiGraph<PackageId, ()>,
	positions: &HashMap<NodeIndex, usize>,
	start_position: usize,
	node: NodeIndex,
	path: &mut Vec<NodeIndex>,
	on_path: &mut HashSet<NodeIndex>,
	cycles: &mut Vec<String>,
) {
	for next in digraph.neighbors(node) {
		let Some(&next_position) = positions.get(&next) else {
			continue; /* Outside this component. */
		};
		if next_position == start_position {
			let mut chain = path.iter()
				.map(|step| digraph[*step].as_str())
				.collect::<Vec<_>>();
			chain.push(digraph[path[0]].as_str());
			cycles.push(chain.join(" -> "));
		} else if next_position > start_position && !on_path.contains(&next) {
			path.push(next);
			on_path.insert(next);
			walk(digraph, positions, start_position, next, path, on_path, cycles);
			on_path.remove(&next);
			path.pop();
		}
	}
}
