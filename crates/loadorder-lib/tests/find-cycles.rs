use loadorder_rs::metadata::PackageId;
use loadorder_rs::sorter::{build_graph, find_cycles};
use loadorder_test_utils::{mod_meta, store_from_mods};

#[test]
fn two_mod_cycle_is_reported_once() {
	let mut a = mod_meta("cycle.a", "A");
	a.dependencies.insert(PackageId::new("cycle.b"));
	let mut b = mod_meta("cycle.b", "B");
	b.dependencies.insert(PackageId::new("cycle.a"));
	let (store, active) = store_from_mods([a, b]);

	let graph = build_graph(&store, &active);
	assert_eq!(find_cycles(&graph), vec!["cycle.a -> cycle.b -> cycle.a"]);
}

#[test]
fn three_mod_cycle_chain() {
	let mut a = mod_meta("cycle.a", "A");
	a.dependencies.insert(PackageId::new("cycle.b"));
	let mut b = mod_meta("cycle.b", "B");
	b.dependencies.insert(PackageId::new("cycle.c"));
	let mut c = mod_meta("cycle.c", "C");
	c.dependencies.insert(PackageId::new("cycle.a"));
	let (store, active) = store_from_mods([a, b, c]);

	let graph = build_graph(&store, &active);
	assert_eq!(find_cycles(&graph), vec!["cycle.a -> cycle.b -> cycle.c -> cycle.a"]);
}

#[test]
fn self_dependency_is_a_cycle() {
	let mut selfish = mod_meta("cycle.selfish", "Selfish");
	selfish.dependencies.insert(PackageId::new("cycle.selfish"));
	let (store, active) = store_from_mods([selfish]);

	let graph = build_graph(&store, &active);
	assert_eq!(find_cycles(&graph), vec!["cycle.selfish -> cycle.selfish"]);
}

#[test]
fn acyclic_graph_has_no_cycles() {
	let mut dependent = mod_meta("chain.dependent", "Dependent");
	dependent.dependencies.insert(PackageId::new("chain.base"));
	let base = mod_meta("chain.base", "Base");
	let (store, active) = store_from_mods([dependent, base]);

	let graph = build_graph(&store, &active);
	assert!(find_cycles(&graph).is_empty());
}

#[test]
fn overlapping_cycles_are_each_enumerated() {
	/* a <-> b and a <-> c share the node a. */
	let mut a = mod_meta("cycle.a", "A");
	a.dependencies.insert(PackageId::new("cycle.b"));
	a.dependencies.insert(PackageId::new("cycle.c"));
	let mut b = mod_meta("cycle.b", "B");
	b.dependencies.insert(PackageId::new("cycle.a"));
	let mut c = mod_meta("cycle.c", "C");
	c.dependencies.insert(PackageId::new("cycle.a"));
	let (store, active) = store_from_mods([a, b, c]);

	let graph = build_graph(&store, &active);
	assert_eq!(find_cycles(&graph), vec![
		"cycle.a -> cycle.b -> cycle.a",
		"cycle.a -> cycle.c -> cycle.a",
	]);
}
