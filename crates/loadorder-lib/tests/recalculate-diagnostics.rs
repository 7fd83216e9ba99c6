use std::collections::HashSet;

use loadorder_rs::config::LoadOrderOptions;
use loadorder_rs::diagnostics::{describe, display_names, recalculate, summarize};
use loadorder_rs::metadata::{LoadRule, PackageId};
use loadorder_test_utils::{mod_meta, store_from_json, store_from_mods};

const GAME_VERSION: &str = "1.5";

fn no_ignores() -> HashSet<PackageId> {
	HashSet::new()
}

#[test]
fn missing_dependency_is_reported() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.dependencies.insert(PackageId::new("core.missing"));
	let (store, active) = store_from_mods([m1]);

	let results = recalculate(&store, &active, &no_ignores(), GAME_VERSION);
	let set = &results[&active[0]];
	assert_eq!(set.missing_dependencies, [PackageId::new("core.missing")].into());
	assert!(set.has_errors());
}

#[test]
fn active_replacement_satisfies_a_retired_dependency() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.dependencies.insert(PackageId::new("fluffy.worktab"));
	let fork = mod_meta("arof.fluffy.worktab.continued", "WorkTab Continued");
	let (store, active) = store_from_mods([m1, fork]);

	let results = recalculate(&store, &active, &no_ignores(), GAME_VERSION);
	assert!(results[&active[0]].missing_dependencies.is_empty());
}

#[test]
fn incompatibility_is_one_directional_unless_declared_both_ways() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.incompatibilities.insert(PackageId::new("tester.m2"));
	let m2 = mod_meta("tester.m2", "M2");
	let (store, active) = store_from_mods([m1, m2]);

	let results = recalculate(&store, &active, &no_ignores(), GAME_VERSION);
	assert_eq!(
		results[&active[0]].conflicting_incompatibilities,
		[PackageId::new("tester.m2")].into(),
	);
	assert!(results[&active[1]].conflicting_incompatibilities.is_empty());
}

#[test]
fn strict_load_before_violation_clears_after_reorder() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.load_these_before.push(LoadRule::strict("tester.m2"));
	let m2 = mod_meta("tester.m2", "M2");
	let (store, handles) = store_from_mods([m1, m2]);
	let (m1_handle, m2_handle) = (handles[0].clone(), handles[1].clone());

	/* M1 sits after the mod it must load before. */
	let misordered = vec![m2_handle.clone(), m1_handle.clone()];
	let results = recalculate(&store, &misordered, &no_ignores(), GAME_VERSION);
	assert_eq!(
		results[&m1_handle].load_before_violations,
		[PackageId::new("tester.m2")].into(),
	);

	let fixed = vec![m1_handle.clone(), m2_handle];
	let results = recalculate(&store, &fixed, &no_ignores(), GAME_VERSION);
	assert!(results[&m1_handle].load_before_violations.is_empty());
}

#[test]
fn advisory_rules_never_violate() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.load_these_before.push(LoadRule::advisory("tester.m2"));
	let m2 = mod_meta("tester.m2", "M2");
	let (store, handles) = store_from_mods([m1, m2]);

	let misordered = vec![handles[1].clone(), handles[0].clone()];
	let results = recalculate(&store, &misordered, &no_ignores(), GAME_VERSION);
	assert!(results[&handles[0]].load_before_violations.is_empty());
}

#[test]
fn strict_load_after_violation() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.load_these_after.push(LoadRule::strict("tester.m2"));
	let m2 = mod_meta("tester.m2", "M2");
	let (store, handles) = store_from_mods([m1, m2]);

	let results = recalculate(&store, &handles, &no_ignores(), GAME_VERSION);
	assert_eq!(
		results[&handles[0]].load_after_violations,
		[PackageId::new("tester.m2")].into(),
	);

	let fixed = vec![handles[1].clone(), handles[0].clone()];
	let results = recalculate(&store, &fixed, &no_ignores(), GAME_VERSION);
	assert!(results[&handles[0]].load_after_violations.is_empty());
}

#[test]
fn version_mismatch_only_when_versions_are_declared() {
	let mut outdated = mod_meta("tester.outdated", "Outdated");
	outdated.supported_versions.insert("1.4".to_string());
	let undeclared = mod_meta("tester.undeclared", "Undeclared");
	let mut current = mod_meta("tester.current", "Current");
	current.supported_versions.insert("1.5".to_string());
	let (store, active) = store_from_mods([outdated, undeclared, current]);

	let results = recalculate(&store, &active, &no_ignores(), GAME_VERSION);
	assert!(results[&active[0]].version_mismatch);
	assert!(!results[&active[1]].version_mismatch);
	assert!(!results[&active[2]].version_mismatch);
}

#[test]
fn ignored_mods_skip_rule_checks_but_keep_the_mismatch_flag() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.dependencies.insert(PackageId::new("core.missing"));
	m1.supported_versions.insert("1.4".to_string());
	let (store, active) = store_from_mods([m1]);

	let mut options = LoadOrderOptions::default();
	options.toggle_warning(&PackageId::new("tester.m1"));
	let results = recalculate(&store, &active, options.ignored_warnings(), GAME_VERSION);
	let set = &results[&active[0]];
	assert!(set.missing_dependencies.is_empty());
	assert!(set.version_mismatch);

	/* Suppressed from the totals as well. */
	let summary = summarize(&store, &results, options.ignored_warnings());
	assert_eq!(summary.errors, 0);
	assert_eq!(summary.warnings, 0);
}

#[test]
fn summary_counts_mods_not_findings() {
	let (store, active) = store_from_json(r#"[
		{
			"packageId": "tester.broken",
			"name": "Broken",
			"dependencies": ["core.missing", "core.alsomissing"],
			"incompatibilities": ["tester.enemy"]
		},
		{"packageId": "tester.enemy", "name": "Enemy"},
		{
			"packageId": "tester.late",
			"name": "Late",
			"loadTheseAfter": [["tester.enemy", true]],
			"supportedVersions": ["1.4"]
		}
	]"#);

	/* Late sits before Enemy in declaration order: order violation plus a
	version mismatch, still one warning. Broken has three findings in error
	categories, still one error. */
	let order = vec![active[2].clone(), active[0].clone(), active[1].clone()];
	let results = recalculate(&store, &order, &no_ignores(), GAME_VERSION);
	let summary = summarize(&store, &results, &no_ignores());
	assert_eq!(summary.errors, 1);
	assert_eq!(summary.warnings, 1);
}

#[test]
fn describe_renders_grouped_findings_with_display_names() {
	let mut m1 = mod_meta("tester.m1", "M1");
	m1.dependencies.insert(PackageId::new("core.missing"));
	m1.incompatibilities.insert(PackageId::new("tester.m2"));
	m1.supported_versions.insert("1.4".to_string());
	let m2 = mod_meta("tester.m2", "Fancy Name");
	let (store, active) = store_from_mods([m1, m2]);

	let results = recalculate(&store, &active, &no_ignores(), GAME_VERSION);
	let names = display_names(&store, &active);
	let text = describe(&results[&active[0]], &names);
	assert!(text.contains("Missing dependencies:\n  * core.missing"));
	assert!(text.contains("Incompatible with:\n  * Fancy Name"));
	assert!(text.contains("Mod and game version mismatch"));

	assert_eq!(describe(&results[&active[1]], &names), "");
}
