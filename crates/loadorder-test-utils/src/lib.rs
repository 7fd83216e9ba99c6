//! Various helper functions for testing
//!
//! Builders for in-memory metadata stores so tests don't have to spell out
//! full metadata records for every mod in a fixture.

use loadorder_rs::metadata::{
	DataSource, LoadRule, MetadataStore, ModHandle, ModMetadata, PackageId,
};

/// Bare metadata record with just an id and a display name.
pub fn mod_meta(package_id: &str, name: &str) -> ModMetadata {
	ModMetadata::new(PackageId::new(package_id), name)
}

/// Builds a store from metadata records, generating one handle per record in
/// order. The returned handle list doubles as the initial active order.
pub fn store_from_mods(mods: impl IntoIterator<Item = ModMetadata>) -> (MetadataStore, Vec<ModHandle>) {
	let mut store = MetadataStore::new();
	let mut handles = Vec::new();
	for (index, metadata) in mods.into_iter().enumerate() {
		let handle = ModHandle::new(format!("mod-{index:04}"));
		store.insert(handle.clone(), metadata);
		handles.push(handle);
	}
	(store, handles)
}

/// Builds a store from a JSON array of mod objects.
///
/// Recognized keys per object: `packageId`, `name`, `dependencies`,
/// `incompatibilities`, `loadTheseBefore` / `loadTheseAfter` (arrays of
/// `[target, strict]` pairs), `supportedVersions`, `source`
/// (`expansion`/`local`/`steamcmd`/`workshop`), `loadFirst`, `loadLast`.
/// Panics on malformed fixtures so a broken test fails loudly.
pub fn store_from_json(doc: &str) -> (MetadataStore, Vec<ModHandle>) {
	let value: serde_json::Value = serde_json::from_str(doc).expect("fixture is not valid JSON");
	let mods = value.as_array().expect("fixture must be a JSON array");
	store_from_mods(mods.iter().map(metadata_from_value))
}

fn metadata_from_value(value: &serde_json::Value) -> ModMetadata {
	let obj = value.as_object().expect("fixture entries must be objects");
	let package_id = obj.get("packageId")
		.and_then(|v| v.as_str())
		.expect("fixture entry missing packageId");
	let name = obj.get("name").and_then(|v| v.as_str()).unwrap_or(package_id);

	let mut metadata = mod_meta(package_id, name);
	metadata.dependencies = id_set(obj.get("dependencies"));
	metadata.incompatibilities = id_set(obj.get("incompatibilities"));
	metadata.load_these_before = rule_list(obj.get("loadTheseBefore"));
	metadata.load_these_after = rule_list(obj.get("loadTheseAfter"));
	if let Some(versions) = obj.get("supportedVersions").and_then(|v| v.as_array()) {
		metadata.supported_versions = versions.iter()
			.map(|v| v.as_str().expect("supportedVersions entries must be strings").to_string())
			.collect();
	}
	if let Some(source) = obj.get("source").and_then(|v| v.as_str()) {
		metadata.source = match source {
			"expansion" => DataSource::Expansion,
			"local" => DataSource::Local,
			"steamcmd" => DataSource::SteamCmd,
			"workshop" => DataSource::Workshop,
			other => panic!("unknown data source in fixture: {other}"),
		};
	}
	metadata.load_first = obj.get("loadFirst").and_then(|v| v.as_bool()).unwrap_or(false);
	metadata.load_last = obj.get("loadLast").and_then(|v| v.as_bool()).unwrap_or(false);
	metadata
}

fn id_set(value: Option<&serde_json::Value>) -> std::collections::BTreeSet<PackageId> {
	value.and_then(|v| v.as_array())
		.map(|ids| {
			ids.iter()
				.map(|id| PackageId::new(id.as_str().expect("package ids must be strings")))
				.collect()
		})
		.unwrap_or_default()
}

fn rule_list(value: Option<&serde_json::Value>) -> Vec<LoadRule> {
	value.and_then(|v| v.as_array())
		.map(|rules| {
			rules.iter()
				.map(|rule| {
					let pair = rule.as_array().expect("load rules must be [target, strict] pairs");
					let target = pair[0].as_str().expect("rule target must be a string");
					let strict = pair.get(1).and_then(|v| v.as_bool()).unwrap_or(false);
					LoadRule { target: PackageId::new(target), strict }
				})
				.collect()
		})
		.unwrap_or_default()
}
