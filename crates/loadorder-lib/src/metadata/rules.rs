use serde::{Serialize, Deserialize};
use super::PackageId;

/// A single loadBefore/loadAfter declaration.
///
/// Strict rules are enforced and reported as violations when broken;
/// non-strict rules are advisory only and never produce a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRule {
	pub target: PackageId,
	pub strict: bool,
}

impl LoadRule {
	pub fn strict(target: impl Into<PackageId>) -> Self {
		Self { target: target.into(), strict: true }
	}

	pub fn advisory(target: impl Into<PackageId>) -> Self {
		Self { target: target.into(), strict: false }
	}
}

/// Where a mod's metadata came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
	/// Core game content or an official expansion.
	Expansion,
	#[default] Local,
	SteamCmd,
	Workshop,
}
