use pretty_assertions::assert_eq;
use sessioncaps_store::{CapType, CapValue, validators};

use super::*;

static UDID: CapabilityDef = CapabilityDef {
	key: "udid",
	owner: "SupportsUdidOption",
	value_type: CapType::String,
	default: None,
	allowed: &[],
	validator: Some(validators::non_empty),
	description: "Device UDID",
};

static LEGACY_UDID: CapabilityDef = CapabilityDef {
	key: "udid",
	owner: "SupportsLegacyUdidOption",
	value_type: CapType::String,
	default: None,
	allowed: &[],
	validator: None,
	description: "Device UDID (legacy trait)",
};

static STRATEGY: CapabilityDef = CapabilityDef {
	key: "appInstallStrategy",
	owner: "SupportsAppInstallStrategyOption",
	value_type: CapType::String,
	default: Some(|| CapValue::String("serial".into())),
	allowed: &["serial", "parallel", "ios-deploy"],
	validator: Some(validators::non_empty),
	description: "Install strategy",
};

static BAD_DEFAULT: CapabilityDef = CapabilityDef {
	key: "newCommandTimeout",
	owner: "SupportsNewCommandTimeoutOption",
	value_type: CapType::Int,
	default: Some(|| CapValue::String("60".into())),
	allowed: &[],
	validator: None,
	description: "Idle timeout",
};

static UDID_SET: CapabilitySet = CapabilitySet {
	name: "SupportsUdidOption",
	defs: &[&UDID],
};

static UDID_ALIAS_SET: CapabilitySet = CapabilitySet {
	name: "SupportsDeviceIdentityOptions",
	defs: &[&UDID],
};

static LEGACY_UDID_SET: CapabilitySet = CapabilitySet {
	name: "SupportsLegacyUdidOption",
	defs: &[&LEGACY_UDID],
};

static STRATEGY_SET: CapabilitySet = CapabilitySet {
	name: "SupportsAppInstallStrategyOption",
	defs: &[&STRATEGY],
};

static BAD_DEFAULT_SET: CapabilitySet = CapabilitySet {
	name: "SupportsNewCommandTimeoutOption",
	defs: &[&BAD_DEFAULT],
};

#[test]
fn test_assemble_disjoint_sets() {
	let comp = Composition::assemble("Test", &[&UDID_SET, &STRATEGY_SET]).unwrap();
	assert_eq!(comp.keys().collect::<Vec<_>>(), vec!["udid", "appInstallStrategy"]);
	assert_eq!(comp.sets().len(), 2);
	assert!(comp.contains("udid"));
	assert_eq!(comp.def("appInstallStrategy").map(|d| d.owner), Some("SupportsAppInstallStrategyOption"));
}

#[test]
fn test_duplicate_key_names_both_traits() {
	let err = Composition::assemble("Test", &[&UDID_SET, &STRATEGY_SET, &LEGACY_UDID_SET]).unwrap_err();
	assert_eq!(
		err,
		CapabilityError::DuplicateKey {
			key: "udid".to_string(),
			first: "SupportsUdidOption",
			second: "SupportsLegacyUdidOption",
		}
	);
	assert_eq!(
		err.to_string(),
		"duplicate capability key 'udid' declared by both SupportsUdidOption and SupportsLegacyUdidOption"
	);
}

#[test]
fn test_shared_definition_is_an_alias() {
	let comp = Composition::builder("Test")
		.with(&UDID_SET)
		.with(&UDID_ALIAS_SET)
		.finish()
		.unwrap();
	assert_eq!(comp.len(), 1);
	assert_eq!(comp.sets().len(), 2);
}

#[test]
fn test_default_must_match_type() {
	let err = Composition::assemble("Test", &[&BAD_DEFAULT_SET]).unwrap_err();
	assert!(matches!(err, CapabilityError::InvalidValue { ref key, .. } if key == "newCommandTimeout"));
}

#[test]
fn test_validate_store() {
	let comp = Composition::assemble("Test", &[&UDID_SET, &STRATEGY_SET]).unwrap();

	let mut store = CapabilityStore::new();
	store.set("appInstallStrategy", "ios-deploy");
	store.set("somethingElse", 3i64);
	assert_eq!(comp.validate(&store), Ok(()));

	// Unconventional values are accepted.
	store.set("appInstallStrategy", "sideload");
	assert_eq!(comp.validate(&store), Ok(()));

	store.set("appInstallStrategy", "");
	assert!(matches!(
		comp.validate(&store),
		Err(CapabilityError::InvalidValue { ref key, .. }) if key == "appInstallStrategy"
	));

	store.set("appInstallStrategy", true);
	assert_eq!(
		comp.validate(&store),
		Err(CapabilityError::TypeMismatch {
			key: "appInstallStrategy".to_string(),
			expected: CapType::String,
			got: "bool",
		})
	);
}

#[test]
fn test_suggest() {
	let comp = Composition::assemble("Test", &[&UDID_SET, &STRATEGY_SET]).unwrap();
	assert_eq!(comp.suggest("appInstallStratgy"), Some("appInstallStrategy"));
	assert_eq!(comp.suggest("udi"), Some("udid"));
	assert_eq!(comp.suggest("platformName"), None);
}
