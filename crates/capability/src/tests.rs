use pretty_assertions::assert_eq;

use crate::{CanSetCapability, CapType, CapValue, CapabilityError, validators};

mod device {
	crate::capability! {
		/// Device selection.
		pub trait SupportsDeviceNameOption as DEVICE_NAME_SET {
			/// Name of the device to run on.
			device_name: String = DEVICE_NAME_OPTION("deviceName") {
				validator: crate::validators::non_empty,
				description: "Device name",
			}
		}
	}

	crate::capability! {
		pub trait SupportsLegacyDeviceOption as LEGACY_DEVICE_SET {
			legacy_device_name: String = LEGACY_DEVICE_NAME_OPTION("deviceName") {
				description: "Device name (legacy)",
			}
		}
	}
}

mod timeouts {
	crate::capability! {
		/// Session timeouts.
		pub trait SupportsTimeoutOptions as TIMEOUTS_SET {
			/// Seconds the server waits for a new command.
			new_command_timeout: Int = NEW_COMMAND_TIMEOUT_OPTION("newCommandTimeout") {
				default: 60,
				validator: crate::validators::positive_int,
				description: "Idle timeout in seconds",
			}
			/// Keep app state between sessions.
			no_reset: Bool = NO_RESET_OPTION("noReset") {
				default: false,
				description: "Skip app state reset",
			}
			strategy: String = STRATEGY_OPTION("strategy") {
				default: "serial",
				allowed: ["serial", "parallel"],
				description: "Strategy",
			}
		}
	}
}

use device::*;
use timeouts::*;

crate::compose_options! {
	pub struct TestOptions {
		SupportsDeviceNameOption: DEVICE_NAME_SET,
		SupportsTimeoutOptions: TIMEOUTS_SET,
	}
}

crate::compose_options! {
	pub struct CollidingOptions {
		SupportsDeviceNameOption: DEVICE_NAME_SET,
		SupportsLegacyDeviceOption: LEGACY_DEVICE_SET,
	}
}

#[test]
fn test_generated_constants() {
	assert_eq!(DEVICE_NAME_OPTION, "deviceName");
	assert_eq!(NEW_COMMAND_TIMEOUT.key(), "newCommandTimeout");
	assert_eq!(NEW_COMMAND_TIMEOUT.def().value_type, CapType::Int);
	assert_eq!(NEW_COMMAND_TIMEOUT.default_value(), Some(60));
	assert_eq!(NO_RESET.default_value(), Some(false));
	assert_eq!(DEVICE_NAME.default_value(), None);
	assert_eq!(STRATEGY.def().allowed, &["serial", "parallel"]);
	assert_eq!(TIMEOUTS_SET.keys().collect::<Vec<_>>(), vec!["newCommandTimeout", "noReset", "strategy"]);
	assert_eq!(TIMEOUTS_SET.name, "SupportsTimeoutOptions");
}

#[test]
fn test_chaining_across_traits() {
	let opts = TestOptions::new()
		.set_device_name("iPhone 15")
		.set_new_command_timeout(120)
		.set_no_reset(true);

	assert_eq!(opts.device_name(), Ok(Some("iPhone 15".to_string())));
	assert_eq!(opts.new_command_timeout(), Ok(Some(120)));
	assert_eq!(opts.no_reset(), Ok(Some(true)));
	assert_eq!(opts.strategy(), Ok(None));
}

#[test]
fn test_resolve_falls_back_to_default() {
	let opts = TestOptions::new();
	assert_eq!(opts.new_command_timeout(), Ok(None));
	assert_eq!(opts.resolve(NEW_COMMAND_TIMEOUT), Ok(Some(60)));
	let opts = opts.set_new_command_timeout(5);
	assert_eq!(opts.resolve(NEW_COMMAND_TIMEOUT), Ok(Some(5)));
}

#[test]
fn test_getter_type_mismatch() {
	let mut opts = TestOptions::new();
	opts.set_capability(NEW_COMMAND_TIMEOUT_OPTION, "sixty");
	assert_eq!(
		opts.new_command_timeout(),
		Err(CapabilityError::TypeMismatch {
			key: "newCommandTimeout".to_string(),
			expected: CapType::Int,
			got: "string",
		})
	);
}

#[test]
fn test_collision_fails_at_construction() {
	let err = CollidingOptions::try_new().unwrap_err();
	assert_eq!(
		err,
		CapabilityError::DuplicateKey {
			key: "deviceName".to_string(),
			first: "SupportsDeviceNameOption",
			second: "SupportsLegacyDeviceOption",
		}
	);
	assert!(CollidingOptions::from_json("{}").is_err());
}

#[test]
#[should_panic(expected = "duplicate capability key 'deviceName'")]
fn test_collision_panics_in_new() {
	let _ = CollidingOptions::new();
}

#[test]
fn test_build_validates() {
	let snap = TestOptions::new()
		.set_device_name("iPhone 15")
		.set_strategy("unlisted")
		.build()
		.unwrap();
	assert_eq!(snap.get("strategy"), Some(&CapValue::String("unlisted".into())));

	let err = TestOptions::new().set_device_name("").build().unwrap_err();
	assert!(matches!(err, CapabilityError::InvalidValue { ref key, .. } if key == "deviceName"));

	let err = TestOptions::new().set_new_command_timeout(0).build().unwrap_err();
	assert_eq!(
		err,
		CapabilityError::InvalidValue {
			key: "newCommandTimeout".to_string(),
			reason: "must be at least 1, got 0".to_string(),
		}
	);
}

#[test]
fn test_build_rejects_empty_key() {
	let mut opts = TestOptions::new().set_no_reset(true);
	opts.set_capability("", "x");
	assert_eq!(opts.validate(), Err(CapabilityError::EmptyKey));
	assert_eq!(opts.build(), Err(CapabilityError::EmptyKey));
}

#[test]
fn test_prefixed_key_addresses_declared_capability() {
	let mut opts = TestOptions::new().set_no_reset(false);
	opts.set_capability("appium:noReset", true);
	assert_eq!(opts.no_reset(), Ok(Some(true)));
	assert_eq!(opts.store().len(), 1);
}

#[test]
fn test_clear_capability() {
	let opts = TestOptions::new().set_no_reset(true).clear_capability(NO_RESET_OPTION);
	assert!(!opts.has_capability(NO_RESET_OPTION));
	assert_eq!(opts.no_reset(), Ok(None));
}

#[test]
fn test_debug_lists_capabilities() {
	let opts = TestOptions::new().set_no_reset(true);
	assert_eq!(format!("{opts:?}"), r#"{"noReset": Bool(true)}"#);
}

#[test]
fn test_validators_reexported() {
	assert!(validators::non_empty(&CapValue::String("x".into())).is_ok());
}
