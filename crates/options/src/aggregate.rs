//! Options aggregates composed from the catalog.

use sessioncaps_capability::{CanSetCapability, Result, compose_options};

use crate::catalog::*;

compose_options! {
	/// Capabilities understood by every driver.
	pub struct BaseOptions {
		SupportsPlatformNameOption: PLATFORM_NAME_SET,
		SupportsAutomationNameOption: AUTOMATION_NAME_SET,
		SupportsNewCommandTimeoutOption: NEW_COMMAND_TIMEOUT_SET,
		SupportsResetOptions: RESET_SET,
	}
}

compose_options! {
	/// Session options for the XCUITest driver.
	pub struct XcuiTestOptions {
		SupportsPlatformNameOption: PLATFORM_NAME_SET,
		SupportsAutomationNameOption: AUTOMATION_NAME_SET,
		SupportsNewCommandTimeoutOption: NEW_COMMAND_TIMEOUT_SET,
		SupportsResetOptions: RESET_SET,
		SupportsAppOption: APP_SET,
		SupportsBundleIdOption: BUNDLE_ID_SET,
		SupportsAppInstallStrategyOption: APP_INSTALL_STRATEGY_SET,
		SupportsOtherAppsOption: OTHER_APPS_SET,
		SupportsProcessArgumentsOption: PROCESS_ARGUMENTS_SET,
	}
}

/// Platform name sent by [`XcuiTestOptions::for_driver`].
pub const IOS_PLATFORM_NAME: &str = "iOS";
/// Automation name sent by [`XcuiTestOptions::for_driver`].
pub const XCUITEST_AUTOMATION_NAME: &str = "XCUITest";

impl XcuiTestOptions {
	/// Creates options with the platform and automation name preset.
	///
	/// Values already present in an imported configuration can still be
	/// overridden afterwards through the regular setters.
	pub fn for_driver() -> Result<Self> {
		let options = Self::try_new()?
			.set_platform_name(IOS_PLATFORM_NAME)
			.set_automation_name(XCUITEST_AUTOMATION_NAME);
		tracing::debug!(
			platform = IOS_PLATFORM_NAME,
			automation = XCUITEST_AUTOMATION_NAME,
			"xcuitest options created",
		);
		Ok(options)
	}

	/// Lifts common options into driver options.
	pub fn from_base(base: &BaseOptions) -> Result<Self> {
		Self::from_store(base.store().clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compositions_are_valid() {
		assert!(BaseOptions::try_new().is_ok());
		assert!(XcuiTestOptions::try_new().is_ok());
		assert_eq!(XcuiTestOptions::composition().unwrap().len(), 10);
	}

	#[test]
	fn test_for_driver() {
		let opts = XcuiTestOptions::for_driver().unwrap();
		assert_eq!(opts.platform_name(), Ok(Some("iOS".to_string())));
		assert_eq!(opts.automation_name(), Ok(Some("XCUITest".to_string())));
		assert_eq!(opts.app_install_strategy(), Ok(None));
	}

	#[test]
	fn test_from_base() {
		let base = BaseOptions::new().set_no_reset(true).set_new_command_timeout(300);
		let opts = XcuiTestOptions::from_base(&base).unwrap().set_bundle_id("com.example");
		assert_eq!(opts.no_reset(), Ok(Some(true)));
		assert_eq!(opts.new_command_timeout(), Ok(Some(300)));
		assert_eq!(opts.bundle_id(), Ok(Some("com.example".to_string())));
		// The base options are untouched.
		assert!(!base.has_capability(BUNDLE_ID_OPTION));
	}
}
