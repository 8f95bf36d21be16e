//! Session options for automation clients.
//!
//! The [`catalog`] holds independent capability traits. [`BaseOptions`] and
//! [`XcuiTestOptions`] mix them over one store:
//!
//! ```ignore
//! use sessioncaps_options::prelude::*;
//!
//! let caps = XcuiTestOptions::for_driver()?
//!     .set_bundle_id("com.example.app")
//!     .set_app_install_strategy("parallel")
//!     .set_no_reset(true)
//!     .build()?;
//! ```

mod aggregate;
pub mod catalog;

pub use aggregate::{BaseOptions, IOS_PLATFORM_NAME, XCUITEST_AUTOMATION_NAME, XcuiTestOptions};
pub use sessioncaps_capability as capability;

/// Traits and types needed to build and read options.
pub mod prelude {
	pub use sessioncaps_capability::{
		CanSetCapability, CapMap, CapType, CapValue, CapabilityError, CapabilityStore, Snapshot,
	};

	pub use crate::catalog::{
		ProcessArguments, SupportsAppInstallStrategyOption, SupportsAppOption,
		SupportsAutomationNameOption, SupportsBundleIdOption, SupportsNewCommandTimeoutOption,
		SupportsOtherAppsOption, SupportsPlatformNameOption, SupportsProcessArgumentsOption,
		SupportsResetOptions,
	};
	pub use crate::{BaseOptions, XcuiTestOptions};
}
