//! Application under test.

use sessioncaps_capability::{capability, validators};

capability! {
	/// Location of the application package.
	pub trait SupportsAppOption as APP_SET {
		/// Full path or URL of the `.app`/`.ipa` package to install.
		app: String = APP_OPTION("app") {
			validator: validators::non_empty,
			description: "Path or URL of the application package",
		}
	}
}

capability! {
	/// Bundle identifier of an already installed application.
	pub trait SupportsBundleIdOption as BUNDLE_ID_SET {
		/// Bundle identifier of the app under test, e.g. `com.apple.Preferences`.
		bundle_id: String = BUNDLE_ID_OPTION("bundleId") {
			validator: validators::non_empty,
			description: "Bundle identifier of the application under test",
		}
	}
}

capability! {
	/// Application installation strategy for real devices.
	///
	/// Conventional strategies are:
	/// - `serial` (default): pushes app files to the device sequentially. The
	///   slowest and most reliable strategy.
	/// - `parallel`: pushes app files simultaneously. Usually the fastest, but
	///   occasionally unstable.
	/// - `ios-deploy`: installs through the third-party `ios-deploy` tool, which
	///   must be installed separately and present in `PATH`.
	///
	/// Any other non-empty value is accepted and forwarded as is, so servers
	/// that learn new strategies keep working with this client.
	pub trait SupportsAppInstallStrategyOption as APP_INSTALL_STRATEGY_SET {
		/// Selects the application installation strategy.
		app_install_strategy: String = APP_INSTALL_STRATEGY_OPTION("appInstallStrategy") {
			default: "serial",
			allowed: ["serial", "parallel", "ios-deploy"],
			validator: validators::non_empty,
			description: "Application installation strategy for real devices",
		}
	}
}

capability! {
	/// Extra applications installed before the session starts.
	pub trait SupportsOtherAppsOption as OTHER_APPS_SET {
		/// Path, URL or JSON array of additional packages.
		other_apps: String = OTHER_APPS_OPTION("otherApps") {
			validator: validators::non_empty,
			description: "Additional application packages to install",
		}
	}
}
