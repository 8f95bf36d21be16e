//! Session-wide capabilities shared by every driver.

use sessioncaps_capability::{capability, validators};

capability! {
	/// W3C `platformName`. Sent without vendor prefix.
	pub trait SupportsPlatformNameOption as PLATFORM_NAME_SET {
		/// Target platform, e.g. `iOS`.
		platform_name: String = PLATFORM_NAME_OPTION("platformName") {
			validator: validators::non_empty,
			description: "Target platform name",
		}
	}
}

capability! {
	pub trait SupportsAutomationNameOption as AUTOMATION_NAME_SET {
		/// Automation driver to use, e.g. `XCUITest`.
		automation_name: String = AUTOMATION_NAME_OPTION("automationName") {
			validator: validators::non_empty,
			description: "Automation driver name",
		}
	}
}

capability! {
	/// Idle session timeout.
	pub trait SupportsNewCommandTimeoutOption as NEW_COMMAND_TIMEOUT_SET {
		/// Seconds the server waits for a new command before ending the session.
		new_command_timeout: Int = NEW_COMMAND_TIMEOUT_OPTION("newCommandTimeout") {
			default: 60,
			validator: validators::positive_int,
			description: "Idle timeout in seconds",
		}
	}
}

capability! {
	/// Reset behaviour between sessions.
	pub trait SupportsResetOptions as RESET_SET {
		/// Keep application data between sessions.
		no_reset: Bool = NO_RESET_OPTION("noReset") {
			default: false,
			description: "Do not reset application state",
		}
		/// Uninstall the application after the session.
		full_reset: Bool = FULL_RESET_OPTION("fullReset") {
			default: false,
			description: "Reinstall the application for every session",
		}
	}
}
