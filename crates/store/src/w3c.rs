//! W3C WebDriver capability naming.
//!
//! Standard capabilities travel under their plain names. Everything else is an
//! extension capability and must carry a vendor prefix on the wire.

/// Vendor prefix applied to extension capabilities.
pub const VENDOR_PREFIX: &str = "appium:";

/// Capability names defined by the W3C WebDriver specification.
pub const STANDARD_CAPABILITIES: &[&str] = &[
	"acceptInsecureCerts",
	"browserName",
	"browserVersion",
	"pageLoadStrategy",
	"platformName",
	"proxy",
	"setWindowRect",
	"strictFileInteractability",
	"timeouts",
	"unhandledPromptBehavior",
	"webSocketUrl",
];

pub fn is_standard(name: &str) -> bool {
	STANDARD_CAPABILITIES.contains(&name)
}

/// Returns the wire name for `name`, adding [`VENDOR_PREFIX`] to extension capabilities.
pub fn to_w3c_name(name: &str) -> String {
	if is_standard(name) || name.contains(':') {
		name.to_string()
	} else {
		format!("{VENDOR_PREFIX}{name}")
	}
}

/// Strips [`VENDOR_PREFIX`] unless the remainder is a standard capability.
///
/// Repeated prefixes are stripped as well, so the result is a fixed point.
/// Other vendor prefixes are kept since they name a different extension namespace.
pub fn strip_vendor_prefix(name: &str) -> &str {
	match name.strip_prefix(VENDOR_PREFIX) {
		Some(rest) if !rest.is_empty() && !is_standard(rest) => strip_vendor_prefix(rest),
		_ => name,
	}
}
