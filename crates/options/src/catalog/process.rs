//! Launch arguments for the application under test.

use sessioncaps_capability::{CapMap, CapValue, capability, validators};

capability! {
	/// Command line arguments and environment passed to the app on launch.
	pub trait SupportsProcessArgumentsOption as PROCESS_ARGUMENTS_SET {
		/// Structured `{ args, env }` launch configuration. See [`ProcessArguments`].
		process_arguments: Map = PROCESS_ARGUMENTS_OPTION("processArguments") {
			validator: validators::process_arguments_shape,
			description: "Application launch arguments and environment",
		}
	}
}

/// Builder for the `processArguments` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessArguments {
	args: Vec<String>,
	env: Vec<(String, String)>,
}

impl ProcessArguments {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}

	#[must_use]
	pub fn args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.args.extend(args.into_iter().map(Into::into));
		self
	}

	/// Sets an environment variable. A repeated name replaces the earlier value.
	#[must_use]
	pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();
		let value = value.into();
		match self.env.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.env.push((name, value)),
		}
		self
	}
}

impl From<ProcessArguments> for CapMap {
	fn from(p: ProcessArguments) -> Self {
		let mut map = CapMap::new();
		if !p.args.is_empty() {
			map.insert("args".to_string(), CapValue::List(p.args.into_iter().map(CapValue::String).collect()));
		}
		if !p.env.is_empty() {
			let env = p.env.into_iter().map(|(k, v)| (k, CapValue::String(v))).collect();
			map.insert("env".to_string(), CapValue::Map(env));
		}
		map
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_process_arguments_into_map() {
		let map = CapMap::from(
			ProcessArguments::new()
				.arg("-AppleLanguages")
				.args(["(en)", "-v"])
				.env("LANG", "en_US")
				.env("LANG", "de_DE"),
		);
		assert_eq!(
			map["args"],
			CapValue::List(vec!["-AppleLanguages".into(), "(en)".into(), "-v".into()])
		);
		let env = map["env"].as_map().unwrap();
		assert_eq!(env.len(), 1);
		assert_eq!(env["LANG"], CapValue::String("de_DE".into()));
		assert!(validators::process_arguments_shape(&CapValue::Map(map)).is_ok());
	}

	#[test]
	fn test_empty_process_arguments() {
		assert!(CapMap::from(ProcessArguments::new()).is_empty());
	}
}
