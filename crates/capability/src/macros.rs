//! Declaration macros for capability traits and options aggregates.

/// Maps a [`CapType`](crate::CapType) variant name to its Rust type.
#[doc(hidden)]
#[macro_export]
macro_rules! __cap_rust_type {
	(Bool) => { bool };
	(Int) => { i64 };
	(String) => { ::std::string::String };
	(List) => { ::std::vec::Vec<$crate::CapValue> };
	(Map) => { $crate::CapMap };
}

/// Builds an optional default value factory.
#[doc(hidden)]
#[macro_export]
macro_rules! __cap_default {
	($ty:ident;) => {
		::core::option::Option::None
	};
	($ty:ident; $default:expr) => {
		::core::option::Option::Some({
			fn default_value() -> $crate::CapValue {
				$crate::CapValue::$ty(::core::convert::Into::into($default))
			}
			default_value as $crate::CapDefault
		})
	};
}

/// Selects a provided validator or none.
#[doc(hidden)]
#[macro_export]
macro_rules! __cap_validator {
	() => {
		::core::option::Option::None
	};
	($validator:path) => {
		::core::option::Option::Some($validator as $crate::CapValidator)
	};
}

/// Declares a capability trait.
///
/// This macro generates, for every capability listed:
/// - a `pub const` holding the store key
/// - a static [`CapabilityDef`](crate::CapabilityDef) and a typed
///   [`CapabilityKey`](crate::CapabilityKey) named after the capability in upper case
/// - a `set_<name>` mutator returning `Self` and a `<name>` getter on the trait
///
/// plus a static [`CapabilitySet`](crate::CapabilitySet) listing the trait's
/// definitions for [`compose_options!`](crate::compose_options).
///
/// # Example
///
/// ```ignore
/// capability! {
///     /// Application install strategy for real devices.
///     pub trait SupportsAppInstallStrategyOption as APP_INSTALL_STRATEGY_SET {
///         /// Select the install strategy.
///         app_install_strategy: String = APP_INSTALL_STRATEGY_OPTION("appInstallStrategy") {
///             default: "serial",
///             allowed: ["serial", "parallel", "ios-deploy"],
///             validator: validators::non_empty,
///             description: "Application installation strategy for real devices",
///         }
///     }
/// }
///
/// let opts = XcuiTestOptions::new().set_app_install_strategy("parallel");
/// assert_eq!(opts.app_install_strategy()?, Some("parallel".to_string()));
/// ```
///
/// The value type is one of the [`CapType`](crate::CapType) variant names.
#[macro_export]
macro_rules! capability {
	(
		$(#[$trait_meta:meta])*
		$vis:vis trait $trait:ident as $set:ident {
			$(
				$(#[$cap_meta:meta])*
				$name:ident: $ty:ident = $key_const:ident($key:literal) {
					$(default: $default:expr,)?
					$(allowed: [$($allowed:literal),* $(,)?],)?
					$(validator: $validator:path,)?
					description: $desc:literal $(,)?
				}
			)+
		}
	) => {
		$crate::__private::paste::paste! {
			$(
				#[doc = concat!("Store key of the `", $key, "` capability.")]
				$vis const $key_const: &str = $key;

				#[doc(hidden)]
				$vis static [<$name:upper _DEF>]: $crate::CapabilityDef = $crate::CapabilityDef {
					key: $key,
					owner: stringify!($trait),
					value_type: $crate::CapType::$ty,
					default: $crate::__cap_default!($ty; $($default)?),
					allowed: &[$($($allowed),*)?],
					validator: $crate::__cap_validator!($($validator)?),
					description: $desc,
				};

				#[doc = concat!("Typed key of the `", $key, "` capability.")]
				$vis const [<$name:upper>]: $crate::CapabilityKey<$crate::__cap_rust_type!($ty)> =
					$crate::CapabilityKey::new(&[<$name:upper _DEF>]);
			)+

			#[doc = concat!("Capabilities contributed by [`", stringify!($trait), "`].")]
			$vis static $set: $crate::CapabilitySet = $crate::CapabilitySet {
				name: stringify!($trait),
				defs: &[$(&[<$name:upper _DEF>]),+],
			};

			$(#[$trait_meta])*
			$vis trait $trait: $crate::CanSetCapability {
				$(
					$(#[$cap_meta])*
					#[must_use]
					fn [<set_ $name>](self, value: impl ::core::convert::Into<$crate::__cap_rust_type!($ty)>) -> Self {
						$crate::CanSetCapability::amend(self, $key_const, $crate::CapValue::$ty(value.into()))
					}

					#[doc = concat!("Returns the `", $key, "` capability, `None` if unset.")]
					fn $name(&self) -> $crate::Result<::core::option::Option<$crate::__cap_rust_type!($ty)>> {
						$crate::CanSetCapability::capability_as(self, [<$name:upper>])
					}
				)+
			}
		}
	};
}

/// Declares an options aggregate composed of capability traits.
///
/// Each entry pairs a capability trait with the [`CapabilitySet`](crate::CapabilitySet)
/// it was declared with. The generated type owns one
/// [`CapabilityStore`](crate::CapabilityStore) shared by every listed trait and
/// implements each of them, so all mutators return the aggregate itself.
///
/// ```ignore
/// compose_options! {
///     pub struct XcuiTestOptions {
///         SupportsAppInstallStrategyOption: APP_INSTALL_STRATEGY_SET,
///         SupportsBundleIdOption: BUNDLE_ID_SET,
///     }
/// }
/// ```
///
/// Key collisions between the listed traits are reported by `try_new` (and
/// every other constructor) before any capability can be read or written.
#[macro_export]
macro_rules! compose_options {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$($trait:path : $set:path),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq)]
		$vis struct $name {
			store: $crate::CapabilityStore,
		}

		impl $name {
			/// Creates an empty aggregate after verifying its composition.
			pub fn try_new() -> $crate::Result<Self> {
				Self::from_store($crate::CapabilityStore::new())
			}

			/// Creates an empty aggregate.
			///
			/// # Panics
			///
			/// Panics if two composed traits declare the same capability key.
			pub fn new() -> Self {
				match Self::try_new() {
					Ok(options) => options,
					Err(e) => panic!("{}: {e}", stringify!($name)),
				}
			}

			/// Wraps an existing store after verifying the composition.
			pub fn from_store(store: $crate::CapabilityStore) -> $crate::Result<Self> {
				<Self as $crate::CanSetCapability>::composition()?;
				Ok(Self { store })
			}

			/// Pre-populates the aggregate from an exported configuration.
			pub fn from_snapshot(snapshot: &$crate::Snapshot) -> $crate::Result<Self> {
				Self::from_store($crate::CapabilityStore::from_snapshot(snapshot))
			}

			/// Pre-populates the aggregate from a JSON object.
			pub fn from_json(input: &str) -> $crate::Result<Self> {
				Self::from_store($crate::parse::parse_json(input)?)
			}

			/// Pre-populates the aggregate from a TOML table.
			pub fn from_toml(input: &str) -> $crate::Result<Self> {
				Self::from_store($crate::parse::parse_toml(input)?)
			}

			/// Copies every capability of `other` over this one.
			#[must_use]
			pub fn merge(mut self, other: &Self) -> Self {
				self.store.merge(&other.store);
				self
			}

			/// Validates the capabilities and exports them.
			pub fn build(self) -> $crate::Result<$crate::Snapshot> {
				<Self as $crate::CanSetCapability>::validate(&self)?;
				Ok(self.store.snapshot())
			}

			pub fn to_json(&self) -> $crate::Result<::std::string::String> {
				self.store.snapshot().to_json()
			}

			pub fn into_store(self) -> $crate::CapabilityStore {
				self.store
			}
		}

		impl ::core::default::Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}

		impl ::core::fmt::Debug for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.debug_map().entries(self.store.iter()).finish()
			}
		}

		impl $crate::CanSetCapability for $name {
			fn composition() -> $crate::Result<&'static $crate::Composition> {
				static COMPOSITION: ::std::sync::OnceLock<$crate::Result<$crate::Composition>> =
					::std::sync::OnceLock::new();
				COMPOSITION
					.get_or_init(|| $crate::Composition::assemble(stringify!($name), &[$(&$set),+]))
					.as_ref()
					.map_err(::core::clone::Clone::clone)
			}

			fn store(&self) -> &$crate::CapabilityStore {
				&self.store
			}

			fn store_mut(&mut self) -> &mut $crate::CapabilityStore {
				&mut self.store
			}
		}

		$(impl $trait for $name {})+
	};
}
