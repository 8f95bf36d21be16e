//! Capability traits.
//!
//! Every trait here owns its keys and knows nothing about the aggregates it is
//! mixed into.

pub mod app;
pub mod base;
pub mod process;

pub use app::*;
pub use base::*;
pub use process::*;
