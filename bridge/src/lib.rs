//! Boundary between an untyped host runtime and the `numeric` routines.
//!
//! A [`Module`] owns the fixed table of exported natives. A [`Session`]
//! installs that table into a [`HostScope`] exactly once and keeps it
//! resident until the host asks it to stop.

pub mod error;
pub mod marshal;
pub mod module;
pub mod native;
pub mod scope;
pub mod session;
pub mod specs;
pub mod stdlib;
pub mod value;

pub use error::BridgeError;
pub use module::Module;
pub use native::{NativeFn, NativeObj};
pub use scope::{GlobalScope, HostScope};
pub use session::{Session, ShutdownSignal};
pub use value::HostValue;
