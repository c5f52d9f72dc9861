use std::collections::HashMap;

use crate::error::BridgeError;
use crate::native::NativeObj;
use crate::value::HostValue;

/// A host namespace that natives can be bound into.
///
/// Binding a name that already exists replaces the previous value; no
/// collision is reported.
pub trait HostScope {
    fn define_global(&mut self, native: &NativeObj) -> Result<(), BridgeError>;
}

/// In-process global namespace, for hosts that live in the same binary.
#[derive(Debug, Default)]
pub struct GlobalScope {
    globals: HashMap<String, NativeObj>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&NativeObj> {
        self.globals.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.globals.contains_key(name)
    }

    /// Invoke the global bound to `name`.
    pub fn call(&self, name: &str, args: &[HostValue]) -> Result<HostValue, BridgeError> {
        self.get(name)
            .ok_or_else(|| BridgeError::UnknownFunction(name.to_string()))?
            .call(args)
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.globals.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }
}

impl HostScope for GlobalScope {
    fn define_global(&mut self, native: &NativeObj) -> Result<(), BridgeError> {
        self.globals.insert(native.name.clone(), native.clone());
        Ok(())
    }
}
