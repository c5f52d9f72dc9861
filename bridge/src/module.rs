use crate::error::BridgeError;
use crate::native::{NativeFn, NativeObj};
use crate::specs::NATIVE_TABLE;
use crate::value::HostValue;

/// The fixed set of exported natives.
///
/// Built once by [`Module::new`]; there is no way to add, replace or
/// remove an entry afterwards. Not `Clone`, so a module can be handed to
/// [`crate::Session::start`] only once.
#[derive(Debug)]
pub struct Module {
    natives: Vec<NativeObj>,
}

/// Trait for native function registration
pub(crate) trait NativeRegistry {
    fn define_native(&mut self, name: &str, func: NativeFn, arity: usize);
    fn bootstrap_natives(&mut self);
}

impl NativeRegistry for Module {
    fn define_native(&mut self, name: &str, func: NativeFn, arity: usize) {
        self.natives.push(NativeObj::new(name, func, arity));
    }

    fn bootstrap_natives(&mut self) {
        for meta in NATIVE_TABLE {
            self.define_native(meta.name, meta.func, meta.arity);
        }
    }
}

impl Module {
    pub fn new() -> Self {
        let mut module = Self {
            natives: Vec::with_capacity(NATIVE_TABLE.len()),
        };
        module.bootstrap_natives();
        module
    }

    /// Natives in installation order.
    pub fn natives(&self) -> &[NativeObj] {
        &self.natives
    }

    pub fn get(&self, name: &str) -> Option<&NativeObj> {
        self.natives.iter().find(|n| n.name == name)
    }

    pub fn call(&self, name: &str, args: &[HostValue]) -> Result<HostValue, BridgeError> {
        self.get(name)
            .ok_or_else(|| BridgeError::UnknownFunction(name.to_string()))?
            .call(args)
    }

    pub fn len(&self) -> usize {
        self.natives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.natives.is_empty()
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::NATIVE_COUNT;

    #[test]
    fn test_module_follows_native_table_order() {
        let module = Module::new();
        let names: Vec<&str> = module.natives().iter().map(|n| n.name.as_str()).collect();
        let expected: Vec<&str> = NATIVE_TABLE.iter().map(|m| m.name).collect();
        assert_eq!(names, expected);
        assert_eq!(module.len(), NATIVE_COUNT);
    }

    #[test]
    fn test_module_names_are_unique() {
        let module = Module::new();
        for (i, a) in module.natives().iter().enumerate() {
            for b in &module.natives()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_call_unknown_function() {
        let module = Module::new();
        assert_eq!(
            module.call("fibonacci", &[HostValue::Number(3.0)]),
            Err(BridgeError::UnknownFunction("fibonacci".into()))
        );
    }
}
