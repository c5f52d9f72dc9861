use std::fmt;

use crate::error::BridgeError;
use crate::value::HostValue;
use tracing::trace;

// The unified signature for every exported native.
// args: the host arguments, in call order.
// No context parameter: a native cannot observe anything but its arguments.
pub type NativeFn = fn(args: &[HostValue]) -> Result<HostValue, BridgeError>;

#[derive(Clone)]
pub struct NativeObj {
    pub name: String,
    pub func: NativeFn,
    pub arity: usize,
}

impl fmt::Debug for NativeObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeObj")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl NativeObj {
    pub fn new(name: &str, func: NativeFn, arity: usize) -> Self {
        Self {
            name: name.to_string(),
            func,
            arity,
        }
    }

    /// Invoke with host arguments. Missing trailing arguments fail the call;
    /// extra ones are ignored.
    pub fn call(&self, args: &[HostValue]) -> Result<HostValue, BridgeError> {
        if args.len() < self.arity {
            return Err(BridgeError::MissingArgument {
                function: self.name.clone(),
                index: args.len(),
            });
        }
        trace!(name = %self.name, argc = args.len(), "invoke native");
        (self.func)(args)
    }
}
