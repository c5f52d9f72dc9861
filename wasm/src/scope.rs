use bridge::{BridgeError, HostScope, HostValue, NativeObj};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::convert::{from_host, to_host};

// Wraps a one-argument closure so the host can call it with any number of
// positional arguments.
const VARIADIC_SHIM: &str =
    "return function () { return inner(Array.prototype.slice.call(arguments)); };";

/// The JavaScript global object (`globalThis`) as a [`HostScope`].
pub struct JsGlobalScope {
    global: Object,
    shim: Function,
}

impl JsGlobalScope {
    pub fn new() -> Self {
        Self {
            global: js_sys::global(),
            shim: Function::new_with_args("inner", VARIADIC_SHIM),
        }
    }
}

impl Default for JsGlobalScope {
    fn default() -> Self {
        Self::new()
    }
}

impl HostScope for JsGlobalScope {
    fn define_global(&mut self, native: &NativeObj) -> Result<(), BridgeError> {
        let bound = native.clone();
        let closure = Closure::<dyn Fn(Array) -> Result<JsValue, JsValue>>::new(move |args: Array| {
            invoke(&bound, &args)
        });

        let func = self
            .shim
            .call1(&JsValue::UNDEFINED, closure.as_ref())
            .map_err(|e| host_error(&e))?;
        Reflect::set(&self.global, &JsValue::from_str(&native.name), &func)
            .map_err(|e| host_error(&e))?;

        // The global now owns the only reference; it must outlive this scope.
        closure.forget();
        Ok(())
    }
}

fn invoke(native: &NativeObj, args: &Array) -> Result<JsValue, JsValue> {
    let args: Vec<HostValue> = args.iter().map(|v| to_host(&v)).collect();
    let result = native
        .call(&args)
        .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
    from_host(&result)
}

fn host_error(err: &JsValue) -> BridgeError {
    BridgeError::from(format!("{:?}", err))
}
