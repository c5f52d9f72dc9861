//! WASM bindings for numbridge.
//!
//! Loading the module installs every native on `globalThis`:
//!
//! ```js
//! import init from "./numbridge_wasm.js";
//!
//! await init();
//! goFibonacci(20);                 // 6765
//! goFindPrimes(10);                // [2, 3, 5, 7]
//! goFactorial(20);                 // "2432902008176640000"
//! goSumArray([1, 2, 3]);           // 6
//! goStatistics([2, 4, 4, 4, 5]);   // { mean, stdDev, count }
//! ```
//!
//! A call with a wrongly shaped argument throws an `Error`.

mod convert;
mod scope;
mod utils;

use std::cell::RefCell;

use bridge::{Module, Session};
use js_sys::Array;
use wasm_bindgen::prelude::*;

pub use crate::convert::{from_host, to_host};
pub use crate::scope::JsGlobalScope;
use crate::utils::{console_log, set_panic_hook};

thread_local! {
    // Keeps the installed module resident for the lifetime of the instance.
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Called automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_panic_hook();

    let mut scope = JsGlobalScope::new();
    let session = Session::start(Module::new(), &mut scope)
        .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
    let count = session.module().len();
    SESSION.with(|slot| *slot.borrow_mut() = Some(session));

    console_log(&format!("numbridge-wasm ready: {} natives installed", count));
    Ok(())
}

/// Return the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names installed on the global object, in installation order.
#[wasm_bindgen(js_name = "exportedNames")]
pub fn exported_names() -> Array {
    SESSION.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|session| {
                session
                    .module()
                    .natives()
                    .iter()
                    .map(|n| JsValue::from_str(&n.name))
                    .collect()
            })
            .unwrap_or_else(Array::new)
    })
}
