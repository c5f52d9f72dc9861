/// Log a message to the host console.
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Forward Rust panics to `console.error`. Subsequent calls are no-ops.
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
