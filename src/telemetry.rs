//! Console logging setup for the wasm runtime.

use std::sync::OnceLock;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Route `tracing` output and panic messages to the browser console.
/// Idempotent; every entry point calls it before doing anything else.
pub(crate) fn init_tracing() {
    let _ = TRACING_INIT.get_or_init(|| {
        console_error_panic_hook::set_once();
        let _ = tracing_wasm::try_set_as_global_default();
    });
}
