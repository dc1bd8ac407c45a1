/// Route `log` output to the browser console.
///
/// Uses `Debug` level when `debug_enabled` is set, `Info` otherwise. On
/// non-wasm targets this does nothing so the crate still builds and tests
/// natively.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        if let Err(e) = console_log::init_with_level(level) {
            // Already initialized or unavailable; keep running without logs
            let msg = format!("Failed to initialize console_log: {}", e);
            web_sys::console::error_1(&msg.into());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = debug_enabled;
}
