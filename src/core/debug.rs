//! Lightweight debug logging gated by DIFFUSION_DEBUG=1 (or `--debug`).
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

static ENABLED: OnceLock<AtomicBool> = OnceLock::new();

fn flag() -> &'static AtomicBool {
    ENABLED.get_or_init(|| {
        AtomicBool::new(std::env::var("DIFFUSION_DEBUG").ok().as_deref() == Some("1"))
    })
}

pub fn is_enabled() -> bool {
    flag().load(Ordering::Relaxed)
}

/// Turn debug output on for the rest of the process (the CLI `--debug` flag).
pub fn enable() {
    flag().store(true, Ordering::Relaxed);
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!($($arg)*); }
    }};
}
