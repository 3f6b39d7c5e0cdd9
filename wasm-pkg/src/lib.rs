//! Pendulum Lab browser package.
//!
//! Thin wrapper that re-exports the parent crate's wasm bindings for
//! wasm-pack builds; the page imports `LabBench` from here.

use wasm_bindgen::prelude::*;

// Re-export the bench API from the parent crate
#[cfg(target_arch = "wasm32")]
pub use pendulum_lab::wasm::*;

/// Get package version
#[wasm_bindgen]
pub fn package_version() -> String {
    format!("pendulum-lab-wasm v{}", env!("CARGO_PKG_VERSION"))
}
