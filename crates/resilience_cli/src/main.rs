//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `resilience_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("resilience_core ping={}", resilience_core::ping());
    println!("resilience_core version={}", resilience_core::core_version());
    println!(
        "resilience_core domains={} items={}",
        resilience_core::domain_catalog().len(),
        resilience_core::catalog_item_total()
    );
}
