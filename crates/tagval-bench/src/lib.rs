//! Benchmark workloads for tagval.
//!
//! - [`mixed_variants`]: a deterministic rotation of unsigned, float and
//!   text payloads
//! - [`populated_registry`]: a registry pre-filled with [`mixed_variants`]
//! - [`sentinel_terms`]: an `add_ints` argument list ending in the 0 sentinel

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tagval_core::{ValueRegistry, Variant};

/// Build `n` payloads cycling through the three variants.
pub fn mixed_variants(n: usize) -> Vec<(Variant, String)> {
    (0..n)
        .map(|i| {
            let variant = match i % 3 {
                0 => Variant::Unsigned(i as u64),
                1 => Variant::Float(i as f64 * 0.25),
                _ => Variant::Text(format!("payload-{i}")),
            };
            (variant, format!("tag{}", i % 8))
        })
        .collect()
}

/// Build a registry holding `n` values from [`mixed_variants`].
pub fn populated_registry(n: usize) -> ValueRegistry {
    let mut registry = ValueRegistry::new();
    for (variant, name) in mixed_variants(n) {
        registry.insert(variant, &name);
    }
    registry
}

/// `n` non-zero terms followed by the 0 sentinel and some trailing noise
/// that must not be summed.
pub fn sentinel_terms(n: usize) -> Vec<i32> {
    let mut terms: Vec<i32> = (1..=n as i32).collect();
    terms.push(0);
    terms.extend([i32::MAX; 4]);
    terms
}
