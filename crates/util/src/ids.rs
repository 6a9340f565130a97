//! Identifier generation for list entries.
//!
//! Identifiers are unique and order-independent; callers must never derive
//! ordering or meaning from them beyond equality.

use uuid::Uuid;

/// Generates a prefixed unique identifier, e.g. `pair_9f3c2e...`.
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
