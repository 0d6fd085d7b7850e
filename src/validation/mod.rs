//! Invariant assertions and upload validation.

mod accept;
mod invariant;

pub use accept::verify_accept;
pub use invariant::{invariant, invariant_response, invariant_response_with_status, invariant_with, InvariantError};
