//! Core type definitions using newtype patterns for type safety.
//!
//! These types prevent common logic errors by making invalid states
//! unrepresentable at compile time.

mod confidence;
mod filter;
mod maturity;
mod record_id;

pub use confidence::{Confidence, ConfidenceError};
pub use filter::{DateRange, StatusFilter};
pub use maturity::Maturity;
pub use record_id::{RecordId, RecordIdError};
