//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and external
//! systems. Implementations live in the `adapters` module; tests supply
//! fakes.

mod assistant;

pub use assistant::{AssistKind, Assistant, AssistantError};
