//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Evaluate a profile and render the advisory report
//! - `config` - Advisory rule inspection (show, path)
//! - `policies` - Allocation policy table

pub mod analyze;
pub mod config;
pub mod policies;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use policies::*;

/// Whether an error came from input the advisor rejected
pub fn is_validation_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<dhan_core::Error>()
        .is_some_and(|e| e.is_validation())
}
