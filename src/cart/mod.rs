//! Session Cart Domain Module
//!
//! This module contains the per-session order state, including:
//! - Domain models (CartLine, CustomerProfile, SessionState)
//! - The concurrent session store
//! - Shared application state

pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartLine, CustomerProfile, SessionState};
pub use state::{AppState, CartStore, SharedState};
