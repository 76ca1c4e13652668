//! Tool Execution Module
//!
//! Everything the remote conversational agent can do to order state lives
//! here: the typed argument models, the dispatch table with its eight
//! handlers, and the JSON schema advertised to the realtime session.

pub mod handlers;
pub mod models;
pub mod schema;

// Re-export the dispatcher entry point
pub use handlers::dispatch;
pub use schema::tool_definitions;
