//! Voice Ordering Backend Library
//!
//! This library provides the core functionality for a voice-driven
//! restaurant ordering assistant: a static menu, an in-memory per-session
//! cart store, the tool-execution contract consumed by a realtime
//! conversational agent, and the ephemeral-token exchange that lets a
//! browser client open the realtime voice connection.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod tools;

// Infrastructure
pub mod config;
pub mod error;
pub mod realtime;
pub mod router;
