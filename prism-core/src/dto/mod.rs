//! Request/response envelopes for the gateway HTTP API
//!
//! These types define the JSON contract between the browser/CLI clients and
//! the gateway. Each route wraps its payload in a small `{ "output": ... }`
//! envelope, except the assistant route which returns `{ "messages": [...] }`.

pub mod assistant;
pub mod audio;
pub mod chat;
pub mod embeddings;
pub mod image;
pub mod moderation;
