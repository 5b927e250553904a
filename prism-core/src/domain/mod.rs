//! Core domain types
//!
//! This module contains the core domain structures used across Prism services.
//! These types model the upstream provider's entities (messages, runs,
//! moderation verdicts) and are shared between the provider client and the
//! gateway.

pub mod message;
pub mod moderation;
pub mod run;
