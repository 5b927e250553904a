//! Prism Core
//!
//! Core types and abstractions for the Prism AI gateway.
//!
//! This crate contains:
//! - Domain types: Core business entities (ChatMessage, RunHandle, etc.)
//! - DTOs: Request/response envelopes for the gateway HTTP API

pub mod domain;
pub mod dto;
