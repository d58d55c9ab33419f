//! Inkview Core Types and Definitions
//!
//! This crate provides the foundational types and definitions shared by the
//! Inkview crates. It includes:
//!
//! - **Content types**: The two ways a text can be previewed ([`content::ContentType`])
//! - **Keywords**: The tokens that open Mermaid diagram source ([`keyword`] module)
//! - **Theme**: The dark theme directive and its injector ([`theme`] module)
//! - **Encoding**: URL-safe base64 for diagram payloads ([`encode`] module)
//! - **Colors**: Color parsing and hex formatting ([`color::Color`])

pub mod color;
pub mod content;
pub mod encode;
pub mod keyword;
pub mod theme;
