//! # StudyMate Core
//!
//! Domain value objects for the StudyMate response engine. This crate has
//! **zero framework dependencies** — it defines the request and response
//! shapes that the engine, gateway, and CLI all share.
//!
//! Field names on the wire are camelCase (`actionItems`, `studyPlan`,
//! `examCountdown`, ...) so serialized responses match the JSON contract
//! the web client consumes.

pub mod request;
pub mod response;

// Re-export key types at crate root for ergonomics
pub use request::{AssistantRequest, ChatRole, ChatTurn, Mode, StudyContext};
pub use response::{AssistantResponse, Resource, StudyBlock, StudyPlan};
