//! Resume Editor API
//!
//! A small JSON backend for a browser resume editor:
//! - Template-based section enhancement (`POST /ai-enhance`)
//! - Resume persistence with a JSON file mirror (`POST /save-resume`)
//! - Saved resume listing and retrieval (`GET /resumes`, `GET /resume/:id`)

pub mod config;
pub mod enhance;
pub mod errors;
pub mod routes;
pub mod state;
pub mod storage;
