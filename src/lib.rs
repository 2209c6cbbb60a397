//! FOIA request drafting assistant.
//!
//! foiadraft searches MuckRock for prior public records requests on a topic,
//! keeps the ones that succeeded, and asks a generation backend to draft a
//! new request from those precedents. The draft can then be filed through
//! the MuckRock API.

pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod muckrock;
pub mod services;
