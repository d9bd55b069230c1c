//! Terminal form for an external text-generation service.
//!
//! The form collects a prompt, a token count and a temperature, sends them
//! to a [`generation::GenerationService`], and shows the generated text or
//! the error.

pub mod config;
pub mod controller;
pub mod generation;
pub mod logging;
pub mod shutdown;
pub mod ui;
