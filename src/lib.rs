//! EcoLéxico - Terminal Trivia for Ecuadorian Spanish Regionalisms
//!
//! This module exposes the quiz engine and its collaborators for testing and
//! external use.

pub mod build_info;
pub mod catalog;
pub mod constants;
pub mod profile;
pub mod trivia;
pub mod words;

// UI module is exposed for the binary but is tightly coupled to the terminal
pub mod ui;
