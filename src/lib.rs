//! RSVP speed-reading engine with a terminal front-end.
//!
//! The engine (`engine`) tokenizes text into words and pause beats,
//! aligns every word on its optimal reading position, and drives timed
//! emission through a renderer trait. The remaining modules are the thin
//! collaborators around it: input resolution, stored preferences, and
//! the ratatui-based terminal renderer.

pub mod engine;
pub mod input;
pub mod settings;
pub mod ui;
