//! Terminal UI for the deckhand binary
//!
//! Rendering is split from command logic: views build strings, commands
//! print them. Capability detection decides color and unicode once per run.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
