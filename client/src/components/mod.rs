//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget chrome and the drawing surface while
//! reading/writing shared state from Leptos context providers.

pub mod canvas_host;
pub mod toolbar;
