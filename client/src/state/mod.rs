//! Shared UI state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules keep presentation data out of components so the toolbar and
//! the canvas host can communicate without direct references to each other.

pub mod canvas_view;
pub mod ui;
