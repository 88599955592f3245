//! Browser UI for the paint widget.
//!
//! A Leptos CSR app compiled to WebAssembly. The `canvas` crate owns all
//! drawing logic; this crate renders the chrome (toolbar, layout), maps DOM
//! pointer/keyboard events into engine calls, and blits the engine's pixel
//! buffer to the visible `<canvas>` element.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component: context providers and page layout |
//! | [`components`] | Toolbar and the canvas host |
//! | [`state`] | Shared UI state provided via Leptos context |
//! | [`util`] | Color normalization, input mapping, localStorage persistence |

pub mod app;
pub mod components;
pub mod state;
pub mod util;
