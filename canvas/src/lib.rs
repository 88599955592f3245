//! Raster drawing engine for the paint widget.
//!
//! This crate owns the full lifecycle of the drawing surface: translating
//! pointer events into pixel mutations, rasterizing brush strokes and shape
//! outlines, and maintaining the snapshot-based undo/redo history. It has no
//! browser dependencies; the host UI layer is responsible only for feeding
//! pointer events to [`engine::Engine`] and blitting [`surface::Surface`]
//! pixels to a visible canvas whenever a handler reports
//! [`engine::Action::RenderNeeded`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`]: tool state, gesture handling, undo/redo |
//! | [`surface`] | RGBA pixel buffer and the gridded background |
//! | [`render`] | Rasterization of dots, strokes, and shape outlines |
//! | [`history`] | PNG-encoded snapshots and the cursor-indexed linear history |
//! | [`input`] | Tools, pointer buttons, and the gesture state machine |
//! | [`consts`] | Shared numeric constants (grid spacing, brush limits, history cap) |

pub mod consts;
pub mod engine;
pub mod history;
pub mod input;
pub mod render;
pub mod surface;
