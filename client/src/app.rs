//! Application shell — provides shared state and composes the layout.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the two context signals the rest of the tree communicates
//! through: [`UiState`] (toolbar choices plus undo/redo/clear request
//! counters) and [`CanvasViewState`] (engine-derived facts the toolbar
//! reads back, such as whether undo is possible). Components never hold
//! references to each other.
//!
//! Tool, color, and brush size survive reloads: they are loaded from
//! `localStorage` before the first render and written back whenever they
//! change.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::toolbar::Toolbar;
use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::{UiPrefs, UiState};
use crate::util::persistence;

/// Root component: restores persisted preferences, wires up the shared
/// signals, and lays out the toolbar next to the canvas.
#[component]
pub fn App() -> impl IntoView {
    let initial = persistence::load_json::<UiPrefs>(persistence::PREFS_KEY)
        .map(UiState::with_prefs)
        .unwrap_or_default();

    let ui = RwSignal::new(initial);
    let canvas_view = RwSignal::new(CanvasViewState::default());
    provide_context(ui);
    provide_context(canvas_view);

    // Write preferences back whenever the UI state changes. Request counter
    // bumps re-run this too, but `prefs()` excludes them so the stored value
    // is identical and the write is a cheap no-op.
    Effect::new(move |_| {
        let prefs = ui.with(UiState::prefs);
        persistence::save_json(persistence::PREFS_KEY, &prefs);
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Doodlepad"</h1>
            </header>
            <div class="app-content">
                <Toolbar/>
                <div class="canvas-container">
                    <CanvasHost/>
                </div>
            </div>
        </div>
    }
}
