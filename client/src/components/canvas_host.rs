//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns all drawing logic; this host maps pointer/keyboard
//! events into engine calls, watches the toolbar's undo/redo/clear request
//! counters, and blits the engine's pixel buffer into the `<canvas>` element
//! whenever a handler reports `Action::RenderNeeded`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use canvas::engine::{Action, Engine};
use canvas::history::SnapshotError;
use canvas::input::Button;

use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::UiState;
use crate::util::canvas_input::{ShortcutAction, map_button, pointer_point, shortcut_action};
use crate::util::color::rgba_from_hex;

/// Padding reserved by the container around the drawing surface, in pixels.
const CONTAINER_PADDING_PX: f64 = 40.0;

/// Canvas size used when the container cannot be measured.
const FALLBACK_SIZE: (u32, u32) = (800, 600);

type EngineSlot = Rc<RefCell<Option<Engine>>>;

/// The drawing surface: owns the engine and all event wiring.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();
    let engine: EngineSlot = Rc::new(RefCell::new(None));

    // Mount: size the canvas to its container, create the engine, first blit.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let (width, height) = host_size(&canvas);
            canvas.set_width(width);
            canvas.set_height(height);
            match Engine::new(width, height) {
                Ok(new_engine) => {
                    apply_action(&canvas, &new_engine, Action::RenderNeeded, canvas_view);
                    *engine.borrow_mut() = Some(new_engine);
                }
                Err(err) => log::warn!("engine init failed: {err}"),
            }
        });
    }

    // Toolbar requests arrive as sequence-counter bumps.
    history_request_effect(ui, |u| u.undo_seq, Rc::clone(&engine), canvas_ref, canvas_view, Engine::undo);
    history_request_effect(ui, |u| u.redo_seq, Rc::clone(&engine), canvas_ref, canvas_view, Engine::redo);
    history_request_effect(ui, |u| u.clear_seq, Rc::clone(&engine), canvas_ref, canvas_view, Engine::clear);

    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if map_button(ev.button()) != Button::Primary {
                return;
            }
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let mut slot = engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            sync_tools(engine, &ui.get_untracked());
            let action = engine.pointer_down(pointer_point(&ev));
            apply_action(&canvas, engine, action, canvas_view);
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let mut slot = engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            let action = engine.pointer_move(pointer_point(&ev));
            apply_action(&canvas, engine, action, canvas_view);
        }
    };

    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let mut slot = engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            match engine.pointer_up(pointer_point(&ev)) {
                Ok(action) => apply_action(&canvas, engine, action, canvas_view),
                Err(err) => log::warn!("stroke commit failed: {err}"),
            }
        }
    };

    let on_pointer_leave = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let mut slot = engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            match engine.pointer_leave() {
                Ok(action) => apply_action(&canvas, engine, action, canvas_view),
                Err(err) => log::warn!("stroke commit failed: {err}"),
            }
        }
    };

    // Ctrl+Z / Ctrl+Shift+Z / Ctrl+Y (or Cmd) from anywhere on the page.
    let keydown_handle = window_event_listener(leptos::ev::keydown, {
        let engine = Rc::clone(&engine);
        move |ev: web_sys::KeyboardEvent| {
            let Some(action) = shortcut_action(&ev.key(), ev.ctrl_key(), ev.meta_key(), ev.shift_key()) else {
                return;
            };
            ev.prevent_default();
            let run = match action {
                ShortcutAction::Undo => Engine::undo,
                ShortcutAction::Redo => Engine::redo,
            };
            run_history_action(&engine, canvas_ref, canvas_view, run);
        }
    });
    on_cleanup(move || keydown_handle.remove());

    view! {
        <canvas
            class="drawing-canvas"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        ></canvas>
    }
}

/// Watch one sequence counter and run the matching engine action on bumps.
fn history_request_effect(
    ui: RwSignal<UiState>,
    read_seq: fn(&UiState) -> u64,
    engine: EngineSlot,
    canvas_ref: NodeRef<leptos::html::Canvas>,
    canvas_view: RwSignal<CanvasViewState>,
    run: fn(&mut Engine) -> Result<Action, SnapshotError>,
) {
    Effect::new(move |prev: Option<u64>| {
        let seq = ui.with(read_seq);
        if prev.is_some_and(|p| p != seq) {
            run_history_action(&engine, canvas_ref, canvas_view, run);
        }
        seq
    });
}

fn run_history_action(
    engine: &EngineSlot,
    canvas_ref: NodeRef<leptos::html::Canvas>,
    canvas_view: RwSignal<CanvasViewState>,
    run: fn(&mut Engine) -> Result<Action, SnapshotError>,
) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let mut slot = engine.borrow_mut();
    let Some(engine) = slot.as_mut() else {
        return;
    };
    match run(engine) {
        Ok(action) => apply_action(&canvas, engine, action, canvas_view),
        Err(err) => log::warn!("history action failed: {err}"),
    }
}

/// Push the engine's tool selection before a gesture starts.
fn sync_tools(engine: &mut Engine, ui: &UiState) {
    engine.set_tool(ui.active_tool);
    engine.set_color(rgba_from_hex(&ui.color));
    engine.set_brush_width(ui.brush_size);
}

/// Blit if needed, then publish history availability and render telemetry.
fn apply_action(
    canvas: &HtmlCanvasElement,
    engine: &Engine,
    action: Action,
    canvas_view: RwSignal<CanvasViewState>,
) {
    let render_ms = if action == Action::RenderNeeded {
        let started_ms = js_sys::Date::now();
        if let Err(err) = blit(canvas, engine) {
            log::warn!("canvas blit failed: {err:?}");
        }
        Some((js_sys::Date::now() - started_ms).max(0.0))
    } else {
        None
    };
    canvas_view.update(|view| {
        view.can_undo = engine.can_undo();
        view.can_redo = engine.can_redo();
        if render_ms.is_some() {
            view.last_render_ms = render_ms;
        }
    });
}

/// Copy the engine's pixel buffer into the visible canvas.
fn blit(canvas: &HtmlCanvasElement, engine: &Engine) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let image = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(engine.pixels()),
        engine.width(),
        engine.height(),
    )?;
    ctx.put_image_data(&image, 0.0, 0.0)
}

/// Drawing surface size: the container's inner box, or a fallback when the
/// container cannot be measured.
fn host_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let Some(parent) = canvas.parent_element() else {
        return FALLBACK_SIZE;
    };
    let rect = parent.get_bounding_client_rect();
    let width = rect.width() - CONTAINER_PADDING_PX;
    let height = rect.height() - CONTAINER_PADDING_PX;
    if width < 1.0 || height < 1.0 {
        return FALLBACK_SIZE;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = (width as u32, height as u32);
    size
}
