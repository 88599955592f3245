//! Control strip: tool buttons, color palette, brush size, history actions.
//!
//! DESIGN
//! ======
//! The toolbar only reads and writes shared UI state. Tool/color/size choices
//! are plain field writes; undo/redo/clear are requested by bumping sequence
//! counters that the canvas host watches, so the toolbar never touches the
//! engine directly.

use canvas::input::Tool;
use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::UiState;
use crate::util::color::normalize_hex_color;

#[derive(Clone, Copy)]
struct ToolDef {
    tool: Tool,
    label: &'static str,
}

const TOOLS: &[ToolDef] = &[
    ToolDef { tool: Tool::Brush, label: "Brush" },
    ToolDef { tool: Tool::Eraser, label: "Eraser" },
    ToolDef { tool: Tool::Rect, label: "Rectangle" },
    ToolDef { tool: Tool::Circle, label: "Circle" },
    ToolDef { tool: Tool::Line, label: "Line" },
];

/// Preset swatches shown next to the custom color picker.
const PALETTE: &[&str] = &[
    "#000000", "#ffffff", "#ff0000", "#00ff00",
    "#0000ff", "#ffff00", "#ff00ff", "#00ffff",
];

/// Control strip for tool, color, size, and history actions.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let tool_buttons = TOOLS
        .iter()
        .map(|td| {
            let td = *td;
            let is_active = move || ui.get().active_tool == td.tool;
            view! {
                <button
                    class="tool-btn"
                    class:tool-btn--active=is_active
                    title=td.label
                    on:click=move |_| ui.update(|u| u.active_tool = td.tool)
                >
                    {render_icon(td.tool)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let swatches = PALETTE
        .iter()
        .map(|&swatch| {
            let is_active = move || ui.get().color == swatch;
            view! {
                <button
                    class="color-btn"
                    class:color-btn--active=is_active
                    style:background-color=swatch
                    title=swatch
                    on:click=move |_| ui.update(|u| u.color = swatch.to_owned())
                ></button>
            }
        })
        .collect::<Vec<_>>();

    let on_custom_color = move |ev: leptos::ev::Event| {
        let picked = normalize_hex_color(&event_target_value(&ev), "#000000");
        ui.update(|u| u.color = picked);
    };

    let on_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            ui.update(|u| u.brush_size = size.clamp(canvas::consts::MIN_BRUSH_PX, canvas::consts::MAX_BRUSH_PX));
        }
    };

    view! {
        <div class="toolbar">
            <div class="toolbar__section">{tool_buttons}</div>

            <div class="toolbar__section color-palette">
                {swatches}
                <input
                    type="color"
                    class="color-picker"
                    title="Custom color"
                    prop:value=move || ui.get().color
                    on:input=on_custom_color
                />
            </div>

            <div class="toolbar__section">
                <span class="size-label">{move || format!("{}px", ui.get().brush_size)}</span>
                <input
                    type="range"
                    class="size-slider"
                    min="1"
                    max="50"
                    prop:value=move || ui.get().brush_size.to_string()
                    on:input=on_size
                />
            </div>

            <div class="toolbar__section">
                <button
                    class="action-btn"
                    title="Undo (Ctrl+Z)"
                    disabled=move || !canvas_view.get().can_undo
                    on:click=move |_| ui.update(|u| u.undo_seq = u.undo_seq.saturating_add(1))
                >
                    {render_undo_icon()}
                </button>
                <button
                    class="action-btn"
                    title="Redo (Ctrl+Y)"
                    disabled=move || !canvas_view.get().can_redo
                    on:click=move |_| ui.update(|u| u.redo_seq = u.redo_seq.saturating_add(1))
                >
                    {render_redo_icon()}
                </button>
                <button
                    class="action-btn action-btn--clear"
                    title="Clear canvas"
                    on:click=move |_| ui.update(|u| u.clear_seq = u.clear_seq.saturating_add(1))
                >
                    {render_clear_icon()}
                </button>
            </div>
        </div>
    }
}

fn render_icon(tool: Tool) -> impl IntoView {
    match tool {
        Tool::Brush => view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M12 19l7-7 3 3-7 7-3-3z" />
                <path d="M18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5z" />
            </svg>
        }
        .into_any(),
        Tool::Eraser => view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M20 20H7L3 16l7-7 9 9z" />
            </svg>
        }
        .into_any(),
        Tool::Rect => view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <rect x="3" y="3" width="18" height="18" />
            </svg>
        }
        .into_any(),
        Tool::Circle => view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <circle cx="12" cy="12" r="9" />
            </svg>
        }
        .into_any(),
        Tool::Line => view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <line x1="5" y1="19" x2="19" y2="5" />
            </svg>
        }
        .into_any(),
    }
}

fn render_undo_icon() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M3 7v6h6" />
            <path d="M21 17a9 9 0 00-9-9 9 9 0 00-6 2.3L3 13" />
        </svg>
    }
}

fn render_redo_icon() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M21 7v6h-6" />
            <path d="M3 17a9 9 0 019-9 9 9 0 016 2.3l3 2.7" />
        </svg>
    }
}

fn render_clear_icon() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M3 6h18" />
            <path d="M19 6v14a2 2 0 01-2 2H7a2 2 0 01-2-2V6m3 0V4a2 2 0 012-2h4a2 2 0 012 2v2" />
        </svg>
    }
}
