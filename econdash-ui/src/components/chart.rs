//! Series Chart Component
//!
//! Canvas line chart of actual values against consensus, with a hover
//! tooltip styled from the theme's tooltip palette.

use econdash::indicators::SeriesPoint;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

const CANVAS_WIDTH: f64 = 480.0;
const CANVAS_HEIGHT: f64 = 200.0;

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

const ACTUAL_COLOR: &str = "#3b82f6";
const CONSENSUS_COLOR: &str = "#9ca3af";

/// Actual vs. consensus line chart
#[component]
pub fn SeriesChart(points: Vec<SeriesPoint>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let points = store_value(points);
    let hovered = create_rw_signal(None::<usize>);

    // Redraw when the canvas mounts or the theme flips
    create_effect(move |_| {
        let dark = state.is_dark();
        if let Some(canvas) = canvas_ref.get() {
            points.with_value(|points| draw_series(&canvas, points, dark));
        }
    });

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return;
        }

        // Pointer position in canvas pixels
        let x = (ev.client_x() as f64 - rect.left()) * CANVAS_WIDTH / rect.width();
        let count = points.with_value(|p| p.len());
        hovered.set(nearest_index(x, count, MARGIN_LEFT, CANVAS_WIDTH - MARGIN_RIGHT));
    };

    view! {
        <div class="relative h-48">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                class="w-full h-full"
                on:mousemove=on_move
                on:mouseleave=move |_| hovered.set(None)
            />
            {move || {
                hovered
                    .get()
                    .and_then(|idx| points.with_value(|p| p.get(idx).cloned()))
                    .map(|point| view! {
                        <div
                            class="absolute top-2 right-2 px-3 py-2 text-xs pointer-events-none"
                            style="background-color: var(--tooltip-bg); border: 1px solid var(--tooltip-border); color: var(--tooltip-text); border-radius: 8px"
                        >
                            <div class="font-semibold">{point.period.clone()}</div>
                            <div>{format!("Actual: {}%", point.value)}</div>
                            <div>{format!("Consensus: {}%", point.consensus)}</div>
                        </div>
                    })
            }}
        </div>
    }
}

/// Index of the point whose x position is closest to `x`
///
/// Points are spread evenly over `[left, right]`.
fn nearest_index(x: f64, count: usize, left: f64, right: f64) -> Option<usize> {
    match count {
        0 => None,
        1 => Some(0),
        _ => {
            let step = (right - left) / (count - 1) as f64;
            let idx = ((x - left) / step).round().clamp(0.0, (count - 1) as f64);
            Some(idx as usize)
        }
    }
}

fn draw_series(canvas: &HtmlCanvasElement, points: &[SeriesPoint], dark: bool) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let (background, grid, label) = if dark {
        ("#111827", "#374151", "#9ca3af")
    } else {
        ("#ffffff", "#e5e7eb", "#6b7280")
    };

    ctx.set_fill_style(&background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        return;
    }

    // Shared y range for both series
    let (mut min, mut max) = points
        .iter()
        .flat_map(|p| [p.value, p.consensus])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    min -= padding;
    max += padding;

    let x_at = |idx: usize| {
        if points.len() > 1 {
            MARGIN_LEFT + chart_width * idx as f64 / (points.len() - 1) as f64
        } else {
            MARGIN_LEFT + chart_width / 2.0
        }
    };
    let y_at = |value: f64| MARGIN_TOP + chart_height * (1.0 - (value - min) / (max - min));

    // Grid and y labels
    ctx.set_stroke_style(&grid.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&label.into());
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("right");
    for i in 0..=4 {
        let value = min + (max - min) * i as f64 / 4.0;
        let y = y_at(value);
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();
        let _ = ctx.fill_text(&format!("{:.1}", value), MARGIN_LEFT - 6.0, y + 4.0);
    }

    // Period labels
    ctx.set_text_align("center");
    for (idx, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.period, x_at(idx), height - 8.0);
    }

    // Consensus, dashed
    let _ = ctx.set_line_dash(&js_sys::Array::of2(&5.0.into(), &5.0.into()));
    ctx.set_stroke_style(&CONSENSUS_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (idx, point) in points.iter().enumerate() {
        if idx == 0 {
            ctx.move_to(x_at(idx), y_at(point.consensus));
        } else {
            ctx.line_to(x_at(idx), y_at(point.consensus));
        }
    }
    ctx.stroke();

    // Actual, solid with dots
    let _ = ctx.set_line_dash(&js_sys::Array::new());
    ctx.set_stroke_style(&ACTUAL_COLOR.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (idx, point) in points.iter().enumerate() {
        if idx == 0 {
            ctx.move_to(x_at(idx), y_at(point.value));
        } else {
            ctx.line_to(x_at(idx), y_at(point.value));
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&ACTUAL_COLOR.into());
    for (idx, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(idx), y_at(point.value), 4.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_index() {
        assert_eq!(nearest_index(100.0, 0, 40.0, 468.0), None);
        assert_eq!(nearest_index(100.0, 1, 40.0, 468.0), Some(0));
        assert_eq!(nearest_index(0.0, 5, 40.0, 468.0), Some(0));
        assert_eq!(nearest_index(468.0, 5, 40.0, 468.0), Some(4));
        assert_eq!(nearest_index(260.0, 5, 40.0, 468.0), Some(2));
        assert_eq!(nearest_index(9_000.0, 5, 40.0, 468.0), Some(4));
    }
}
