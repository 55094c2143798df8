//! Rendering: draws the visible clip frame to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the clip deck and the character position and
//! produces pixels; it does not mutate any controller state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Knight::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::clip::{ClipDeck, SheetLayout};
use crate::geom::{Point, Size};

/// On-canvas rectangle a frame is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Where a sprite of `size` centred on `at` lands on the canvas.
///
/// The corner snaps to whole pixels so scaled pixel art stays crisp.
#[must_use]
pub fn dest_rect(at: Point, size: Size) -> DestRect {
    DestRect {
        x: (at.x - size.width / 2.0).round(),
        y: (at.y - size.height / 2.0).round(),
        width: size.width,
        height: size.height,
    }
}

/// Clear the canvas and draw the visible clip's current frame.
///
/// Nothing is drawn when no clip is visible.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. the sheet image is broken).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    sheet: &HtmlImageElement,
    layout: &SheetLayout,
    deck: &ClipDeck,
    at: Point,
    alpha: f64,
    viewport: Size,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    let Some(clip) = deck.visible() else {
        return Ok(());
    };

    // Nearest-neighbour scaling.
    ctx.set_image_smoothing_enabled(false);
    ctx.set_global_alpha(alpha);

    let src = layout.source_rect(clip, deck.frame(clip));
    let dst = dest_rect(at, layout.rendered_size());
    let drawn = ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        sheet, src.x, src.y, src.width, src.height, dst.x, dst.y, dst.width, dst.height,
    );

    ctx.set_global_alpha(1.0);
    drawn
}
