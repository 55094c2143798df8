//! Browser host: the canvas-backed [`Stage`] and the `wasm-bindgen` surface.
//!
//! [`Knight`] can be driven directly from JavaScript (call `tick` from your own
//! animation loop and forward pointer coordinates), or [`mount`] wires the
//! listeners and a `requestAnimationFrame` loop itself.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, EventTarget, HtmlCanvasElement, HtmlImageElement, MouseEvent, PointerEvent};

use crate::clip::{Clip, ClipDeck, SheetLayout};
use crate::config::ControllerConfig;
use crate::controller::Controller;
use crate::error::SetupError;
use crate::geom::{Point, Size};
use crate::input::Event;
use crate::render;
use crate::stage::Stage;

/// Stage backed by a `<canvas>` and a sprite sheet `<img>`.
pub struct CanvasStage {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sheet: HtmlImageElement,
    layout: SheetLayout,
    held_alpha: f64,
    deck: ClipDeck,
    position: Point,
    held: bool,
}

impl CanvasStage {
    /// Bind to a canvas and a loaded sprite sheet.
    ///
    /// # Errors
    ///
    /// Fails if the sheet is not loaded or too small for `layout`, or the
    /// canvas has no 2D context.
    pub fn new(
        canvas: HtmlCanvasElement,
        sheet: HtmlImageElement,
        layout: SheetLayout,
        held_alpha: f64,
    ) -> Result<Self, SetupError> {
        if !sheet.complete() {
            return Err(SetupError::SheetNotLoaded);
        }
        layout.check_sheet(f64::from(sheet.natural_width()), f64::from(sheet.natural_height()))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SetupError::NoContext)?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)?;

        let stage = Self {
            canvas,
            ctx,
            sheet,
            layout,
            held_alpha,
            deck: ClipDeck::new(),
            position: Point::default(),
            held: false,
        };
        stage.set_cursor("grab");
        Ok(stage)
    }

    /// Advance the visible clip's animation by one frame tick.
    pub fn advance(&mut self) {
        self.deck.advance(&self.layout);
    }

    /// Draw the current frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let alpha = if self.held { self.held_alpha } else { 1.0 };
        render::draw(&self.ctx, &self.sheet, &self.layout, &self.deck, self.position, alpha, self.viewport())
    }

    /// Convert a DOM pointer event into canvas pixel coordinates.
    ///
    /// Accounts for CSS scaling of the canvas element.
    #[must_use]
    pub fn scene_point(&self, ev: &MouseEvent) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        let scale_x = if rect.width() > 0.0 { f64::from(self.canvas.width()) / rect.width() } else { 1.0 };
        let scale_y = if rect.height() > 0.0 { f64::from(self.canvas.height()) / rect.height() } else { 1.0 };
        Point::new(
            (f64::from(ev.client_x()) - rect.left()) * scale_x,
            (f64::from(ev.client_y()) - rect.top()) * scale_y,
        )
    }

    fn set_cursor(&self, cursor: &str) {
        if let Err(e) = self.canvas.style().set_property("cursor", cursor) {
            log::warn!("cursor update failed: {e:?}");
        }
    }
}

impl Stage for CanvasStage {
    fn viewport(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn show_clip(&mut self, clip: Clip, at: Point) {
        self.position = at;
        if let Some(swap) = self.deck.show(clip) {
            log::trace!("clip {:?} -> {:?}", swap.hidden, swap.shown);
        }
    }

    fn move_to(&mut self, at: Point) {
        self.position = at;
    }

    fn set_held(&mut self, held: bool) {
        self.held = held;
        self.set_cursor(if held { "grabbing" } else { "grab" });
    }
}

/// The knight, as seen from JavaScript.
#[wasm_bindgen]
pub struct Knight {
    controller: Controller<CanvasStage, StdRng>,
}

#[wasm_bindgen]
impl Knight {
    /// Create a knight on `canvas` using the loaded `sheet` image.
    ///
    /// `config_json` holds optional overrides for the tuning defaults.
    ///
    /// # Errors
    ///
    /// Throws if the config is invalid, the sheet is not usable, or the canvas
    /// has no area.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        sheet: HtmlImageElement,
        config_json: Option<String>,
    ) -> Result<Knight, JsError> {
        Ok(Self::build(canvas, sheet, config_json.as_deref())?)
    }

    /// Advance one frame: state machine first, then clip animation.
    pub fn tick(&mut self) {
        self.controller.handle(Event::Tick);
        self.controller.stage_mut().advance();
    }

    /// Returns `true` if the press picked the knight up.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.controller.handle(Event::PointerDown(Point::new(x, y))).is_some()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.controller.handle(Event::PointerMove(Point::new(x, y)));
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.controller.handle(Event::PointerUp(Point::new(x, y)));
    }

    /// Draw the current frame to the canvas.
    ///
    /// # Errors
    ///
    /// Throws if a canvas call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        self.controller.stage().render()
    }

    /// Current state name: `walking`, `idle`, `dragging` or `bouncing`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.controller.state().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.controller.position().x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.controller.position().y
    }
}

impl Knight {
    fn build(canvas: HtmlCanvasElement, sheet: HtmlImageElement, config_json: Option<&str>) -> Result<Self, SetupError> {
        let config = match config_json {
            Some(raw) => ControllerConfig::from_json(raw)?,
            None => ControllerConfig::default(),
        };
        let stage = CanvasStage::new(canvas, sheet, config.sheet, config.held_alpha)?;
        let controller = Controller::new(stage, StdRng::seed_from_u64(browser_seed()), config)?;
        Ok(Self { controller })
    }

    fn scene_point(&self, ev: &MouseEvent) -> Point {
        self.controller.stage().scene_point(ev)
    }
}

/// Seed from `Math.random`; `StdRng` needs no OS entropy source this way.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn browser_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

// =============================================================
// Self-hosting
// =============================================================

/// Find `#canvas_id` and `#sheet_id`, create a knight and run it.
///
/// Pointer presses are taken on the canvas; moves and releases on the window,
/// so a drag can end outside the canvas. The frame loop runs for the lifetime
/// of the page.
///
/// # Errors
///
/// Throws if either element is missing or of the wrong type, or the knight
/// cannot be set up.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, sheet_id: &str, config_json: Option<String>) -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }

    let window = web_sys::window().ok_or_else(|| SetupError::MissingElement("window".into()))?;
    let document = window.document().ok_or_else(|| SetupError::MissingElement("document".into()))?;
    let canvas: HtmlCanvasElement = element(&document, canvas_id, "canvas")?;
    let sheet: HtmlImageElement = element(&document, sheet_id, "img")?;

    let knight = Rc::new(RefCell::new(Knight::build(canvas.clone(), sheet, config_json.as_deref())?));

    let k = Rc::clone(&knight);
    listen(&canvas, "pointerdown", move |ev: PointerEvent| {
        let mut knight = k.borrow_mut();
        let p = knight.scene_point(&ev);
        if knight.pointer_down(p.x, p.y) {
            ev.prevent_default();
        }
    })?;

    let k = Rc::clone(&knight);
    listen(&window, "pointermove", move |ev: PointerEvent| {
        let mut knight = k.borrow_mut();
        let p = knight.scene_point(&ev);
        knight.pointer_move(p.x, p.y);
    })?;

    let k = Rc::clone(&knight);
    listen(&window, "pointerup", move |ev: PointerEvent| {
        let mut knight = k.borrow_mut();
        let p = knight.scene_point(&ev);
        knight.pointer_up(p.x, p.y);
    })?;

    start_frame_loop(&window, knight)?;
    log::info!("knight mounted on #{canvas_id}");
    Ok(())
}

fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElement { id: id.to_string(), expected })
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(PointerEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(PointerEvent)>::new(handler);
    target
        .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
        .map_err(|_| SetupError::Listener(format!("{kind} listener")))?;
    // Listeners live as long as the page.
    cb.forget();
    Ok(())
}

fn start_frame_loop(window: &web_sys::Window, knight: Rc<RefCell<Knight>>) -> Result<(), SetupError> {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();

    *holder.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
        {
            let mut knight = knight.borrow_mut();
            knight.tick();
            if let Err(e) = knight.render() {
                log::warn!("render failed: {e:?}");
            }
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()).is_err() {
                log::warn!("frame loop stopped: requestAnimationFrame refused");
            }
        }
    }));

    let first = holder.borrow();
    let Some(cb) = first.as_ref() else {
        return Err(SetupError::Listener("animation frame".into()));
    };
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|_| SetupError::Listener("animation frame".into()))?;
    Ok(())
}
