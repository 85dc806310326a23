// SPDX-License-Identifier: MIT

//!
//! The HTML Canvas frontend
//!
//! ```sh
//! wasm-pack build --target web
//! python3 -m http.server 8000 --bind 0.0.0.0
//! ```
//!
//! ```js
//! import init, { GapminderHtmlCanvas } from "./pkg/gapminder_renderer.js";
//! await init();
//! const data = await (await fetch("data.json")).text();
//! const chart = new GapminderHtmlCanvas("#chart-area", data);
//! chart.play();
//! ```
//!

use crate::{
    BubbleOut, Chart, ChartConfig, ChartColours, FilledBox, Line, Point, RetainedScene, TextAnchor,
    TextBaseline, TextOut, Tooltip,
};
use gapminder_core::{ContinentFilter, Controller, Dataset, PlaybackConfig};
use gloo_timers::callback::Interval;
use log::{debug, error, info};
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::{Closure, wasm_bindgen};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

/// Tooltip font size (px)
const TOOLTIP_FONT_SIZE: f64 = 12.0;

/// Space around the tooltip's text
const TOOLTIP_PADDING: f64 = 8.0;

/// Gap between the tooltip and the top of its bubble
const TOOLTIP_OFFSET: f64 = 10.0;

/// Opacity of the bubbles
const BUBBLE_ALPHA: f64 = 0.8;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Debug).map_err(to_js_error)?;
    info!("Start Gapminder");
    Ok(())
}

fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// A canvas and associated context
#[derive(Debug, Clone)]
struct CanvasAndContext {
    /// The canvas element
    canvas: HtmlCanvasElement,

    /// The context for the associated canvas
    ctx: CanvasRenderingContext2d,
}

/// Everything the event listeners, the animation frames, and the playback
/// interval share
struct Shared {
    chart: RefCell<Chart>,
    scene: RefCell<RetainedScene>,
    controller: RefCell<Controller>,
    surface: CanvasAndContext,

    /// Whether an animation frame has been requested and not yet run
    frame_pending: Cell<bool>,

    /// Steps the controller while playing (dropped to stop)
    player: RefCell<Option<Interval>>,
}

/// The HTML canvas chart for use on the web
#[wasm_bindgen]
pub struct GapminderHtmlCanvas {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl GapminderHtmlCanvas {
    /// Mount a new chart in the element matching `container_selector`, showing
    /// the dataset in `data_json`
    #[wasm_bindgen(constructor)]
    pub fn new(container_selector: &str, data_json: &str) -> Result<GapminderHtmlCanvas, JsValue> {
        info!("Constructing a new GapminderHtmlCanvas in Rust");

        let dataset = Dataset::from_json_str(data_json).map_err(to_js_error)?;
        let mut chart = Chart::new(ChartConfig::default());
        let layout = *chart.layout();
        let surface = mount_canvas(container_selector, layout.surface_width, layout.surface_height)?;
        let mut scene = RetainedScene::new(&layout, now_ms);
        let controller = Controller::new(dataset, PlaybackConfig::default());
        chart.initialize(&mut scene, &controller.current().snapshot);

        let html_canvas = Self {
            shared: Rc::new(Shared {
                chart: RefCell::new(chart),
                scene: RefCell::new(scene),
                controller: RefCell::new(controller),
                surface,
                frame_pending: Cell::new(false),
                player: RefCell::new(None),
            }),
        };

        info!("Setting up listeners");
        html_canvas.listen_for_mousemove();
        html_canvas.listen_for_mouseleave();
        html_canvas.listen_for_click();
        request_frame(&html_canvas.shared);
        Ok(html_canvas)
    }

    /// Play if stopped, stop if playing.  Returns whether it's now playing.
    #[wasm_bindgen]
    pub fn toggle_play(&self) -> bool {
        if self.is_playing() {
            self.stop();
        } else {
            self.play();
        }
        self.is_playing()
    }

    #[wasm_bindgen]
    pub fn play(&self) {
        self.shared.controller.borrow_mut().play();
        start_player(&self.shared);
    }

    #[wasm_bindgen]
    pub fn stop(&self) {
        self.shared.controller.borrow_mut().stop();
        self.shared.player.borrow_mut().take();
    }

    /// Go back to 1800 (playback carries on if playing)
    #[wasm_bindgen]
    pub fn reset(&self) {
        self.shared.controller.borrow_mut().reset();
        show_current(&self.shared);
    }

    /// Jump to a year (clamped to the years in the dataset)
    #[wasm_bindgen]
    pub fn seek_year(&self, year: i32) {
        self.shared.controller.borrow_mut().seek_year(year);
        show_current(&self.shared);
    }

    /// Only show one continent (or `"all"`)
    #[wasm_bindgen]
    pub fn set_continent(&self, continent: &str) -> Result<(), JsValue> {
        let filter: ContinentFilter = continent.parse().map_err(to_js_error)?;
        self.shared.controller.borrow_mut().filter_by(filter);
        show_current(&self.shared);
        Ok(())
    }

    /// The year being shown
    #[wasm_bindgen]
    pub fn year(&self) -> i32 {
        self.shared.controller.borrow().time().year()
    }

    #[wasm_bindgen]
    pub fn is_playing(&self) -> bool {
        self.shared.controller.borrow().is_playing()
    }

    /// Get the clicks and hovers since the last call
    #[wasm_bindgen]
    pub fn drain_interaction_events(&self) -> Result<JsValue, JsValue> {
        let events: Vec<_> = self
            .shared
            .chart
            .borrow_mut()
            .drain_interaction_events()
            .collect();
        serde_wasm_bindgen::to_value(&events).map_err(JsValue::from)
    }
}

//------------------------------------------------------------------------------
// Manage events
//------------------------------------------------------------------------------
impl GapminderHtmlCanvas {
    fn add_listener<E, F>(&self, event_name: &str, mut listener: F)
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                listener(event);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(err) = self
            .shared
            .surface
            .canvas
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        {
            error!("Couldn't listen for {event_name}: {err:?}");
        }

        // The listener lives as long as the page
        closure.forget();
    }

    /// Mousemove event handler (hover over bubble)
    fn listen_for_mousemove(&self) {
        let shared = self.shared.clone();
        self.add_listener::<MouseEvent, _>("mousemove", move |event: MouseEvent| {
            let point = event_point(&shared, &event);
            let key = shared.scene.borrow().bubble_at(point).map(str::to_string);
            let cursor = if key.is_some() { "pointer" } else { "default" };
            if let Err(err) = shared
                .surface
                .canvas
                .style()
                .set_property("cursor", cursor)
            {
                error!("Couldn't set the cursor: {err:?}");
            }
            shared
                .chart
                .borrow_mut()
                .hover_over_bubble(&mut *shared.scene.borrow_mut(), key.as_deref());
            request_frame(&shared);
        });
    }

    /// Mouseleave event handler
    fn listen_for_mouseleave(&self) {
        let shared = self.shared.clone();
        self.add_listener::<MouseEvent, _>("mouseleave", move |_event: MouseEvent| {
            shared
                .chart
                .borrow_mut()
                .hover_over_bubble(&mut *shared.scene.borrow_mut(), None);
            request_frame(&shared);
        });
    }

    /// Click event handler
    fn listen_for_click(&self) {
        let shared = self.shared.clone();
        self.add_listener::<MouseEvent, _>("click", move |event: MouseEvent| {
            let point = event_point(&shared, &event);
            let key = shared.scene.borrow().bubble_at(point).map(str::to_string);
            if let Some(key) = key {
                shared.chart.borrow_mut().click_on_bubble(&key);
            }
        });
    }
}

/// Create the canvas inside the container and get its context
fn mount_canvas(
    container_selector: &str,
    width: f64,
    height: f64,
) -> Result<CanvasAndContext, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .query_selector(container_selector)?
        .ok_or_else(|| JsValue::from_str(&format!("nothing matches `{container_selector}`")))?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    let dpr = device_pixel_ratio();
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    canvas.style().set_property("width", &format!("{width}px"))?;
    canvas.style().set_property("height", &format!("{height}px"))?;
    container.append_child(&canvas)?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    debug!("Mounted {width}x{height} canvas in `{container_selector}` (dpr {dpr})");
    Ok(CanvasAndContext { canvas, ctx })
}

/// Where the pointer is, in chart units (the canvas may be scaled by CSS)
fn event_point(shared: &Shared, event: &MouseEvent) -> Point {
    let surface_width = shared.chart.borrow().layout().surface_width;
    let client_width = shared.surface.canvas.client_width() as f64;
    let scale = if client_width > 0.0 {
        surface_width / client_width
    } else {
        1.0
    };
    Point::new(
        event.offset_x() as f64 * scale,
        event.offset_y() as f64 * scale,
    )
}

/// Start stepping through the years (replacing any running interval)
fn start_player(shared: &Rc<Shared>) {
    let interval_ms = shared.controller.borrow().config().interval.as_millis();
    let interval_ms = u32::try_from(interval_ms).unwrap_or(u32::MAX);
    let weak: Weak<Shared> = Rc::downgrade(shared);
    let interval = Interval::new(interval_ms, move || {
        if let Some(shared) = weak.upgrade() {
            shared.controller.borrow_mut().step();
            show_current(&shared);
        }
    });
    shared.player.borrow_mut().replace(interval);
}

/// Update the chart to whatever the controller says is current
fn show_current(shared: &Rc<Shared>) {
    let view = shared.controller.borrow().current();
    shared
        .chart
        .borrow_mut()
        .update(&mut *shared.scene.borrow_mut(), &view.snapshot, view.time);
    request_frame(shared);
}

/// Paint on the next animation frame, and keep painting while anything moves
fn request_frame(shared: &Rc<Shared>) {
    if shared.frame_pending.replace(true) {
        return;
    }
    let shared_clone = shared.clone();
    let callback = Closure::once_into_js(move || {
        shared_clone.frame_pending.set(false);
        if let Err(err) = paint(&shared_clone) {
            error!("Failed to paint: {err:?}");
        }
        if shared_clone.scene.borrow().is_animating() {
            request_frame(&shared_clone);
        }
    });
    let requested = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| window.request_animation_frame(callback.unchecked_ref()));
    if let Err(err) = requested {
        shared.frame_pending.set(false);
        error!("Couldn't request an animation frame: {err:?}");
    }
}

// Draw order is: static layer, time label, bubbles (with labels), tooltip
fn paint(shared: &Shared) -> Result<(), JsValue> {
    let frame = shared.scene.borrow().frame();
    let colours = *shared.chart.borrow().colours();
    let ctx = &shared.surface.ctx;

    let dpr = device_pixel_ratio();
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(
        0.0,
        0.0,
        shared.surface.canvas.width() as f64,
        shared.surface.canvas.height() as f64,
    );

    for line in &frame.static_layer.lines {
        draw_line(ctx, line);
    }
    for filled_box in &frame.static_layer.boxes {
        draw_coloured_rect(ctx, filled_box);
    }
    for text in &frame.static_layer.texts {
        draw_text(ctx, text)?;
    }
    if let Some(time_label) = &frame.time_label {
        draw_text(ctx, time_label)?;
    }
    for bubble in &frame.bubbles {
        draw_bubble(ctx, bubble)?;
    }
    if let Some(tooltip) = &frame.tooltip {
        draw_tooltip(ctx, tooltip, &colours)?;
    }
    Ok(())
}

fn draw_line(ctx: &CanvasRenderingContext2d, line: &Line) {
    ctx.begin_path();
    ctx.move_to(line.from.x, line.from.y);
    ctx.line_to(line.to.x, line.to.y);
    ctx.set_stroke_style_str(&line.style.colour.to_css_rgba(1.0));
    ctx.set_line_width(line.style.thickness);
    ctx.stroke();
}

fn draw_coloured_rect(ctx: &CanvasRenderingContext2d, rect: &FilledBox) {
    let x = rect.position_and_size.position.x;
    let y = rect.position_and_size.position.y;
    let width = rect.position_and_size.width;
    let height = rect.position_and_size.height;
    ctx.set_fill_style_str(&rect.fill_colour.to_css_rgba(1.0));
    ctx.fill_rect(x, y, width, height);
    if let Some(border) = rect.border_style {
        ctx.set_stroke_style_str(&border.colour.to_css_rgba(1.0));
        ctx.set_line_width(border.thickness);
        ctx.stroke_rect(x, y, width, height);
    }
}

fn draw_text(ctx: &CanvasRenderingContext2d, text: &TextOut) -> Result<(), JsValue> {
    ctx.set_font(&font(text.font_size));
    ctx.set_fill_style_str(&text.colour.to_css_rgba(1.0));
    ctx.set_text_align(match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "center",
        TextAnchor::End => "end",
    });
    ctx.set_text_baseline(match text.baseline {
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Middle => "middle",
        TextBaseline::Hanging => "hanging",
    });
    if text.rotation_degrees == 0.0 {
        return ctx.fill_text(&text.text, text.position.x, text.position.y);
    }
    ctx.save();
    ctx.translate(text.position.x, text.position.y)?;
    ctx.rotate(text.rotation_degrees.to_radians())?;
    let drawn = ctx.fill_text(&text.text, 0.0, 0.0);
    ctx.restore();
    drawn
}

fn draw_bubble(ctx: &CanvasRenderingContext2d, bubble: &BubbleOut) -> Result<(), JsValue> {
    let geometry = bubble.geometry;
    ctx.begin_path();
    ctx.arc(geometry.cx, geometry.cy, geometry.r.max(0.0), 0.0, TAU)?;
    ctx.set_fill_style_str(&bubble.fill_colour.to_css_rgba(BUBBLE_ALPHA));
    ctx.fill();
    if let Some(label) = &bubble.label {
        draw_text(ctx, label)?;
    }
    Ok(())
}

/// A box of text lines centred above the tooltip's anchor
fn draw_tooltip(
    ctx: &CanvasRenderingContext2d,
    tooltip: &Tooltip,
    colours: &ChartColours,
) -> Result<(), JsValue> {
    ctx.set_font(&font(TOOLTIP_FONT_SIZE));
    let mut text_width: f64 = 0.0;
    for line in &tooltip.lines {
        text_width = text_width.max(ctx.measure_text(line)?.width());
    }
    let line_height = TOOLTIP_FONT_SIZE * 1.4;
    let width = text_width + 2.0 * TOOLTIP_PADDING;
    let height = line_height * tooltip.lines.len() as f64 + 2.0 * TOOLTIP_PADDING;
    let left = tooltip.anchor.x - width / 2.0;
    let top = tooltip.anchor.y - TOOLTIP_OFFSET - height;

    ctx.set_fill_style_str(&colours.tooltip.background.to_css_rgba(0.8));
    ctx.fill_rect(left, top, width, height);

    ctx.set_fill_style_str(&colours.tooltip.text_colour.to_css_rgba(1.0));
    ctx.set_text_align("start");
    ctx.set_text_baseline("top");
    for (i, line) in tooltip.lines.iter().enumerate() {
        ctx.fill_text(
            line,
            left + TOOLTIP_PADDING,
            top + TOOLTIP_PADDING + i as f64 * line_height,
        )?;
    }
    Ok(())
}

fn font(font_size: f64) -> String {
    format!("{font_size}px sans-serif")
}

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// Milliseconds since the page loaded (the scene's clock)
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}
