// SPDX-License-Identifier: MIT

//!
//! The egui frontend
//!

use crate::{
    BubbleOut, Chart, ChartConfig, ChartInteractionEvent, ChartLayout, ChartColours, Colour,
    FilledBox, Line, Point, RetainedScene, TextAnchor, TextBaseline, TextOut, Tooltip,
};
use eframe::egui::{
    Color32, Context, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
    epaint::TextShape,
};
use gapminder_core::{TimeIndex, YearSnapshot};
use log::*;

/// Space around the tooltip's text (chart units)
const TOOLTIP_PADDING: f64 = 8.0;

/// Gap between the tooltip and the top of its bubble (chart units)
const TOOLTIP_OFFSET: f64 = 10.0;

/// Opacity of the bubbles
const BUBBLE_ALPHA: u8 = 204;

/// The chart for use in `egui` applications
pub struct GapminderRendererEgui {
    /// The underlying [`Chart`]
    chart: Chart,

    /// What has been drawn, animated
    scene: RetainedScene,
}

impl GapminderRendererEgui {
    /// Create a new `egui` chart.  The scene's clock is `egui`'s input time.
    pub fn new(ctx: &Context, config: ChartConfig) -> Self {
        info!("Constructing a new GapminderRendererEgui");
        let ctx_clone = ctx.clone();
        let chart = Chart::new(config);
        let scene = RetainedScene::new(chart.layout(), move || {
            ctx_clone.input(|input| input.time) * 1000.0
        });
        Self { chart, scene }
    }

    /// Draw the axes and legend, then the first year
    pub fn initialize(&mut self, snapshot: &YearSnapshot) {
        self.chart.initialize(&mut self.scene, snapshot);
    }

    /// Show a year
    pub fn update(&mut self, snapshot: &YearSnapshot, time: TimeIndex) {
        self.chart.update(&mut self.scene, snapshot, time);
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn drain_interaction_events(&mut self) -> std::vec::Drain<'_, ChartInteractionEvent> {
        self.chart.drain_interaction_events()
    }

    /// Paint the chart into the space available, keeping its aspect ratio
    pub fn draw(&mut self, ui: &mut Ui) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::click());
        let mapping = SurfaceMapping::fit(self.chart.layout(), response.rect);

        // Hover over & click on bubbles
        let hovered = response
            .hover_pos()
            .and_then(|pos| self.scene.bubble_at(mapping.to_chart(pos)))
            .map(str::to_string);
        self.chart
            .hover_over_bubble(&mut self.scene, hovered.as_deref());
        if response.clicked() {
            if let Some(key) = &hovered {
                self.chart.click_on_bubble(key);
            }
        }
        if hovered.is_some() {
            ui.ctx().set_cursor_icon(eframe::egui::CursorIcon::PointingHand);
        }

        let frame = self.scene.frame();
        for line in &frame.static_layer.lines {
            draw_line(&painter, &mapping, line);
        }
        for filled_box in &frame.static_layer.boxes {
            draw_coloured_rect(&painter, &mapping, filled_box);
        }
        for text in &frame.static_layer.texts {
            draw_text(&painter, &mapping, text);
        }
        if let Some(time_label) = &frame.time_label {
            draw_text(&painter, &mapping, time_label);
        }
        for bubble in &frame.bubbles {
            draw_bubble(&painter, &mapping, bubble);
        }
        if let Some(tooltip) = &frame.tooltip {
            draw_tooltip(&painter, &mapping, tooltip, self.chart.colours());
        }

        if self.scene.is_animating() {
            trace!("Animating, requesting repaint");
            ui.ctx().request_repaint();
        }
    }
}

/// Maps chart units onto screen points
#[derive(Debug, Clone, Copy)]
struct SurfaceMapping {
    origin: Pos2,
    scale: f32,
}

impl SurfaceMapping {
    /// Centre the chart in `rect`, as large as fits
    fn fit(layout: &ChartLayout, rect: Rect) -> Self {
        let width = layout.surface_width as f32;
        let height = layout.surface_height as f32;
        let scale = (rect.width() / width).min(rect.height() / height).max(0.0);
        let used = Vec2::new(width * scale, height * scale);
        Self {
            origin: rect.center() - used / 2.0,
            scale,
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        self.origin + Vec2::new(point.x as f32, point.y as f32) * self.scale
    }

    fn to_chart(&self, pos: Pos2) -> Point {
        if self.scale <= 0.0 {
            return Point::new(f64::NAN, f64::NAN);
        }
        let local = (pos - self.origin) / self.scale;
        Point::new(local.x.into(), local.y.into())
    }

    fn length(&self, length: f64) -> f32 {
        length as f32 * self.scale
    }
}

fn colour_to_egui(colour: Colour) -> Color32 {
    colour.into()
}

fn draw_line(painter: &Painter, mapping: &SurfaceMapping, line: &Line) {
    painter.line_segment(
        [mapping.to_screen(line.from), mapping.to_screen(line.to)],
        Stroke::new(
            mapping.length(line.style.thickness).max(1.0),
            colour_to_egui(line.style.colour),
        ),
    );
}

fn draw_coloured_rect(painter: &Painter, mapping: &SurfaceMapping, rect: &FilledBox) {
    let position_and_size = &rect.position_and_size;
    let min = mapping.to_screen(position_and_size.position);
    let max = mapping.to_screen(Point::new(
        position_and_size.max_x(),
        position_and_size.max_y(),
    ));
    let (thickness, colour) = match rect.border_style {
        Some(border_style) => (mapping.length(border_style.thickness), border_style.colour),
        None => (0.0, Colour::from_rgb(0, 0, 0)),
    };
    painter.rect(
        Rect::from_two_pos(min, max),
        0.0,
        colour_to_egui(rect.fill_colour),
        Stroke::new(thickness, colour_to_egui(colour)),
        StrokeKind::Inside,
    );
}

/// Write text, honouring its anchor, baseline, and rotation
fn draw_text(painter: &Painter, mapping: &SurfaceMapping, text: &TextOut) {
    let colour = colour_to_egui(text.colour);
    let galley = painter.layout_no_wrap(
        text.text.clone(),
        FontId::proportional(mapping.length(text.font_size)),
        colour,
    );
    let size = galley.size();

    // The anchor point within the unrotated text
    let anchor_x = match text.anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => size.x / 2.0,
        TextAnchor::End => size.x,
    };
    let anchor_y = match text.baseline {
        TextBaseline::Hanging => 0.0,
        TextBaseline::Middle => size.y / 2.0,
        TextBaseline::Alphabetic => size.y * 0.8,
    };

    // Rotate the anchor offset about the text's top left corner
    let angle = text.rotation_degrees.to_radians() as f32;
    let (sin, cos) = angle.sin_cos();
    let offset = Vec2::new(
        anchor_x * cos - anchor_y * sin,
        anchor_x * sin + anchor_y * cos,
    );
    let top_left = mapping.to_screen(text.position) - offset;
    painter.add(TextShape::new(top_left, galley, colour).with_angle(angle));
}

fn draw_bubble(painter: &Painter, mapping: &SurfaceMapping, bubble: &BubbleOut) {
    let (r, g, b) = bubble.fill_colour.as_rgb();
    painter.circle_filled(
        mapping.to_screen(bubble.geometry.centre()),
        mapping.length(bubble.geometry.r.max(0.0)),
        Color32::from_rgba_unmultiplied(r, g, b, BUBBLE_ALPHA),
    );
    if let Some(label) = &bubble.label {
        draw_text(painter, mapping, label);
    }
}

/// A box of text lines centred above the tooltip's anchor
fn draw_tooltip(
    painter: &Painter,
    mapping: &SurfaceMapping,
    tooltip: &Tooltip,
    colours: &ChartColours,
) {
    let text_colour = colour_to_egui(colours.tooltip.text_colour);
    let galley = painter.layout_no_wrap(
        tooltip.lines.join("\n"),
        FontId::proportional(mapping.length(12.0)),
        text_colour,
    );
    let padding = mapping.length(TOOLTIP_PADDING);
    let size = galley.size() + Vec2::splat(2.0 * padding);
    let anchor = mapping.to_screen(tooltip.anchor);
    let bottom_centre = anchor - Vec2::new(0.0, mapping.length(TOOLTIP_OFFSET));
    let rect = Rect::from_min_size(
        Pos2::new(bottom_centre.x - size.x / 2.0, bottom_centre.y - size.y),
        size,
    );
    let (r, g, b) = colours.tooltip.background.as_rgb();
    painter.rect_filled(rect, 4.0, Color32::from_rgba_unmultiplied(r, g, b, 204));
    painter.galley(rect.min + Vec2::splat(padding), galley, text_colour);
}
