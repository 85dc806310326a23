// SPDX-License-Identifier: MIT

//!
//! A retained, animated copy of what the chart has drawn.  Frontends that
//! repaint everything each frame (HTML canvas, `egui`) draw from this.
//!

use crate::engine::helpers::ease_cubic_in_out;
use crate::{
    BubbleGeometry, BubbleOut, ChartLayout, ChartSurface, Point, StaticLayer, TextOut, Tooltip,
    colour::Colour,
};
use log::trace;
use std::time::Duration;

/// A bubble moving between two geometries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: BubbleGeometry,
    to: BubbleGeometry,
    start_ms: f64,
    duration_ms: f64,
}

impl Transition {
    /// A transition that has already finished at `geometry`
    pub fn stationary(geometry: BubbleGeometry) -> Self {
        Self {
            from: geometry,
            to: geometry,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    pub fn new(from: BubbleGeometry, to: BubbleGeometry, start_ms: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration.as_nanos() as f64 / 1_000_000.0,
        }
    }

    /// The geometry at time `now_ms`
    pub fn at(&self, now_ms: f64) -> BubbleGeometry {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from.lerp(&self.to, ease_cubic_in_out(t))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }
}

#[derive(Debug, Clone)]
struct SceneBubble {
    key: String,
    fill_colour: Colour,
    label: Option<TextOut>,
    transition: Transition,
}

/// Everything to paint for one frame, in painting order
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub static_layer: StaticLayer,
    pub time_label: Option<TextOut>,
    pub bubbles: Vec<BubbleOut>,
    pub tooltip: Option<Tooltip>,
}

/// Keeps the drawn elements in creation order and works out where each
/// bubble is at any moment
pub struct RetainedScene {
    /// Returns the current time in milliseconds
    clock: Box<dyn Fn() -> f64>,

    /// Where bubbles start when they're created
    entry_geometry: BubbleGeometry,

    static_layer: StaticLayer,
    bubbles: Vec<SceneBubble>,
    time_label: Option<TextOut>,
    tooltip: Option<Tooltip>,
}

impl RetainedScene {
    /// Create an empty scene.  Pass in a function the scene can call to get
    /// the current time in milliseconds.
    pub fn new<T>(layout: &ChartLayout, clock: T) -> Self
    where
        T: 'static + Fn() -> f64,
    {
        let origin = layout.plot_origin();
        Self {
            clock: Box::new(clock),
            entry_geometry: BubbleGeometry {
                cx: origin.x,
                cy: origin.y,
                r: 0.0,
            },
            static_layer: StaticLayer::default(),
            bubbles: Vec::new(),
            time_label: None,
            tooltip: None,
        }
    }

    fn now(&self) -> f64 {
        (self.clock)()
    }

    /// Everything to paint right now
    pub fn frame(&self) -> SceneFrame {
        let now = self.now();
        trace!("scene frame at {now}");
        SceneFrame {
            static_layer: self.static_layer.clone(),
            time_label: self.time_label.clone(),
            bubbles: self
                .bubbles
                .iter()
                .map(|bubble| BubbleOut {
                    key: bubble.key.clone(),
                    fill_colour: bubble.fill_colour,
                    geometry: bubble.transition.at(now),
                    label: bubble.label.clone(),
                })
                .collect(),
            tooltip: self.tooltip.clone(),
        }
    }

    /// Whether any bubble is still moving
    pub fn is_animating(&self) -> bool {
        let now = self.now();
        self.bubbles
            .iter()
            .any(|bubble| !bubble.transition.is_finished(now))
    }

    /// The key of the top-most bubble under the point, if any
    pub fn bubble_at(&self, point: Point) -> Option<&str> {
        let now = self.now();
        self.bubbles
            .iter()
            .rev()
            .find(|bubble| bubble.transition.at(now).contains(point))
            .map(|bubble| bubble.key.as_str())
    }

    /// The keys of all bubbles, in painting order
    pub fn bubble_keys(&self) -> Vec<&str> {
        self.bubbles.iter().map(|bubble| bubble.key.as_str()).collect()
    }

    /// The number of bubbles
    pub fn bubble_count(&self) -> usize {
        self.bubbles.len()
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut SceneBubble> {
        self.bubbles.iter_mut().find(|bubble| bubble.key == key)
    }
}

impl ChartSurface for RetainedScene {
    fn draw_static_layer(&mut self, layer: &StaticLayer) {
        self.static_layer = layer.clone();
    }

    fn create_bubble(&mut self, bubble: &BubbleOut) {
        let entry = Transition::stationary(self.entry_geometry);
        if let Some(existing) = self.find_mut(&bubble.key) {
            existing.fill_colour = bubble.fill_colour;
            return;
        }
        self.bubbles.push(SceneBubble {
            key: bubble.key.clone(),
            fill_colour: bubble.fill_colour,
            label: bubble.label.clone(),
            transition: entry,
        });
    }

    fn transition_bubble(&mut self, bubble: &BubbleOut, duration: Duration) {
        let now = self.now();
        if let Some(existing) = self.find_mut(&bubble.key) {
            let from = existing.transition.at(now);
            existing.transition = Transition::new(from, bubble.geometry, now, duration);
            existing.fill_colour = bubble.fill_colour;

            // Labels jump straight to the new position
            existing.label = bubble.label.clone();
        }
    }

    fn remove_bubble(&mut self, key: &str) {
        self.bubbles.retain(|bubble| bubble.key != key);
    }

    fn set_time_label(&mut self, label: &TextOut) {
        self.time_label = Some(label.clone());
    }

    fn show_tooltip(&mut self, tooltip: &Tooltip) {
        self.tooltip = Some(tooltip.clone());
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn bubble(key: &str, cx: f64, cy: f64, r: f64) -> BubbleOut {
        BubbleOut {
            key: key.to_string(),
            fill_colour: Colour::from_rgb(1, 2, 3),
            geometry: BubbleGeometry { cx, cy, r },
            label: None,
        }
    }

    fn scene() -> (RetainedScene, Rc<Cell<f64>>) {
        let now = Rc::new(Cell::new(0.0));
        let clock = now.clone();
        let scene = RetainedScene::new(&ChartLayout::default(), move || clock.get());
        (scene, now)
    }

    #[test]
    fn transition_interpolates() {
        let from = BubbleGeometry {
            cx: 0.0,
            cy: 0.0,
            r: 0.0,
        };
        let to = BubbleGeometry {
            cx: 100.0,
            cy: 50.0,
            r: 10.0,
        };
        let transition = Transition::new(from, to, 1000.0, Duration::from_millis(100));
        assert_eq!(transition.at(900.0), from);
        assert_eq!(transition.at(1000.0), from);
        assert_eq!(
            transition.at(1050.0),
            BubbleGeometry {
                cx: 50.0,
                cy: 25.0,
                r: 5.0
            }
        );
        assert_eq!(transition.at(1100.0), to);
        assert!(!transition.is_finished(1099.0));
        assert!(transition.is_finished(1100.0));
    }

    #[test]
    fn created_bubbles_enter_from_plot_origin() {
        let (mut scene, now) = scene();
        let target = bubble("Peru", 300.0, 200.0, 8.0);
        scene.create_bubble(&target);
        scene.transition_bubble(&target, Duration::from_millis(100));

        let start = scene.frame().bubbles[0].geometry;
        assert_eq!(
            start,
            BubbleGeometry {
                cx: 100.0,
                cy: 10.0,
                r: 0.0
            }
        );
        assert!(scene.is_animating());

        now.set(100.0);
        assert_eq!(scene.frame().bubbles[0].geometry, target.geometry);
        assert!(!scene.is_animating());
    }

    #[test]
    fn retargeting_continues_from_current_position() {
        let (mut scene, now) = scene();
        let first = bubble("Chad", 300.0, 100.0, 10.0);
        scene.create_bubble(&first);
        scene.transition_bubble(&first, Duration::ZERO);

        let second = bubble("Chad", 500.0, 300.0, 20.0);
        scene.transition_bubble(&second, Duration::from_millis(100));
        now.set(50.0);

        // Half way (the easing is symmetric)
        let halfway = BubbleGeometry {
            cx: 400.0,
            cy: 200.0,
            r: 15.0,
        };
        assert_eq!(scene.frame().bubbles[0].geometry, halfway);

        // Last writer wins: the new transition starts from the half way point
        let third = bubble("Chad", 400.0, 200.0, 5.0);
        scene.transition_bubble(&third, Duration::from_millis(100));
        assert_eq!(scene.frame().bubbles[0].geometry, halfway);
        now.set(150.0);
        assert_eq!(scene.frame().bubbles[0].geometry, third.geometry);
    }

    #[test]
    fn remove_and_hit_test() {
        let (mut scene, _now) = scene();
        for b in [
            bubble("Mali", 200.0, 200.0, 20.0),
            bubble("Niger", 210.0, 200.0, 20.0),
            bubble("Togo", 600.0, 400.0, 5.0),
        ] {
            scene.create_bubble(&b);
            scene.transition_bubble(&b, Duration::ZERO);
        }
        assert_eq!(scene.bubble_keys(), vec!["Mali", "Niger", "Togo"]);

        // Overlapping bubbles: the later one is on top
        assert_eq!(scene.bubble_at(Point::new(205.0, 200.0)), Some("Niger"));
        assert_eq!(scene.bubble_at(Point::new(185.0, 200.0)), Some("Mali"));
        assert_eq!(scene.bubble_at(Point::new(900.0, 50.0)), None);

        scene.remove_bubble("Niger");
        assert_eq!(scene.bubble_keys(), vec!["Mali", "Togo"]);
        assert_eq!(scene.bubble_at(Point::new(205.0, 200.0)), Some("Mali"));
    }

    #[test]
    fn create_twice_keeps_one_bubble() {
        let (mut scene, _now) = scene();
        let b = bubble("Oman", 1.0, 1.0, 1.0);
        scene.create_bubble(&b);
        scene.create_bubble(&b);
        assert_eq!(scene.bubble_count(), 1);
    }
}
