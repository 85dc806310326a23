// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Gapminder egui desktop app
//!

use crate::consts::YEAR_SLIDER_WIDTH;
use crate::shortcuts::{ShortcutAction, global_shortcuts};
use eframe::App;
use eframe::egui::{self, Button, CentralPanel, ComboBox, Context, Slider, TopBottomPanel, Ui};
use gapminder_core::{
    BASE_YEAR, Continent, ContinentFilter, Controller, MAX_TIME_INDEX, TimeIndex, Ticker,
};
use gapminder_renderer::{ChartConfig, GapminderRendererEgui};
use std::time::Duration;

/// All data needed for the Gapminder (egui) desktop app
pub struct GapminderApp {
    /// Owns the dataset, the year, the filter, and whether it's playing
    controller: Controller,

    /// Draws the chart
    renderer: GapminderRendererEgui,

    /// Turns frame times into playback steps
    ticker: Ticker,

    /// The year shown on the slider
    slider_year: i32,
}

impl GapminderApp {
    /// Create the app and draw the first year
    pub fn new(ctx: &Context, controller: Controller, chart_config: ChartConfig) -> Self {
        info!("Creating Gapminder app");
        let mut renderer = GapminderRendererEgui::new(ctx, chart_config);
        renderer.initialize(&controller.current().snapshot);
        let mut app = Self {
            ticker: Ticker::new(controller.config().interval),
            slider_year: controller.time().year(),
            controller,
            renderer,
        };

        // The controller may have been set up on a later year or a filter
        app.show_current();
        app
    }

    /// Update the chart to whatever the controller says is current
    fn show_current(&mut self) {
        let view = self.controller.current();
        self.slider_year = view.time.year();
        self.renderer.update(&view.snapshot, view.time);
    }

    fn toggle_play(&mut self) {
        if self.controller.toggle_play() {
            self.ticker.reset();
        }
    }

    fn handle_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::TogglePlay => self.toggle_play(),
            ShortcutAction::Reset => {
                self.controller.reset();
                self.show_current();
            }
            ShortcutAction::StepForward => {
                self.controller.step();
                self.show_current();
            }
            ShortcutAction::StepBack => {
                let previous = self.controller.time().value().saturating_sub(1);
                self.controller.seek(TimeIndex::new(previous));
                self.show_current();
            }
        }
    }

    /// Advance playback by however many steps are due
    fn play(&mut self, ctx: &Context) {
        if !self.controller.is_playing() {
            return;
        }
        let delta = ctx.input(|i| i.stable_dt);
        let steps = self.ticker.advance(Duration::from_secs_f32(delta.max(0.0)));
        if steps > 0 {
            for _ in 0..steps {
                self.controller.step();
            }
            self.show_current();
        }
        ctx.request_repaint_after(self.controller.config().interval);
    }

    /// Play/stop, reset, the continent selector, and the year slider
    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let play_text = if self.controller.is_playing() {
                "Stop"
            } else {
                "Play"
            };
            if ui.add(Button::new(play_text)).clicked() {
                self.toggle_play();
            }

            if ui.button("Reset").clicked() {
                self.controller.reset();
                self.show_current();
            }

            ui.separator();

            let mut filter = self.controller.filter().clone();
            ComboBox::from_id_salt("continent")
                .selected_text(filter.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filter, ContinentFilter::All, "All");
                    for continent in Continent::KNOWN {
                        let label = continent.to_string();
                        ui.selectable_value(&mut filter, ContinentFilter::Only(continent), label);
                    }
                });
            if &filter != self.controller.filter() {
                self.controller.filter_by(filter);
                self.show_current();
            }

            ui.separator();

            let last_year = BASE_YEAR + MAX_TIME_INDEX as i32;
            ui.spacing_mut().slider_width = YEAR_SLIDER_WIDTH;
            let slider =
                ui.add(Slider::new(&mut self.slider_year, BASE_YEAR..=last_year).text("Year"));
            if slider.changed() {
                self.controller.seek_year(self.slider_year);
                self.show_current();
            }
        });
    }
}

impl App for GapminderApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Check for global shortcuts
        if let Some(action) = global_shortcuts(ctx) {
            self.handle_shortcut(action);
        }

        self.play(ctx);

        // Draw the controls
        TopBottomPanel::top("controls").show(ctx, |ui| {
            self.draw_controls(ui);
        });

        // Draw the chart
        CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.renderer.draw(ui);
            });

        for event in self.renderer.drain_interaction_events() {
            debug!("Chart interaction: {event:?}");
        }
    }
}
