// SPDX-License-Identifier: MIT

//!
//! The `gapminder-renderer` engine
//!

mod colours;
mod consts;
mod events;
mod helpers;
mod layout_params;
mod point;
mod primitives;
mod recording;
mod scales;
mod scene;
mod surface;

pub(crate) use helpers::*;

pub use colours::*;
pub use consts::*;
pub use events::*;
pub use layout_params::*;
pub use point::*;
pub use primitives::*;
pub use recording::*;
pub use scales::*;
pub use scene::*;
pub use surface::*;

use gapminder_core::{Continent, CountryRecord, TimeIndex, YearSnapshot};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Chart settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// How long bubbles take to move after an update
    pub transition: Duration,

    /// Whether each bubble is labelled with its country name
    pub show_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            show_labels: true,
        }
    }
}

/// The core `gapminder-renderer` engine.  This owns the scales and the set of
/// bubbles currently drawn, and works out what has to change on a surface
/// when a new year is shown.  It is common to all frontends (e.g. the
/// desktop and HTML canvas frontends).
pub struct Chart {
    config: ChartConfig,

    /// Surface size and plot margins
    layout: ChartLayout,

    colours: ChartColours,

    scales: ChartScales,

    /// The records behind the bubbles currently drawn, in creation order
    bubbles: Vec<CountryRecord>,

    /// The country whose tooltip is showing (if any)
    hovered: Option<String>,

    /// The time of the most recent update
    time: Option<TimeIndex>,

    /// All interaction events that an external programme might be interested in
    interaction_events: Vec<ChartInteractionEvent>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl Chart {
    /// Create a new chart with the default layout and colours
    pub fn new(config: ChartConfig) -> Self {
        Self::with_colours(config, ChartColours::default())
    }

    /// Create a new chart with custom colours
    pub fn with_colours(config: ChartConfig, colours: ChartColours) -> Self {
        info!("Constructing a new chart");
        let layout = ChartLayout::default();
        Self {
            config,
            scales: ChartScales::new(&layout, &colours),
            layout,
            colours,
            bubbles: Vec::new(),
            hovered: None,
            time: None,
            interaction_events: Vec::new(),
        }
    }

    pub fn config(&self) -> ChartConfig {
        self.config
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn colours(&self) -> &ChartColours {
        &self.colours
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    /// The time most recently drawn
    pub fn time(&self) -> Option<TimeIndex> {
        self.time
    }

    /// The number of bubbles drawn
    pub fn bubble_count(&self) -> usize {
        self.bubbles.len()
    }

    /// The country names of the bubbles drawn, in creation order
    pub fn bubble_keys(&self) -> Vec<&str> {
        self.bubbles.iter().map(CountryRecord::key).collect()
    }

    /// The country whose tooltip is showing
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Draw the static parts of the chart, then the first year
    pub fn initialize<S>(&mut self, surface: &mut S, snapshot: &YearSnapshot)
    where
        S: ChartSurface + ?Sized,
    {
        info!("Initialising chart");
        surface.draw_static_layer(&self.static_layer());
        self.update(surface, snapshot, TimeIndex::first());
    }

    /// Show a new year.  Bubbles are matched to records by country name:
    /// bubbles with no record are removed, records with no bubble get one,
    /// and every remaining bubble moves to its record's position.
    pub fn update<S>(&mut self, surface: &mut S, snapshot: &YearSnapshot, time: TimeIndex)
    where
        S: ChartSurface + ?Sized,
    {
        let incoming: HashSet<&str> = snapshot.iter().map(CountryRecord::key).collect();

        // Exit
        let before = self.bubbles.len();
        self.bubbles.retain(|record| {
            let keep = incoming.contains(record.key());
            if !keep {
                surface.remove_bubble(record.key());
            }
            keep
        });
        let removed = before - self.bubbles.len();

        // Tooltips don't outlive their bubble
        if let Some(hovered) = &self.hovered {
            if !incoming.contains(hovered.as_str()) {
                self.hovered = None;
                surface.hide_tooltip();
            }
        }

        // Enter & update
        let mut positions: HashMap<String, usize> = self
            .bubbles
            .iter()
            .enumerate()
            .map(|(position, record)| (record.country.clone(), position))
            .collect();
        let mut seen = HashSet::new();
        let mut created = 0;
        for record in snapshot {
            if !seen.insert(record.key()) {
                warn!("Duplicate country `{}` in snapshot ignored", record.key());
                continue;
            }
            let bubble = self.bubble_out(record);
            match positions.get(record.key()) {
                Some(&position) => self.bubbles[position] = record.clone(),
                None => {
                    surface.create_bubble(&bubble);
                    positions.insert(record.country.clone(), self.bubbles.len());
                    self.bubbles.push(record.clone());
                    created += 1;
                }
            }
            surface.transition_bubble(&bubble, self.config.transition);
        }

        // Keep the tooltip's content in step with the year
        if let Some(record) = self.hovered_record() {
            let tooltip = self.tooltip(record);
            surface.show_tooltip(&tooltip);
        }

        surface.set_time_label(&self.time_label(time));
        self.time = Some(time);

        debug!(
            "Updated to {}: {created} created, {removed} removed, {} drawn",
            time.year(),
            self.bubbles.len()
        );
    }

    /// Show the tooltip for the bubble (or hide it with `None`).  Nothing is
    /// done if the hovered bubble hasn't changed.
    pub fn hover_over_bubble<S>(&mut self, surface: &mut S, key: Option<&str>)
    where
        S: ChartSurface + ?Sized,
    {
        let record = key.and_then(|key| self.record(key));
        match record {
            Some(record) => {
                if self.hovered.as_deref() == Some(record.key()) {
                    return;
                }
                let tooltip = self.tooltip(record);
                let key = record.country.clone();
                debug!("Hovering over: {key}");
                surface.show_tooltip(&tooltip);
                self.interaction_events
                    .push(ChartInteractionEvent::Hover(key.clone()));
                self.hovered = Some(key);
            }
            None => {
                if self.hovered.take().is_some() {
                    surface.hide_tooltip();
                }
            }
        }
    }

    /// Record a click on a bubble.  Unknown keys are ignored.
    pub fn click_on_bubble(&mut self, key: &str) {
        if self.record(key).is_some() {
            debug!("Clicked on: {key}");
            self.interaction_events
                .push(ChartInteractionEvent::Click(key.to_string()));
        }
    }

    /// Get all events for dispatching & handling
    pub fn drain_interaction_events(&mut self) -> std::vec::Drain<'_, ChartInteractionEvent> {
        self.interaction_events.drain(..)
    }

    fn record(&self, key: &str) -> Option<&CountryRecord> {
        self.bubbles.iter().find(|record| record.key() == key)
    }

    fn hovered_record(&self) -> Option<&CountryRecord> {
        self.hovered.as_deref().and_then(|key| self.record(key))
    }

    /// Where a record's bubble goes and how big it is
    pub fn geometry(&self, record: &CountryRecord) -> BubbleGeometry {
        let centre = self.layout.to_surface(Point::new(
            self.scales.x.scale(record.income),
            self.scales.y.scale(record.life_exp),
        ));
        BubbleGeometry {
            cx: centre.x,
            cy: centre.y,
            r: self.scales.radius.radius(record.population as f64),
        }
    }

    /// Everything needed to draw a record's bubble
    pub fn bubble_out(&self, record: &CountryRecord) -> BubbleOut {
        let geometry = self.geometry(record);
        let label = self.config.show_labels.then(|| TextOut {
            position: geometry.centre(),
            text: record.country.clone(),
            colour: self.colours.bubble_label,
            font_size: BUBBLE_LABEL_FONT_SIZE,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            rotation_degrees: 0.0,
        });
        BubbleOut {
            key: record.country.clone(),
            fill_colour: self.scales.colour.colour(&record.continent),
            geometry,
            label,
        }
    }

    /// The tooltip for a record, pointing at the top of its bubble
    pub fn tooltip(&self, record: &CountryRecord) -> Tooltip {
        let geometry = self.geometry(record);
        Tooltip {
            key: record.country.clone(),
            anchor: Point::new(geometry.cx, geometry.cy - geometry.r),
            lines: vec![
                format!("Country: {}", record.country),
                format!("Continent: {}", record.continent),
                format!("Life expectancy: {}", format_fixed(record.life_exp, 2)),
                format!("Income: {}", format_currency(record.income)),
                format!("Population: {}", record.population),
            ],
        }
    }

    /// The large year label
    pub fn time_label(&self, time: TimeIndex) -> TextOut {
        TextOut {
            position: self.layout.to_surface(Point::new(600.0, 400.0)),
            text: time.year().to_string(),
            colour: self.colours.time_label,
            font_size: TIME_LABEL_FONT_SIZE,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Alphabetic,
            rotation_degrees: 0.0,
        }
    }

    /// The axes, axis titles, and legend
    pub fn static_layer(&self) -> StaticLayer {
        let mut layer = StaticLayer::default();
        self.add_x_axis(&mut layer);
        self.add_y_axis(&mut layer);
        self.add_axis_titles(&mut layer);
        self.add_legend(&mut layer);
        layer
    }

    /// Push a line given in plot coordinates
    fn push_line(&self, layer: &mut StaticLayer, from: Point, to: Point) {
        layer.lines.push(Line {
            from: self.layout.to_surface(from),
            to: self.layout.to_surface(to),
            style: self.colours.axis,
        });
    }

    /// Text in plot coordinates, in the chart's text colour
    fn text(&self, plot_position: Point, text: String, font_size: f64) -> TextOut {
        TextOut {
            position: self.layout.to_surface(plot_position),
            text,
            colour: self.colours.text,
            font_size,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            rotation_degrees: 0.0,
        }
    }

    fn add_x_axis(&self, layer: &mut StaticLayer) {
        let width = self.layout.plot_width();
        let height = self.layout.plot_height();

        // Domain line with outer ticks
        let left = Point::new(0.0, height);
        let right = Point::new(width, height);
        self.push_line(layer, left, right);
        self.push_line(layer, left, left.offset(0.0, TICK_SIZE));
        self.push_line(layer, right, right.offset(0.0, TICK_SIZE));

        for value in X_AXIS_TICK_VALUES {
            let tick = Point::new(self.scales.x.scale(value), height);
            self.push_line(layer, tick, tick.offset(0.0, TICK_SIZE));
            let mut label = self.text(
                tick.offset(0.0, TICK_SIZE + TICK_PADDING),
                format_dollar_tick(value),
                TICK_FONT_SIZE,
            );
            label.anchor = TextAnchor::Middle;
            label.baseline = TextBaseline::Hanging;
            layer.texts.push(label);
        }
    }

    fn add_y_axis(&self, layer: &mut StaticLayer) {
        let height = self.layout.plot_height();

        // Domain line with outer ticks
        let top = Point::new(0.0, 0.0);
        let bottom = Point::new(0.0, height);
        self.push_line(layer, bottom, top);
        self.push_line(layer, top, top.offset(-TICK_SIZE, 0.0));
        self.push_line(layer, bottom, bottom.offset(-TICK_SIZE, 0.0));

        for value in self.scales.y.ticks(Y_AXIS_TICK_COUNT) {
            let tick = Point::new(0.0, self.scales.y.scale(value));
            self.push_line(layer, tick, tick.offset(-TICK_SIZE, 0.0));
            let mut label = self.text(
                tick.offset(-(TICK_SIZE + TICK_PADDING), 0.0),
                value.to_string(),
                TICK_FONT_SIZE,
            );
            label.anchor = TextAnchor::End;
            label.baseline = TextBaseline::Middle;
            layer.texts.push(label);
        }
    }

    fn add_axis_titles(&self, layer: &mut StaticLayer) {
        let width = self.layout.plot_width();
        let height = self.layout.plot_height();

        let mut x_title = self.text(
            Point::new(width / 2.0, height + 50.0),
            X_AXIS_TITLE.to_string(),
            AXIS_TITLE_FONT_SIZE,
        );
        x_title.anchor = TextAnchor::Middle;
        layer.texts.push(x_title);

        let mut y_title = self.text(
            Point::new(-40.0, 170.0),
            Y_AXIS_TITLE.to_string(),
            AXIS_TITLE_FONT_SIZE,
        );
        y_title.anchor = TextAnchor::End;
        y_title.rotation_degrees = -90.0;
        layer.texts.push(y_title);
    }

    fn add_legend(&self, layer: &mut StaticLayer) {
        let legend_origin = Point::new(
            self.layout.plot_width() - 10.0,
            self.layout.plot_height() - 125.0,
        );
        for (row, continent) in Continent::KNOWN.iter().enumerate() {
            let row_origin = legend_origin.offset(0.0, row as f64 * LEGEND_ROW_HEIGHT);
            layer.boxes.push(FilledBox {
                position_and_size: PositionAndSize {
                    position: self.layout.to_surface(row_origin),
                    width: LEGEND_SWATCH_SIZE,
                    height: LEGEND_SWATCH_SIZE,
                },
                fill_colour: self.scales.colour.colour(continent),
                border_style: None,
            });
            let mut label = self.text(
                row_origin.offset(-10.0, 10.0),
                continent.to_string(),
                LEGEND_FONT_SIZE,
            );
            label.anchor = TextAnchor::End;
            layer.texts.push(label);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn record(country: &str, continent: Continent, population: u64) -> CountryRecord {
        CountryRecord {
            country: country.to_string(),
            continent,
            income: 1_000.0,
            life_exp: 45.0,
            population,
        }
    }

    fn snapshot(countries: &[&str]) -> YearSnapshot {
        YearSnapshot::from(
            countries
                .iter()
                .map(|country| record(country, Continent::Asia, 1_000_000))
                .collect(),
        )
    }

    #[test]
    fn initialize_draws_static_layer_then_first_year() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        chart.initialize(&mut surface, &snapshot(&["Laos", "Iran"]));
        assert_eq!(surface.calls()[0], SurfaceCall::DrawStaticLayer);
        assert_eq!(surface.created(), vec!["Laos", "Iran"]);
        assert_eq!(surface.time_label(), Some("1800"));
        assert_eq!(chart.time(), Some(TimeIndex::first()));
    }

    #[test]
    fn time_label() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        chart.update(&mut surface, &snapshot(&[]), TimeIndex::new(0));
        assert_eq!(surface.time_label(), Some("1800"));
        chart.update(&mut surface, &snapshot(&[]), TimeIndex::new(214));
        assert_eq!(surface.time_label(), Some("2014"));
    }

    #[test]
    fn update_is_idempotent() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        let year = snapshot(&["Iraq", "Oman", "Qatar"]);
        chart.update(&mut surface, &year, TimeIndex::new(5));
        let first: Vec<SurfaceCall> = surface.drain().collect();
        chart.update(&mut surface, &year, TimeIndex::new(5));
        let second: Vec<SurfaceCall> = surface.drain().collect();

        // The second update only re-targets what is already there
        assert!(second.iter().all(|call| matches!(
            call,
            SurfaceCall::TransitionBubble { .. } | SurfaceCall::SetTimeLabel(_)
        )));
        let transitions = |calls: &[SurfaceCall]| -> Vec<SurfaceCall> {
            calls
                .iter()
                .filter(|call| matches!(call, SurfaceCall::TransitionBubble { .. }))
                .cloned()
                .collect()
        };
        assert_eq!(transitions(&first), transitions(&second));
        assert_eq!(chart.bubble_keys(), vec!["Iraq", "Oman", "Qatar"]);
    }

    #[test]
    fn update_is_idempotent_on_a_retained_scene() {
        let now = Rc::new(Cell::new(0.0));
        let clock = now.clone();
        let mut chart = Chart::default();
        let mut scene = RetainedScene::new(chart.layout(), move || clock.get());
        let year = snapshot(&["Iraq", "Oman", "Qatar"]);

        chart.initialize(&mut scene, &year);
        now.set(1_000.0);
        let once = scene.frame();
        chart.update(&mut scene, &year, TimeIndex::first());
        now.set(2_000.0);
        let twice = scene.frame();

        assert_eq!(once, twice);
        assert_eq!(twice.bubbles.len(), 3);
    }

    #[test]
    fn diff_reuses_removes_and_creates_by_country() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        chart.update(&mut surface, &snapshot(&["Chad", "Mali", "Togo"]), TimeIndex::new(0));
        surface.drain();

        chart.update(&mut surface, &snapshot(&["Mali", "Togo", "Niger"]), TimeIndex::new(1));
        assert_eq!(surface.removed(), vec!["Chad"]);
        assert_eq!(surface.created(), vec!["Niger"]);
        let transitioned: Vec<&str> = surface
            .calls()
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::TransitionBubble { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(transitioned, vec!["Mali", "Togo", "Niger"]);

        // Removal happens before creation
        let remove_at = surface
            .calls()
            .iter()
            .position(|call| matches!(call, SurfaceCall::RemoveBubble(_)));
        let create_at = surface
            .calls()
            .iter()
            .position(|call| matches!(call, SurfaceCall::CreateBubble(_)));
        assert!(remove_at < create_at);
        assert_eq!(chart.bubble_keys(), vec!["Mali", "Togo", "Niger"]);
    }

    #[test]
    fn duplicate_keys_are_drawn_once() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        chart.update(&mut surface, &snapshot(&["Fiji", "Fiji"]), TimeIndex::new(0));
        assert_eq!(surface.created(), vec!["Fiji"]);
        assert_eq!(chart.bubble_count(), 1);
    }

    #[test]
    fn geometry_uses_scales() {
        let chart = Chart::default();
        let smallest = CountryRecord {
            country: "Nauru".to_string(),
            continent: Continent::Australia,
            income: 142.0,
            life_exp: 90.0,
            population: 2_000,
        };
        let geometry = chart.geometry(&smallest);
        assert!((geometry.cx - 100.0).abs() < 1e-9);
        assert!((geometry.cy - 10.0).abs() < 1e-9);
        assert!((geometry.r - 5.0).abs() < 1e-9);

        let largest = CountryRecord {
            country: "China".to_string(),
            continent: Continent::Asia,
            income: 150_000.0,
            life_exp: 0.0,
            population: 1_400_000_000,
        };
        let geometry = chart.geometry(&largest);
        assert!((geometry.cx - 990.0).abs() < 1e-9);
        assert!((geometry.cy - 600.0).abs() < 1e-9);
        assert!((geometry.r - 38.73).abs() < 0.01);
    }

    #[test]
    fn bubble_colour_and_label() {
        let chart = Chart::default();
        let bubble = chart.bubble_out(&record("Ghana", Continent::Africa, 5_000_000));
        assert_eq!(bubble.fill_colour, chart.colours().continent_palette[0]);
        let label = bubble.label.unwrap();
        assert_eq!(label.text, "Ghana");
        assert_eq!(label.position, bubble.geometry.centre());

        let unlabelled = Chart::new(ChartConfig {
            show_labels: false,
            ..ChartConfig::default()
        });
        assert!(
            unlabelled
                .bubble_out(&record("Ghana", Continent::Africa, 5_000_000))
                .label
                .is_none()
        );
    }

    #[test]
    fn tooltip() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        let year = YearSnapshot::from(vec![CountryRecord {
            country: "Brazil".to_string(),
            continent: Continent::SouthAmerica,
            income: 12_345.6,
            life_exp: 72.456,
            population: 190_000_000,
        }]);
        chart.update(&mut surface, &year, TimeIndex::new(0));
        surface.drain();

        chart.hover_over_bubble(&mut surface, Some("Brazil"));
        assert_eq!(
            surface.calls(),
            &[SurfaceCall::ShowTooltip(vec![
                "Country: Brazil".to_string(),
                "Continent: South America".to_string(),
                "Life expectancy: 72.46".to_string(),
                "Income: $12,346".to_string(),
                "Population: 190000000".to_string(),
            ])]
        );

        // Hovering over the same bubble again changes nothing
        chart.hover_over_bubble(&mut surface, Some("Brazil"));
        assert_eq!(surface.calls().len(), 1);

        chart.hover_over_bubble(&mut surface, None);
        assert_eq!(surface.calls().last(), Some(&SurfaceCall::HideTooltip));
        chart.hover_over_bubble(&mut surface, None);
        assert_eq!(surface.calls().len(), 2);

        let events: Vec<ChartInteractionEvent> = chart.drain_interaction_events().collect();
        assert_eq!(
            events,
            vec![ChartInteractionEvent::Hover("Brazil".to_string())]
        );
    }

    #[test]
    fn tooltip_hidden_when_bubble_removed() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        chart.update(&mut surface, &snapshot(&["Cuba", "Peru"]), TimeIndex::new(0));
        chart.hover_over_bubble(&mut surface, Some("Cuba"));
        surface.drain();

        chart.update(&mut surface, &snapshot(&["Peru"]), TimeIndex::new(1));
        assert!(surface.calls().contains(&SurfaceCall::HideTooltip));
        assert_eq!(chart.hovered(), None);
    }

    #[test]
    fn tooltip_follows_the_year() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        chart.update(&mut surface, &snapshot(&["Nepal"]), TimeIndex::new(0));
        chart.hover_over_bubble(&mut surface, Some("Nepal"));
        surface.drain();

        let later = YearSnapshot::from(vec![CountryRecord {
            country: "Nepal".to_string(),
            continent: Continent::Asia,
            income: 2_500.0,
            life_exp: 68.5,
            population: 28_000_000,
        }]);
        chart.update(&mut surface, &later, TimeIndex::new(200));
        let tooltips: Vec<&SurfaceCall> = surface
            .calls()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::ShowTooltip(_)))
            .collect();
        assert_eq!(
            tooltips,
            vec![&SurfaceCall::ShowTooltip(vec![
                "Country: Nepal".to_string(),
                "Continent: Asia".to_string(),
                "Life expectancy: 68.50".to_string(),
                "Income: $2,500".to_string(),
                "Population: 28000000".to_string(),
            ])]
        );
        assert_eq!(chart.hovered(), Some("Nepal"));
    }

    #[test]
    fn clicks() {
        let mut chart = Chart::default();
        let mut surface = RecordingSurface::new();
        chart.update(&mut surface, &snapshot(&["Cuba"]), TimeIndex::new(0));
        chart.click_on_bubble("Cuba");
        chart.click_on_bubble("Atlantis");
        let events: Vec<ChartInteractionEvent> = chart.drain_interaction_events().collect();
        assert_eq!(events, vec![ChartInteractionEvent::Click("Cuba".to_string())]);
        assert_eq!(chart.drain_interaction_events().count(), 0);
    }

    #[test]
    fn static_layer() {
        let chart = Chart::default();
        let layer = chart.static_layer();
        let texts: Vec<&str> = layer.texts.iter().map(|text| text.text.as_str()).collect();
        for expected in ["$400", "$4000", "$40000", "$150000", "0", "90"] {
            assert!(texts.contains(&expected), "missing tick {expected}");
        }
        assert!(texts.contains(&X_AXIS_TITLE));
        assert!(texts.contains(&Y_AXIS_TITLE));
        assert!(texts.contains(&"South America"));

        // One swatch per continent, in palette order, stacked 20 apart
        assert_eq!(layer.boxes.len(), 6);
        assert_eq!(
            layer.boxes[0].position_and_size.position,
            Point::new(980.0, 475.0)
        );
        assert_eq!(
            layer.boxes[5].position_and_size.position,
            Point::new(980.0, 575.0)
        );
        assert_eq!(
            layer.boxes[2].fill_colour,
            chart.colours().continent_palette[2]
        );

        let y_title = layer
            .texts
            .iter()
            .find(|text| text.text == Y_AXIS_TITLE)
            .unwrap();
        assert_eq!(y_title.rotation_degrees, -90.0);
        assert_eq!(y_title.position, Point::new(60.0, 180.0));
    }
}
