// SPDX-License-Identifier: MIT

//!
//! The playback controller.  This owns everything that changes while the
//! chart is being viewed (the time, the continent filter, whether it's
//! playing) and hands out the snapshot that should currently be drawn.
//!

use crate::{ContinentFilter, Dataset, TimeIndex, YearSnapshot};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The default time between playback steps
pub const DEFAULT_PLAY_INTERVAL: Duration = Duration::from_millis(150);

/// Playback settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Time between steps while playing
    pub interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_PLAY_INTERVAL,
        }
    }
}

/// What should be drawn right now
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub snapshot: YearSnapshot,
    pub time: TimeIndex,
}

/// Owns the dataset and the viewing state
#[derive(Debug, Clone)]
pub struct Controller {
    dataset: Dataset,
    time: TimeIndex,
    filter: ContinentFilter,
    playing: bool,
    config: PlaybackConfig,
}

impl Controller {
    /// Create a controller at the first year, showing all continents, not
    /// playing
    pub fn new(dataset: Dataset, config: PlaybackConfig) -> Self {
        info!("Creating controller");
        Self {
            dataset,
            time: TimeIndex::first(),
            filter: ContinentFilter::All,
            playing: false,
            config,
        }
    }

    /// Get the current time index
    pub fn time(&self) -> TimeIndex {
        self.time
    }

    /// Get the current continent filter
    pub fn filter(&self) -> &ContinentFilter {
        &self.filter
    }

    /// Get the playback settings
    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        debug!("play");
        self.playing = true;
    }

    pub fn stop(&mut self) {
        debug!("stop");
        self.playing = false;
    }

    /// Play if stopped, stop if playing.  Returns whether it's now playing.
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.stop();
        } else {
            self.play();
        }
        self.playing
    }

    /// Go back to the first year.  Playback carries on if it was playing.
    pub fn reset(&mut self) {
        debug!("reset");
        self.time = TimeIndex::first();
    }

    /// Jump to a time index
    pub fn seek(&mut self, time: TimeIndex) {
        debug!("seek to {}", time.year());
        self.time = time;
    }

    /// Jump to a calendar year (clamped to the years in the dataset)
    pub fn seek_year(&mut self, year: i32) {
        self.seek(TimeIndex::from_year(year));
    }

    /// Only show records matching the filter
    pub fn filter_by(&mut self, filter: ContinentFilter) {
        debug!("filter by {filter}");
        self.filter = filter;
    }

    /// Advance one year, wrapping to the first year after the last
    pub fn step(&mut self) -> TimeIndex {
        self.time = self.time.next();
        self.time
    }

    /// The snapshot that should be drawn for the current time and filter
    pub fn current(&self) -> ChartView {
        ChartView {
            snapshot: self.dataset.snapshot(self.time, &self.filter),
            time: self.time,
        }
    }
}

/// Turns elapsed time into whole playback steps.  For frontends that are
/// polled each frame rather than driven by a timer.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
}

impl Ticker {
    /// Create a ticker.  Intervals shorter than a millisecond are raised to a
    /// millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Add elapsed time and return how many steps are now due
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.elapsed += delta;
        let ticks = self.elapsed.as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.elapsed = self
            .elapsed
            .saturating_sub(self.interval.saturating_mul(ticks));
        ticks
    }

    /// Forget any partially elapsed interval
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Continent, CountryRecord, YEAR_COUNT};

    fn dataset() -> Dataset {
        let years = (0..YEAR_COUNT)
            .map(|index| {
                YearSnapshot::from(vec![
                    CountryRecord {
                        country: "Brazil".to_string(),
                        continent: Continent::SouthAmerica,
                        income: 500.0 + index as f64,
                        life_exp: 30.0,
                        population: 10_000_000,
                    },
                    CountryRecord {
                        country: "Egypt".to_string(),
                        continent: Continent::Africa,
                        income: 400.0,
                        life_exp: 28.0 + index as f64 / 10.0,
                        population: 5_000_000,
                    },
                ])
            })
            .collect();
        Dataset::from_snapshots(years).unwrap()
    }

    #[test]
    fn step_wraps() {
        let mut controller = Controller::new(dataset(), PlaybackConfig::default());
        controller.seek(TimeIndex::new(213));
        assert_eq!(controller.step().value(), 214);
        assert_eq!(controller.step().value(), 0);
    }

    #[test]
    fn play_stop_toggle() {
        let mut controller = Controller::new(dataset(), PlaybackConfig::default());
        assert!(!controller.is_playing());
        assert!(controller.toggle_play());
        assert!(controller.is_playing());
        assert!(!controller.toggle_play());
        controller.play();
        controller.stop();
        assert!(!controller.is_playing());
    }

    #[test]
    fn reset_keeps_playing() {
        let mut controller = Controller::new(dataset(), PlaybackConfig::default());
        controller.play();
        controller.seek_year(1950);
        assert_eq!(controller.time().year(), 1950);
        controller.reset();
        assert_eq!(controller.time(), TimeIndex::first());
        assert!(controller.is_playing());
    }

    #[test]
    fn seek_year_clamps() {
        let mut controller = Controller::new(dataset(), PlaybackConfig::default());
        controller.seek_year(i32::MAX);
        assert_eq!(controller.time(), TimeIndex::last());
        controller.seek_year(i32::MIN);
        assert_eq!(controller.time(), TimeIndex::first());
    }

    #[test]
    fn current_applies_filter() {
        let mut controller = Controller::new(dataset(), PlaybackConfig::default());
        controller.seek_year(1810);
        controller.filter_by(ContinentFilter::Only(Continent::Africa));
        let view = controller.current();
        assert_eq!(view.time.value(), 10);
        assert_eq!(view.snapshot.len(), 1);
        assert_eq!(view.snapshot.records()[0].country, "Egypt");
        assert_eq!(view.snapshot.records()[0].life_exp, 29.0);

        controller.filter_by(ContinentFilter::All);
        assert_eq!(controller.current().snapshot.len(), 2);
    }

    #[test]
    fn ticker() {
        let mut ticker = Ticker::new(Duration::from_millis(150));
        assert_eq!(ticker.advance(Duration::from_millis(100)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(100)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(250)), 2);
        ticker.advance(Duration::from_millis(100));
        ticker.reset();
        assert_eq!(ticker.advance(Duration::from_millis(100)), 0);
        assert_eq!(Ticker::new(Duration::ZERO).advance(Duration::from_millis(3)), 3);
    }
}
