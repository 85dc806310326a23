// SPDX-License-Identifier: MIT

//!
//! Scales map data values (income, life expectancy, population, continent)
//! onto the drawing surface (x, y, radius, colour).  Domains are fixed so
//! that every year is drawn against the same axes.
//!

use crate::{ChartColours, ChartLayout, colour::Colour};
use gapminder_core::Continent;
use std::f64::consts::PI;

/// Lower and upper income (x axis)
pub const INCOME_DOMAIN: [f64; 2] = [142.0, 150_000.0];

/// Lower and upper life expectancy (y axis)
pub const LIFE_EXP_DOMAIN: [f64; 2] = [0.0, 90.0];

/// Lower and upper population (bubble area)
pub const POPULATION_DOMAIN: [f64; 2] = [2_000.0, 1_400_000_000.0];

/// Smallest and largest bubble area
pub const AREA_RANGE: [f64; 2] = [25.0 * PI, 1_500.0 * PI];

/// A continuous linear mapping from a domain to a range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
    clamp: bool,
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// The same scale, but with input values clamped to the domain
    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a domain value onto the range
    pub fn scale(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let mut t = (value - d0) / (d1 - d0);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` evenly spaced, human friendly values (multiples of 1,
    /// 2, or 5 times a power of ten) covering the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let start = self.domain[0].min(self.domain[1]);
        let stop = self.domain[0].max(self.domain[1]);
        if count == 0 || start == stop {
            return vec![start];
        }
        let step = tick_step(start, stop, count);
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// The tick spacing used by [`LinearScale::ticks`]
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw_step = (stop - start) / count as f64;
    let mut step = 10f64.powf(raw_step.log10().floor());
    let error = raw_step / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}

/// A logarithmic mapping.  Domain values must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    base: f64,
    domain: [f64; 2],
    range: [f64; 2],
}

impl LogScale {
    pub fn new(base: f64, domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            base,
            domain,
            range,
        }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let log = |v: f64| v.log(self.base);
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = (log(value) - log(d0)) / (log(d1) - log(d0));
        r0 + t * (r1 - r0)
    }
}

/// Maps population onto bubble area linearly, and so onto radius via the
/// square root.  Clamped, so populations outside the domain get the smallest
/// or largest bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusAreaScale {
    area: LinearScale,
}

impl RadiusAreaScale {
    pub fn new(domain: [f64; 2], area_range: [f64; 2]) -> Self {
        Self {
            area: LinearScale::new(domain, area_range).clamped(),
        }
    }

    /// The bubble's area for the population
    pub fn area(&self, population: f64) -> f64 {
        self.area.scale(population)
    }

    /// The bubble's radius for the population
    pub fn radius(&self, population: f64) -> f64 {
        (self.area(population) / PI).sqrt()
    }
}

/// Assigns each known continent a palette colour in legend order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinentColourScale {
    palette: [Colour; 6],
    overflow: Colour,
}

impl ContinentColourScale {
    pub fn new(palette: [Colour; 6], overflow: Colour) -> Self {
        Self { palette, overflow }
    }

    pub fn colour(&self, continent: &Continent) -> Colour {
        continent
            .legend_index()
            .and_then(|index| self.palette.get(index).copied())
            .unwrap_or(self.overflow)
    }
}

/// All scales used by the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    /// Income onto x (relative to the plot area)
    pub x: LogScale,

    /// Life expectancy onto y (relative to the plot area, `0` at the bottom)
    pub y: LinearScale,

    pub radius: RadiusAreaScale,
    pub colour: ContinentColourScale,
}

impl ChartScales {
    pub fn new(layout: &ChartLayout, colours: &ChartColours) -> Self {
        Self {
            x: LogScale::new(10.0, INCOME_DOMAIN, [0.0, layout.plot_width()]),
            y: LinearScale::new(LIFE_EXP_DOMAIN, [layout.plot_height(), 0.0]),
            radius: RadiusAreaScale::new(POPULATION_DOMAIN, AREA_RANGE),
            colour: ContinentColourScale::new(colours.continent_palette, colours.overflow),
        }
    }
}
