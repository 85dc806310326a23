// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use crate::colour::Colour;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub background: Colour,
    pub text_colour: Colour,
}

/// Every colour the chart uses.  The continent palette is assigned in legend
/// order; continents outside the legend get `overflow`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartColours {
    pub continent_palette: [Colour; 6],
    pub overflow: Colour,
    pub axis: LineStyle,
    pub text: Colour,
    pub time_label: Colour,
    pub bubble_label: Colour,
    pub tooltip: TooltipStyle,
}

impl Default for ChartColours {
    fn default() -> Self {
        Self {
            continent_palette: [
                Colour::from_rgb(0x59, 0xa8, 0x82),
                Colour::from_rgb(0x7b, 0x47, 0xff),
                Colour::from_rgb(0x2b, 0xa0, 0xff),
                Colour::from_rgb(0xfc, 0xda, 0x4e),
                Colour::from_rgb(0xff, 0xa1, 0x26),
                Colour::from_rgb(0x1f, 0x2a, 0xff),
            ],
            overflow: Colour::from_rgb(0x99, 0x99, 0x99),
            axis: LineStyle {
                colour: Colour::from_rgb(0, 0, 0),
                thickness: 1.0,
            },
            text: Colour::from_rgb(0, 0, 0),
            time_label: Colour::from_rgb(0xa0, 0xa0, 0xa0),
            bubble_label: Colour::from_rgb(0x33, 0x33, 0x33),
            tooltip: TooltipStyle {
                background: Colour::from_rgb(0x22, 0x22, 0x22),
                text_colour: Colour::from_rgb(0xff, 0xff, 0xff),
            },
        }
    }
}
