// SPDX-License-Identifier: MIT

//!
//! Events
//!

use serde::Serialize;
use std::fmt::Debug;

/// Interaction events (each holds the country name of the bubble)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChartInteractionEvent {
    Click(String),
    Hover(String),
}
