// SPDX-License-Identifier: MIT

//!
//! A surface that draws nothing and instead records what it was asked to do
//!

use crate::{BubbleGeometry, BubbleOut, ChartSurface, StaticLayer, TextOut, Tooltip};
use serde::Serialize;
use std::time::Duration;

/// A single call made on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SurfaceCall {
    DrawStaticLayer,
    CreateBubble(String),
    TransitionBubble {
        key: String,
        geometry: BubbleGeometry,
        duration_ms: u128,
    },
    RemoveBubble(String),
    SetTimeLabel(String),
    ShowTooltip(Vec<String>),
    HideTooltip,
}

/// Records every call made on it, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving none behind
    pub fn drain(&mut self) -> std::vec::Drain<'_, SurfaceCall> {
        self.calls.drain(..)
    }

    /// The keys of every bubble created, in order
    pub fn created(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::CreateBubble(key) => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The keys of every bubble removed, in order
    pub fn removed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::RemoveBubble(key) => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recent time label text
    pub fn time_label(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetTimeLabel(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl ChartSurface for RecordingSurface {
    fn draw_static_layer(&mut self, _layer: &StaticLayer) {
        self.calls.push(SurfaceCall::DrawStaticLayer);
    }

    fn create_bubble(&mut self, bubble: &BubbleOut) {
        self.calls.push(SurfaceCall::CreateBubble(bubble.key.clone()));
    }

    fn transition_bubble(&mut self, bubble: &BubbleOut, duration: Duration) {
        self.calls.push(SurfaceCall::TransitionBubble {
            key: bubble.key.clone(),
            geometry: bubble.geometry,
            duration_ms: duration.as_millis(),
        });
    }

    fn remove_bubble(&mut self, key: &str) {
        self.calls.push(SurfaceCall::RemoveBubble(key.to_string()));
    }

    fn set_time_label(&mut self, label: &TextOut) {
        self.calls.push(SurfaceCall::SetTimeLabel(label.text.clone()));
    }

    fn show_tooltip(&mut self, tooltip: &Tooltip) {
        self.calls.push(SurfaceCall::ShowTooltip(tooltip.lines.clone()));
    }

    fn hide_tooltip(&mut self) {
        self.calls.push(SurfaceCall::HideTooltip);
    }
}
