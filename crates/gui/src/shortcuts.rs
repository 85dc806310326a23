// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Keyboard shortcuts
//!

use eframe::egui::{Context, Key, KeyboardShortcut, Modifiers};

/// What a keyboard shortcut asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePlay,
    Reset,
    StepForward,
    StepBack,
}

/// Helpers for handling Gapminder-specific keyboard shortcuts
pub struct GapminderShortcut {}

impl GapminderShortcut {
    /// Consume the shortcut if it was used this frame
    fn consume(ctx: &Context, key: Key) -> bool {
        let shortcut = KeyboardShortcut::new(Modifiers::NONE, key);
        ctx.input_mut(|i| i.consume_shortcut(&shortcut))
    }

    /// Play/stop (Space)
    pub fn toggle_play(ctx: &Context) -> bool {
        let shortcut_used = Self::consume(ctx, Key::Space);
        if shortcut_used {
            debug!("Toggle play shortcut");
        }
        shortcut_used
    }

    /// Back to 1800 (R)
    pub fn reset(ctx: &Context) -> bool {
        let shortcut_used = Self::consume(ctx, Key::R);
        if shortcut_used {
            debug!("Reset shortcut");
        }
        shortcut_used
    }

    /// Next year (Right arrow)
    pub fn step_forward(ctx: &Context) -> bool {
        Self::consume(ctx, Key::ArrowRight)
    }

    /// Previous year (Left arrow)
    pub fn step_back(ctx: &Context) -> bool {
        Self::consume(ctx, Key::ArrowLeft)
    }
}

/// Check for use of a global shortcut
pub fn global_shortcuts(ctx: &Context) -> Option<ShortcutAction> {
    if GapminderShortcut::toggle_play(ctx) {
        return Some(ShortcutAction::TogglePlay);
    }
    if GapminderShortcut::reset(ctx) {
        return Some(ShortcutAction::Reset);
    }
    if GapminderShortcut::step_forward(ctx) {
        return Some(ShortcutAction::StepForward);
    }
    if GapminderShortcut::step_back(ctx) {
        return Some(ShortcutAction::StepBack);
    }
    None
}
