// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Gapminder project*
//!
//! This library crate provides the GUI parts of the GUI application.  It is
//! used to build the Gapminder native GUI application.
//!

mod app;
mod consts;
mod shortcuts;

pub use app::GapminderApp;
pub use consts::{DEFAULT_WINDOW_SIZE, WindowSize};

#[macro_use]
extern crate log;
