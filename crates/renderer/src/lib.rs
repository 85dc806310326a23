// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Gapminder project*
//!
//! This crate draws the Gapminder bubble chart: one bubble per country,
//! placed by income (x, log scale) and life expectancy (y), sized by
//! population, and coloured by continent.  It can be compiled for native use
//! as well as to WASM for use in the browser.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Mapping records onto the drawing surface (scales & layout)
//! - Working out which bubbles to create, move, and remove when the year
//!   changes
//! - Tooltips and handling and emitting interaction events
//! - Animating bubbles between years
//!
//! The rest of the crate holds code for the frontends:
//!
//! - HTML Canvas for browser rendering
//! - `egui` for native desktop rendering
//!
//! ## Usage
//!
//! To use in a native `egui` desktop application the crate can simply be
//! included like any other crate.
//!
//! To use in a browser one can use the following to compile to WASM:
//!
//! ```sh
//! wasm-pack build --target web
//! ```
//!

extern crate console_error_panic_hook;

pub mod colour;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use engine::*;
pub use frontends::desktop_egui::GapminderRendererEgui;
pub use frontends::html_canvas::GapminderHtmlCanvas;
