// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Gapminder chart project*
//!
//! This crate defines the data used across the project (renderer, desktop
//! application): the per-country records, the yearly dataset and its loader,
//! the time index, and the playback controller that decides which year is
//! shown.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid (e.g. a [`TimeIndex`]
//! is always within the years covered by a [`Dataset`]).
//!

mod continent;
mod controller;
mod dataset;
mod record;
mod time;

pub use continent::*;
pub use controller::*;
pub use dataset::*;
pub use record::*;
pub use time::*;
