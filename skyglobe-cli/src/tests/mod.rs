//! Shared test harness modules for the Skyglobe CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod countries_unit;
mod helpers;
mod unit;
