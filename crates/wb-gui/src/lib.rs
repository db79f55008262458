//! Route viewer window for Westbound.
//!
//! The `westbound-route` binary draws the landmark route and a numbered
//! legend of the choices made. Layout lives in [`scene`] so it can be tested
//! without opening a window.

pub mod scene;
pub mod theme;
