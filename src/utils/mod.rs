//! Helpers shared by the UI components.
//!
//! - [`color`] - Palette and the priority/category colour mappings
//! - [`datetime`] - Due-date parsing, clamping and human-readable formatting
//!
//! Both modules are pure: anything time-dependent takes `now` as an argument
//! so callers can feed it from the injected [`Clock`](crate::clock::Clock).

pub mod color;
pub mod datetime;
