//! Interactive image components for the reveal UI layer.
//!
//! # Usage
//!
//! Components here are headless: they consume pointer events and layout
//! measurements from a host through [`reveal_ui`] and hand back plain render
//! descriptions that any drawing layer (DOM, canvas, immediate-mode GUI) can
//! consume.
//!
//! ```
//! use reveal_components::comparison_slider::{ComparisonSliderArgs, ComparisonSliderController};
//! use reveal_ui::Document;
//!
//! let args = ComparisonSliderArgs::new("before.jpg", "after.jpg").initial_position(25.0);
//! let controller = ComparisonSliderController::new(&args, Document::new());
//! assert_eq!(controller.position(), 25.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod comparison_slider;

#[cfg(test)]
mod test;
