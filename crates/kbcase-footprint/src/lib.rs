//! Holder footprints for the controller board and the audio jack.
//!
//! Footprints are drawn with their mounting edge on `y = 0` (the plate edge)
//! and the board hanging below it. Vertical positions depend on the wall
//! thickness and plate gap so the holders follow config changes.

pub mod promicro;
pub mod trrs;

pub use promicro::{promicro_holder, promicro_rects, ControllerFootprint};
pub use trrs::{trrs_holder, trrs_rect, JackFootprint};
