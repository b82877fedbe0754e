//! Game Module
//!
//! Host-side code built on top of the engine: the demo course and the loop
//! that drives a character controller across it.

pub mod course;

pub use course::{
    CourseConfig, CourseSimulation, HeadlessCursor, InputScript, RunSummary, ScriptAction,
    ScriptEvent, GROUND_LAYER, WALL_LAYER,
};
