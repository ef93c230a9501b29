//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - Reaper: removes expired cache entries at a fixed interval

mod reaper;

pub use reaper::spawn_reaper_task;
