//! Background tasks for Cinedex.
//!
//! This crate provides:
//! - A bounded, cancellable repeating task primitive
//! - The movie generation scheduler built on top of it

pub mod scheduler;
pub mod task;

pub use scheduler::GenerationScheduler;
pub use task::{TaskHandle, spawn_repeating};
