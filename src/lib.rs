//! Motion and collision core for a side-scrolling "flappy" arcade game.
//!
//! Everything in this library is pure game logic. Terminal I/O lives in the
//! binary (`display.rs` and `main.rs`).

pub mod bird;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod pipe;
pub mod timer;
