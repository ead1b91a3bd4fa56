#![no_std]

extern crate alloc;

pub use error::*;
pub use generator::*;
pub use state::*;
pub use types::*;

pub mod chase;
mod error;
mod generator;
mod state;
pub mod sweeper;
mod types;
