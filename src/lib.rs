#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod catalog;
mod common;
mod events;
mod fleet;
mod grid;
mod hunter;
#[cfg(feature = "std")]
mod logging;
mod session;
mod shape;
#[cfg(feature = "std")]
mod view;

pub use board::*;
pub use catalog::*;
pub use common::*;
pub use events::*;
pub use fleet::*;
pub use grid::*;
pub use hunter::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use session::*;
pub use shape::*;
#[cfg(feature = "std")]
pub use view::*;
