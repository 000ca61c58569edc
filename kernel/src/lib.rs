//! BaseOS kernel library: display backends, compositor and menu UI
#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod drivers;
pub mod gfx;
pub mod power;
pub mod ui;
