//! LCD driver for the counter display

pub mod font;
pub mod pcf8833;

pub use pcf8833::Pcf8833;
