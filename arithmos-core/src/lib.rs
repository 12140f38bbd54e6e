//! Board-agnostic core logic for the Arithmos counter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Input decoding and rising-edge detection
//! - Step magnitude selection
//! - The bounded counter state machine
//! - The change-gated screen refresh
//! - The text surface trait implemented by display drivers

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod counter;
pub mod input;
pub mod render;
pub mod traits;
