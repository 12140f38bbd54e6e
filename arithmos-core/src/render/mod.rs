//! Change-gated screen refresh

pub mod gate;

pub use gate::RenderGate;
