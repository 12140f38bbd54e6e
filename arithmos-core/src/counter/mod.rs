//! Bounded counter state machine and step selection

pub mod machine;
pub mod step;

pub use machine::{CounterMachine, HOLD_RESET_TICKS};
pub use step::{StepAction, CNT_MAX, CNT_MID, CNT_MIN};
