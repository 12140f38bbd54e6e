//! Arithmos - Joystick Counter Firmware
//!
//! Main firmware binary for RP2040-based counter boards. Reads a four-way
//! joystick and two buttons, keeps a bounded counter, and refreshes a
//! PCF8833 LCD only when the value changes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use arithmos_core::counter::CounterMachine;
use arithmos_core::input::EdgeSet;
use arithmos_core::render::RenderGate;
use arithmos_core::traits::display::Color;

use crate::input::InputSampler;
use crate::lcd::Pcf8833;

mod input;
mod lcd;

/// Tick interval in milliseconds - also the de facto debounce window
const TICK_INTERVAL_MS: u64 = 100;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Arithmos firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Joystick and buttons, active low with internal pull-ups
    let sampler = InputSampler::new(
        Input::new(p.PIN_10, Pull::Up), // up
        Input::new(p.PIN_11, Pull::Up), // down
        Input::new(p.PIN_12, Pull::Up), // left
        Input::new(p.PIN_13, Pull::Up), // right
        Input::new(p.PIN_14, Pull::Up), // SW1
        Input::new(p.PIN_15, Pull::Up), // SW2
    );

    // LCD control lines
    let mut lcd = Pcf8833::new(
        Output::new(p.PIN_17, Level::High), // chip select
        Output::new(p.PIN_18, Level::Low),  // clock
        Output::new(p.PIN_19, Level::Low),  // data
        Output::new(p.PIN_20, Level::High), // reset
    );
    let mut backlight = Output::new(p.PIN_21, Level::Low);

    match lcd.init().and_then(|_| lcd.clear(Color::Black)) {
        Ok(()) => info!("LCD initialized"),
        Err(e) => warn!("LCD init failed: {}", e),
    }
    backlight.set_high();

    let mut machine = CounterMachine::new();
    let mut gate = RenderGate::new();

    // Seed the previous sample so a direction held at boot does not fire
    let mut previous = sampler.directions();

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        ticker.next().await;

        let current = sampler.directions();
        let edges = EdgeSet::rising(previous, current);
        let modifiers = sampler.modifiers();

        let value = machine.tick(modifiers, edges);
        match gate.refresh(value, &mut lcd) {
            Ok(true) => debug!("counter = {}", value),
            Ok(false) => {}
            Err(e) => warn!("display refresh failed: {}", e),
        }

        previous = current;
    }
}
