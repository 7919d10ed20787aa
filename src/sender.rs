//! Built-in sender
//! If you want to create a new sender, you will need to implement [`SendCommand`] trait
//!
//! A sender owns the RS, EN and D4~D7 lines. It turns a [`Command`] into two nibble transfers,
//! each one latched by a pulse on EN.
//! There is no RW line, the controller is never read, so the RW pin should be tied to ground.

use embedded_hal::{delay::DelayNs, digital::PinState};
use log::trace;

use crate::{
    command::{Bits, Command, RegisterSelection},
    utils::{BitOps, BitState},
};

mod parallel_sender;
mod port_sender;

pub use parallel_sender::ParallelSender;
pub use port_sender::{DigitalOutput, PortPins, PortSender};

/// EN low time before rising edge, in microseconds
pub const ENABLE_SETUP_US: u32 = 1;
/// EN high time, in microseconds
pub const ENABLE_PULSE_US: u32 = 1;
/// Wait after each falling edge of EN, covers execution time of most instructions
pub const EXECUTION_TIME_US: u32 = 100;

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// Implementors only drive single lines, nibble and byte transfers are provided.
pub trait SendCommand<Delayer: DelayNs> {
    /// Drive RS line
    fn set_register_select(&mut self, level: PinState);

    /// Drive EN line
    fn set_enable(&mut self, level: PinState);

    /// Drive one data line, `index` 0 to 3 map to D4 to D7
    fn set_data_line(&mut self, index: u8, level: PinState);

    /// Put RS to the register the command targets,
    /// then send the payload: a lone nibble, or a byte as high nibble then low nibble
    fn send(&mut self, command: impl Into<Command>, delayer: &mut Delayer) {
        let command = command.into();

        trace!(
            "Sending data: {:08b}, RS: {:?}",
            command.raw_bits(),
            command.get_register_selection()
        );

        self.select_register(command.get_register_selection());

        match command.get_data() {
            Bits::Bit4(raw_bits) => self.write_nibble(raw_bits, delayer),
            Bits::Bit8(raw_bits) => {
                self.write_nibble(raw_bits >> 4, delayer);
                self.write_nibble(raw_bits & 0b1111, delayer);
            }
        }
    }

    /// Send command, then wait for specific duration
    ///
    /// For instructions that take longer than [`EXECUTION_TIME_US`]
    fn send_and_wait(&mut self, command: impl Into<Command>, delayer: &mut Delayer, wait_us: u32) {
        self.send(command, delayer);
        delayer.delay_us(wait_us);
    }

    /// RS low for instruction register, high for data register
    fn select_register(&mut self, rs: RegisterSelection) {
        match rs {
            RegisterSelection::Command => self.set_register_select(PinState::Low),
            RegisterSelection::Data => self.set_register_select(PinState::High),
        }
    }

    /// Put lower 4 bits of `raw_bits` onto D4~D7, and latch them with an EN pulse
    fn write_nibble(&mut self, raw_bits: u8, delayer: &mut Delayer) {
        (0..4).for_each(|index| match raw_bits.check_bit(index) {
            BitState::Set => self.set_data_line(index, PinState::High),
            BitState::Clear => self.set_data_line(index, PinState::Low),
        });

        self.pulse_enable(delayer);
    }

    /// EN low, high, low, the controller latches the bus on the falling edge
    fn pulse_enable(&mut self, delayer: &mut Delayer) {
        self.set_enable(PinState::Low);
        delayer.delay_us(ENABLE_SETUP_US);
        self.set_enable(PinState::High);
        delayer.delay_us(ENABLE_PULSE_US);
        self.set_enable(PinState::Low);
        delayer.delay_us(EXECUTION_TIME_US);
    }
}
