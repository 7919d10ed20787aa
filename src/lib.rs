/*!
# LCD 1602 Driver, 4 pin mode

Drives a HD44780 (and compatible) character LCD through 6 GPIO lines: RS, EN and D4~D7.
The RW pin should be tied to ground, this driver never reads from LCD,
every instruction is followed by a fixed wait that covers its worst case execution time.

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include 2 senders:
    * one [`embedded_hal::digital::OutputPin`] per line [`sender::ParallelSender`]
    * a port that writes pins by number [`sender::PortSender`]

    You can choose either of it, or you can use any sender implemented [`sender::SendCommand`].
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] to create a [`lcd::Lcd`], and initialize LCD1602 hardware
<br/>
<br/>
3. use any methods provide by [`lcd::Lcd`] to control LCD1602

All waits rely on the delayer passed in, if it returns early, LCD may show garbage.
Transfers are traced with the [`log`] crate.
*/

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod lcd;
pub mod sender;
mod state;
pub mod utils;

#[cfg(test)]
mod testing;

pub use error::ConfigurationError;
