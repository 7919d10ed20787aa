use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::{
    command::CommandSet,
    lcd::Lcd,
    sender::SendCommand,
    utils::{format_float, format_int},
};

/// Sent in place of characters outside ASCII, a full rectangle in the A00 character ROM
pub const REPLACEMENT_BYTE: u8 = 0xFF;

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Write a raw byte to DDRAM at cursor position, the cursor then moves by entry mode
    pub fn write_byte(&mut self, byte: u8) {
        self.send(CommandSet::WriteDataToRAM(byte));
    }

    /// In this implementation, only ASCII maps to its own code,
    /// anything else is shown as [`REPLACEMENT_BYTE`]
    pub fn write_char(&mut self, char: char) {
        let out_byte = match char.is_ascii() {
            true => char as u8,
            false => REPLACEMENT_BYTE,
        };

        self.write_byte(out_byte);
    }

    /// Write characters one by one, stop at the first `'\0'`
    pub fn write_string(&mut self, str: &str) {
        str.chars()
            .take_while(|&char| char != '\0')
            .for_each(|char| self.write_char(char));
    }

    #[allow(missing_docs)]
    pub fn write_str_at(&mut self, str: &str, pos: (u8, u8)) {
        self.set_cursor(pos.0, pos.1);
        self.write_string(str);
    }

    /// Write in decimal, like `%d`
    pub fn write_int(&mut self, num: i32) {
        self.write_string(&format_int(num));
    }

    /// Write with 4 decimals, like `%.4f`
    pub fn write_float(&mut self, num: f32) {
        self.write_string(&format_float(num));
    }
}

/// So `write!()` works on a [`Lcd`]
impl<'a, 'b, Sender, Delayer> fmt::Write for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}
