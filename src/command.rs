//! Instruction set of the HD44780, and the raw [`Command`] a sender puts on the bus

use crate::utils::BitOps;

/// Every instruction this driver may issue
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommandSet {
    /// Clear DDRAM and return cursor to address 0
    ClearDisplay,
    /// Return cursor (and shifted display) to address 0
    ReturnHome,
    /// Cursor move direction, and whether display shifts on write
    EntryModeSet(MoveDirection, ShiftType),
    /// Display / cursor / blink switches
    DisplayOnOff {
        #[allow(missing_docs)]
        display: State,
        #[allow(missing_docs)]
        cursor: State,
        #[allow(missing_docs)]
        cursor_blink: State,
    },
    /// Move cursor or shift whole display by one cell, without touching DDRAM
    CursorOrDisplayShift(ShiftType, MoveDirection),
    /// Not a command from datasheet.
    ///
    /// It's the upper half of a Function Set, sent as a lone nibble while the controller
    /// may still be in 8 bit mode. `Bit8` gives `0b0011` (the reset nibble),
    /// `Bit4` gives `0b0010` (switch to 4 bit interface).
    HalfFunctionSet(DataWidth),
    /// Line count and font, always with a 4 bit interface
    FunctionSet(LineMode, Font),
    /// Set DDRAM address, only the lower 7 bits are used
    SetDDRAM(u8),
    /// Write a byte to current DDRAM address
    WriteDataToRAM(u8),
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum MoveDirection {
    RightToLeft,
    #[default]
    LeftToRight,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ShiftType {
    #[default]
    CursorOnly,
    CursorAndDisplay,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum State {
    Off,
    #[default]
    On,
}

/// Interface width of the controller
///
/// Only used by [`CommandSet::HalfFunctionSet`], this driver always runs in 4 bit mode.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DataWidth {
    #[default]
    Bit4,
    Bit8,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LineMode {
    OneLine,
    #[default]
    TwoLine,
}

impl LineMode {
    /// Number of display lines
    pub fn line_count(self) -> u8 {
        match self {
            LineMode::OneLine => 1,
            LineMode::TwoLine => 2,
        }
    }
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Font {
    #[default]
    Font5x8,
    Font5x10,
}

/// Which register of the controller a transfer targets, driven on the RS pin
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegisterSelection {
    /// RS low, instruction register
    Command,
    /// RS high, data register
    Data,
}

/// Payload of a transfer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bits {
    /// A single nibble, lower 4 bits used
    Bit4(u8),
    /// A full byte, sent high nibble first
    Bit8(u8),
}

/// A raw transfer: register selection plus payload
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Command {
    rs: RegisterSelection,
    data: Bits,
}

impl Command {
    pub(crate) fn new(rs: RegisterSelection, data: Bits) -> Self {
        Self { rs, data }
    }

    /// Target register of this transfer
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    /// Payload of this transfer
    pub fn get_data(&self) -> Bits {
        self.data
    }

    /// Payload as a plain byte, a nibble payload is returned as is
    pub fn raw_bits(&self) -> u8 {
        match self.data {
            Bits::Bit4(raw_bits) | Bits::Bit8(raw_bits) => raw_bits,
        }
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => {
                let raw_bits: u8 = 0b0000_0001;
                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::ReturnHome => {
                let raw_bits: u8 = 0b0000_0010;
                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::EntryModeSet(dir, st) => {
                let mut raw_bits: u8 = 0b0000_0100;

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(1),
                    MoveDirection::LeftToRight => raw_bits.set_bit(1),
                };

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(0),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(0),
                };

                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits: u8 = 0b0000_1000;

                match display {
                    State::Off => raw_bits.clear_bit(2),
                    State::On => raw_bits.set_bit(2),
                };
                match cursor {
                    State::Off => raw_bits.clear_bit(1),
                    State::On => raw_bits.set_bit(1),
                };
                match cursor_blink {
                    State::Off => raw_bits.clear_bit(0),
                    State::On => raw_bits.set_bit(0),
                };

                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits: u8 = 0b0001_0000;

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(3),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(3),
                };

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(2),
                    MoveDirection::LeftToRight => raw_bits.set_bit(2),
                };

                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::HalfFunctionSet(width) => {
                let mut raw_bits: u8 = 0b0010;

                match width {
                    DataWidth::Bit4 => raw_bits.clear_bit(0),
                    DataWidth::Bit8 => raw_bits.set_bit(0),
                };

                Self::new(RegisterSelection::Command, Bits::Bit4(raw_bits))
            }

            CommandSet::FunctionSet(line, font) => {
                // DL bit (4) stays clear, 4 bit interface
                let mut raw_bits: u8 = 0b0010_0000;

                match line {
                    LineMode::OneLine => raw_bits.clear_bit(3),
                    LineMode::TwoLine => raw_bits.set_bit(3),
                };

                match font {
                    Font::Font5x8 => raw_bits.clear_bit(2),
                    Font::Font5x10 => raw_bits.set_bit(2),
                };

                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::SetDDRAM(addr) => {
                let raw_bits: u8 = 0b1000_0000 | (addr & 0b0111_1111);
                Self::new(RegisterSelection::Command, Bits::Bit8(raw_bits))
            }

            CommandSet::WriteDataToRAM(data) => {
                Self::new(RegisterSelection::Data, Bits::Bit8(data))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(command: CommandSet) -> u8 {
        Command::from(command).raw_bits()
    }

    #[test]
    fn clear_and_home() {
        assert_eq!(raw(CommandSet::ClearDisplay), 0x01);
        assert_eq!(raw(CommandSet::ReturnHome), 0x02);
    }

    #[test]
    fn entry_mode_bits() {
        assert_eq!(
            raw(CommandSet::EntryModeSet(
                MoveDirection::LeftToRight,
                ShiftType::CursorOnly
            )),
            0x06
        );
        assert_eq!(
            raw(CommandSet::EntryModeSet(
                MoveDirection::RightToLeft,
                ShiftType::CursorAndDisplay
            )),
            0x05
        );
    }

    #[test]
    fn display_control_bits() {
        let on_no_cursor = CommandSet::DisplayOnOff {
            display: State::On,
            cursor: State::Off,
            cursor_blink: State::Off,
        };
        assert_eq!(raw(on_no_cursor), 0x0C);

        let all_on = CommandSet::DisplayOnOff {
            display: State::On,
            cursor: State::On,
            cursor_blink: State::On,
        };
        assert_eq!(raw(all_on), 0x0F);
    }

    #[test]
    fn display_shift_bits() {
        assert_eq!(
            raw(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::RightToLeft
            )),
            0x18
        );
        assert_eq!(
            raw(CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::LeftToRight
            )),
            0x1C
        );
    }

    #[test]
    fn half_function_set_is_a_single_nibble() {
        assert_eq!(
            Command::from(CommandSet::HalfFunctionSet(DataWidth::Bit8)).get_data(),
            Bits::Bit4(0x03)
        );
        assert_eq!(
            Command::from(CommandSet::HalfFunctionSet(DataWidth::Bit4)).get_data(),
            Bits::Bit4(0x02)
        );
    }

    #[test]
    fn function_set_bits() {
        assert_eq!(
            raw(CommandSet::FunctionSet(LineMode::TwoLine, Font::Font5x8)),
            0x28
        );
        assert_eq!(
            raw(CommandSet::FunctionSet(LineMode::OneLine, Font::Font5x10)),
            0x24
        );
    }

    #[test]
    fn ddram_address_keeps_lower_seven_bits() {
        assert_eq!(raw(CommandSet::SetDDRAM(0x45)), 0xC5);
        assert_eq!(raw(CommandSet::SetDDRAM(0x90)), 0x90);
    }

    #[test]
    fn data_goes_to_data_register() {
        let command = Command::from(CommandSet::WriteDataToRAM(b'H'));
        assert_eq!(command.get_register_selection(), RegisterSelection::Data);
        assert_eq!(command.get_data(), Bits::Bit8(0x48));
        assert_eq!(
            Command::from(CommandSet::ClearDisplay).get_register_selection(),
            RegisterSelection::Command
        );
    }
}
