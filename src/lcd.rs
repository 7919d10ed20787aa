//! The [`Lcd`] handle, and everything a user can do with a initialized LCD

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, Font, LineMode, MoveDirection, ShiftType, State},
    sender::SendCommand,
    state::LcdState,
};

mod init;
mod text;

pub use init::{Config, POWER_ON_WAIT_MS, RESET_WAITS_US};
pub use text::REPLACEMENT_BYTE;

/// DDRAM address of the first cell of row 0 to 3
pub const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x10, 0x50];

/// Wait after Clear Display and Return Home, in microseconds
///
/// Both run far longer than other instructions, and the controller won't tell when they finish.
pub const CLEAR_SETTLE_US: u32 = 2_000;

/// An initialized LCD
///
/// Created by [`Lcd::new`], which also resets the hardware.
/// Display control and entry mode are kept here, every change re-sends the full command.
pub struct Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    state: LcdState,
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn send(&mut self, command: CommandSet) {
        self.sender.send(command, self.delayer);
    }

    fn send_display_control(&mut self) {
        self.send(self.state.display_control());
    }

    fn send_entry_mode(&mut self) {
        self.send(self.state.entry_mode());
    }

    /// Turn display on, DDRAM is kept while off
    pub fn display_on(&mut self) {
        self.state.set_display_state(State::On);
        self.send_display_control();
    }

    #[allow(missing_docs)]
    pub fn display_off(&mut self) {
        self.state.set_display_state(State::Off);
        self.send_display_control();
    }

    #[allow(missing_docs)]
    pub fn toggle_display(&mut self) {
        match self.get_display_state() {
            State::Off => self.display_on(),
            State::On => self.display_off(),
        }
    }

    #[allow(missing_docs)]
    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    /// Show underline cursor
    pub fn cursor_on(&mut self) {
        self.state.set_cursor_state(State::On);
        self.send_display_control();
    }

    #[allow(missing_docs)]
    pub fn cursor_off(&mut self) {
        self.state.set_cursor_state(State::Off);
        self.send_display_control();
    }

    #[allow(missing_docs)]
    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    /// Blink the cell at cursor position
    pub fn blink_on(&mut self) {
        self.state.set_cursor_blink(State::On);
        self.send_display_control();
    }

    #[allow(missing_docs)]
    pub fn blink_off(&mut self) {
        self.state.set_cursor_blink(State::Off);
        self.send_display_control();
    }

    #[allow(missing_docs)]
    pub fn get_cursor_blink_state(&self) -> State {
        self.state.get_cursor_blink()
    }

    /// Shift the whole display on every write, so the cursor seems to stay still
    ///
    /// Note:
    /// It's visible once text is written beyond the right end of the display window
    pub fn autoscroll_on(&mut self) {
        self.state.set_shift_type(ShiftType::CursorAndDisplay);
        self.send_entry_mode();
    }

    #[allow(missing_docs)]
    pub fn autoscroll_off(&mut self) {
        self.state.set_shift_type(ShiftType::CursorOnly);
        self.send_entry_mode();
    }

    #[allow(missing_docs)]
    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    /// Cursor moves right after each write
    pub fn left_to_right(&mut self) {
        self.state.set_direction(MoveDirection::LeftToRight);
        self.send_entry_mode();
    }

    /// Cursor moves left after each write
    pub fn right_to_left(&mut self) {
        self.state.set_direction(MoveDirection::RightToLeft);
        self.send_entry_mode();
    }

    #[allow(missing_docs)]
    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    /// Shift display window one cell, content moves left
    pub fn shift_left(&mut self) {
        self.send(CommandSet::CursorOrDisplayShift(
            ShiftType::CursorAndDisplay,
            MoveDirection::RightToLeft,
        ));
    }

    /// Shift display window one cell, content moves right
    pub fn shift_right(&mut self) {
        self.send(CommandSet::CursorOrDisplayShift(
            ShiftType::CursorAndDisplay,
            MoveDirection::LeftToRight,
        ));
    }

    /// Clear display, and put cursor at (0, 0)
    pub fn clear(&mut self) {
        self.sender
            .send_and_wait(CommandSet::ClearDisplay, self.delayer, CLEAR_SETTLE_US);
    }

    /// Put cursor at (0, 0), and undo display shift
    pub fn home(&mut self) {
        self.sender
            .send_and_wait(CommandSet::ReturnHome, self.delayer, CLEAR_SETTLE_US);
    }

    /// Move cursor to `col` of `row`
    ///
    /// `row` saturates at the last row of current line mode.
    /// `col` is not checked, the address wraps inside the 7 bit DDRAM address space,
    /// what shows up for a column beyond display width depends on the controller.
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        let last_row = (ROW_OFFSETS.len() as u8 - 1).min(self.get_line_mode().line_count() - 1);
        let row = row.min(last_row);

        self.send(CommandSet::SetDDRAM(
            col.wrapping_add(ROW_OFFSETS[row as usize]),
        ));
    }

    #[allow(missing_docs)]
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    #[allow(missing_docs)]
    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    /// Function Set byte sent at init
    pub fn function_bits(&self) -> u8 {
        self.state.function_bits()
    }

    /// Display Control byte last sent
    pub fn control_bits(&self) -> u8 {
        self.state.control_bits()
    }

    /// Entry Mode Set byte last sent
    pub fn entry_mode_bits(&self) -> u8 {
        self.state.entry_mode_bits()
    }

    #[allow(missing_docs)]
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    #[allow(missing_docs)]
    pub fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us);
    }
}
