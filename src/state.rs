use crate::command::{Command, CommandSet, Font, LineMode, MoveDirection, ShiftType, State};

/// Mirror of the controller registers this driver writes
///
/// The controller has no partial update, so each group is always sent as a whole command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LcdState {
    line: LineMode,
    font: Font,
    display_on: State,
    cursor_on: State,
    cursor_blink: State,
    direction: MoveDirection,
    shift_type: ShiftType,
}

impl Default for LcdState {
    fn default() -> Self {
        Self {
            line: LineMode::TwoLine,
            font: Font::Font5x8,
            display_on: State::On,
            cursor_on: State::Off,
            cursor_blink: State::Off,
            direction: MoveDirection::LeftToRight,
            shift_type: ShiftType::CursorOnly,
        }
    }
}

impl LcdState {
    pub(crate) fn get_line_mode(&self) -> LineMode {
        self.line
    }

    pub(crate) fn set_line_mode(&mut self, line: LineMode) {
        self.line = line;
    }

    pub(crate) fn get_font(&self) -> Font {
        self.font
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub(crate) fn get_display_state(&self) -> State {
        self.display_on
    }

    pub(crate) fn set_display_state(&mut self, display: State) {
        self.display_on = display;
    }

    pub(crate) fn get_cursor_state(&self) -> State {
        self.cursor_on
    }

    pub(crate) fn set_cursor_state(&mut self, cursor: State) {
        self.cursor_on = cursor;
    }

    pub(crate) fn get_cursor_blink(&self) -> State {
        self.cursor_blink
    }

    pub(crate) fn set_cursor_blink(&mut self, blink: State) {
        self.cursor_blink = blink;
    }

    pub(crate) fn get_direction(&self) -> MoveDirection {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, dir: MoveDirection) {
        self.direction = dir;
    }

    pub(crate) fn get_shift_type(&self) -> ShiftType {
        self.shift_type
    }

    pub(crate) fn set_shift_type(&mut self, shift: ShiftType) {
        self.shift_type = shift;
    }

    pub(crate) fn function_set(&self) -> CommandSet {
        CommandSet::FunctionSet(self.line, self.font)
    }

    pub(crate) fn display_control(&self) -> CommandSet {
        CommandSet::DisplayOnOff {
            display: self.display_on,
            cursor: self.cursor_on,
            cursor_blink: self.cursor_blink,
        }
    }

    pub(crate) fn entry_mode(&self) -> CommandSet {
        CommandSet::EntryModeSet(self.direction, self.shift_type)
    }

    pub(crate) fn function_bits(&self) -> u8 {
        Command::from(self.function_set()).raw_bits()
    }

    pub(crate) fn control_bits(&self) -> u8 {
        Command::from(self.display_control()).raw_bits()
    }

    pub(crate) fn entry_mode_bits(&self) -> u8 {
        Command::from(self.entry_mode()).raw_bits()
    }
}
