use embedded_hal::delay::DelayNs;
use log::debug;

use crate::{
    command::{CommandSet, DataWidth, Font, LineMode, MoveDirection, ShiftType, State},
    error::ConfigurationError,
    lcd::{Lcd, CLEAR_SETTLE_US},
    sender::SendCommand,
    state::LcdState,
};

/// Wait after power on, datasheet asks for more than 40 ms
pub const POWER_ON_WAIT_MS: u32 = 50;

/// Waits after each of the 3 reset nibbles, datasheet asks for more than 4.1 ms, 4.1 ms and 100 us
pub const RESET_WAITS_US: [u32; 3] = [5_000, 5_000, 150];

/// [`Config`] is the init config of a [`Lcd`]
///
/// Default is 2 line, 5x8 font, display on, no cursor, no blink, left to right, no autoscroll.
#[derive(Default, Clone, Copy, Debug)]
pub struct Config {
    state: LcdState,
}

#[allow(missing_docs)]
impl Config {
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    pub fn set_line_mode(mut self, line: LineMode) -> Self {
        self.state.set_line_mode(line);
        self
    }

    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    pub fn set_font(mut self, font: Font) -> Self {
        self.state.set_font(font);
        self
    }

    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.state.set_display_state(display);
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.state.set_cursor_state(cursor);
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.state.get_cursor_blink()
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.state.set_cursor_blink(blink);
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.state.get_direction()
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.state.set_direction(dir);
        self
    }

    pub fn get_shift_type(&self) -> ShiftType {
        self.state.get_shift_type()
    }

    pub fn set_shift_type(mut self, shift: ShiftType) -> Self {
        self.state.set_shift_type(shift);
        self
    }

    /// 5x10 font only exists in one line mode
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.get_font() == Font::Font5x10 && self.get_line_mode() == LineMode::TwoLine {
            return Err(ConfigurationError::FontUnavailable);
        }
        Ok(())
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, and init LCD hardware
    ///
    /// Config is checked before any pin is touched.
    /// After that nothing can fail, but the sequence only works if the delayer waits at least as
    /// long as asked.
    pub fn new(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let state = config.state;

        // in initialization process, we'd better use "raw command", to strictly follow datasheet

        debug!("LCD init: wait for power on");
        delayer.delay_ms(POWER_ON_WAIT_MS);

        // controller may be in 8 bit mode, or in the middle of a 4 bit transfer,
        // 3 lone "8 bit" nibbles bring it to 8 bit mode from any state.
        // send() drives RS low before the first one.
        debug!("LCD init: reset by instruction");
        for wait_us in RESET_WAITS_US {
            sender.send_and_wait(CommandSet::HalfFunctionSet(DataWidth::Bit8), delayer, wait_us);
        }

        // still a lone nibble, from now on every transfer is a nibble pair
        sender.send(CommandSet::HalfFunctionSet(DataWidth::Bit4), delayer);

        debug!("LCD init: {:?}", state);
        sender.send(state.function_set(), delayer);
        sender.send(state.display_control(), delayer);
        sender.send_and_wait(CommandSet::ClearDisplay, delayer, CLEAR_SETTLE_US);
        sender.send(state.entry_mode(), delayer);

        Ok(Lcd {
            sender,
            delayer,
            state,
        })
    }
}
