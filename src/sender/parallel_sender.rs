use embedded_hal::{
    delay::DelayNs,
    digital::{Error, OutputPin, PinState},
};
use log::warn;

use super::SendCommand;

/// A sender that drives every line through its own [`OutputPin`]
///
/// Pins are moved in, so one pin can't be wired to two lines.
pub struct ParallelSender<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin,
{
    rs_pin: ControlPin,
    en_pin: ControlPin,
    db_pins: [DBPin; 4],
}

impl<ControlPin, DBPin> ParallelSender<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin,
{
    /// Create a 4 pin mode sender, RW pin of LCD should be tied to ground
    pub fn new_4pin(
        rs: ControlPin,
        en: ControlPin,
        db4: DBPin,
        db5: DBPin,
        db6: DBPin,
        db7: DBPin,
    ) -> Self {
        Self {
            rs_pin: rs,
            en_pin: en,
            db_pins: [db4, db5, db6, db7],
        }
    }

    /// Give the pins back, in the order of [`ParallelSender::new_4pin`]
    pub fn release(self) -> (ControlPin, ControlPin, [DBPin; 4]) {
        (self.rs_pin, self.en_pin, self.db_pins)
    }
}

// there is no way to report a failed write to the caller, a transfer is fire-and-forget
fn drive<P: OutputPin>(pin: &mut P, level: PinState, line: &str) {
    if let Err(e) = pin.set_state(level) {
        warn!("failed to drive {} {:?}: {:?}", line, level, e.kind());
    }
}

impl<ControlPin, DBPin, Delayer> SendCommand<Delayer> for ParallelSender<ControlPin, DBPin>
where
    ControlPin: OutputPin,
    DBPin: OutputPin,
    Delayer: DelayNs,
{
    fn set_register_select(&mut self, level: PinState) {
        drive(&mut self.rs_pin, level, "RS");
    }

    fn set_enable(&mut self, level: PinState) {
        drive(&mut self.en_pin, level, "EN");
    }

    fn set_data_line(&mut self, index: u8, level: PinState) {
        const NAMES: [&str; 4] = ["D4", "D5", "D6", "D7"];

        let index = index as usize;
        assert!(index < 4, "data line index out of range");
        drive(&mut self.db_pins[index], level, NAMES[index]);
    }
}
