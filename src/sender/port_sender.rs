use core::fmt::Debug;

use embedded_hal::{delay::DelayNs, digital::PinState};

use super::SendCommand;
use crate::error::ConfigurationError;

/// A GPIO port that drives its lines by pin identifier
///
/// This is the shape of most vendor SDKs (`gpio_pin_write(pin_no, value)`),
/// a write is assumed to always succeed.
pub trait DigitalOutput {
    /// Pin identifier, usually a pin number
    type Pin: Copy + PartialEq + Debug;

    /// Drive the named line
    fn set_pin(&mut self, pin: Self::Pin, level: PinState);
}

/// Pin identifiers of every line an LCD in 4 pin mode needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortPins<Pin> {
    #[allow(missing_docs)]
    pub rs: Pin,
    #[allow(missing_docs)]
    pub en: Pin,
    #[allow(missing_docs)]
    pub d4: Pin,
    #[allow(missing_docs)]
    pub d5: Pin,
    #[allow(missing_docs)]
    pub d6: Pin,
    #[allow(missing_docs)]
    pub d7: Pin,
}

impl<Pin: Copy + PartialEq> PortPins<Pin> {
    fn named(&self) -> [(&'static str, Pin); 6] {
        [
            ("RS", self.rs),
            ("EN", self.en),
            ("D4", self.d4),
            ("D5", self.d5),
            ("D6", self.d6),
            ("D7", self.d7),
        ]
    }

    /// Check every line got its own pin
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let named = self.named();

        for (index, (second, pin)) in named.iter().enumerate() {
            if let Some((first, _)) = named[..index].iter().find(|(_, other)| other == pin) {
                return Err(ConfigurationError::DuplicatePin {
                    first: *first,
                    second: *second,
                });
            }
        }

        Ok(())
    }
}

/// A sender on top of a [`DigitalOutput`] port
pub struct PortSender<Port: DigitalOutput> {
    port: Port,
    pins: PortPins<Port::Pin>,
}

impl<Port: DigitalOutput> PortSender<Port> {
    /// Record pin assignment, fails if two lines share one pin
    pub fn new(port: Port, pins: PortPins<Port::Pin>) -> Result<Self, ConfigurationError> {
        pins.validate()?;
        log::debug!("LCD pins: {:?}", pins);
        Ok(Self { port, pins })
    }

    /// Pin assignment of this sender
    pub fn pins(&self) -> &PortPins<Port::Pin> {
        &self.pins
    }

    /// Give the port back
    pub fn release(self) -> Port {
        self.port
    }
}

impl<Port, Delayer> SendCommand<Delayer> for PortSender<Port>
where
    Port: DigitalOutput,
    Delayer: DelayNs,
{
    fn set_register_select(&mut self, level: PinState) {
        self.port.set_pin(self.pins.rs, level);
    }

    fn set_enable(&mut self, level: PinState) {
        self.port.set_pin(self.pins.en, level);
    }

    fn set_data_line(&mut self, index: u8, level: PinState) {
        let pin = match index {
            0 => self.pins.d4,
            1 => self.pins.d5,
            2 => self.pins.d6,
            3 => self.pins.d7,
            _ => panic!("data line index out of range"),
        };
        self.port.set_pin(pin, level);
    }
}
