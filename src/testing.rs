//! Recording fakes for pins and delay, shared by unit tests

use std::{cell::RefCell, convert::Infallible, rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin, PinState},
};

use crate::sender::ParallelSender;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    Rs,
    En,
    D4,
    D5,
    D6,
    D7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Pin(Line, PinState),
    DelayNs(u64),
}

/// One nibble latched by the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Transfer {
    pub(crate) rs: PinState,
    pub(crate) nibble: u8,
}

/// A transfer, or a wait outside of an enable pulse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Transfer(PinState, u8),
    WaitUs(u64),
}

#[derive(Clone, Default)]
pub(crate) struct Recorder {
    log: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub(crate) fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin {
            line,
            log: self.log.clone(),
        }
    }

    pub(crate) fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            log: self.log.clone(),
        }
    }

    pub(crate) fn parallel(&self) -> (ParallelSender<RecordingPin, RecordingPin>, RecordingDelay) {
        let sender = ParallelSender::new_4pin(
            self.pin(Line::Rs),
            self.pin(Line::En),
            self.pin(Line::D4),
            self.pin(Line::D5),
            self.pin(Line::D6),
            self.pin(Line::D7),
        );
        (sender, self.delay())
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub(crate) fn transfers(&self) -> Vec<Transfer> {
        transfers(&self.events())
    }

    /// Transfers paired into bytes, high nibble first
    pub(crate) fn bytes(&self) -> Vec<(PinState, u8)> {
        bytes(&self.transfers())
    }

    pub(crate) fn steps(&self) -> Vec<Step> {
        steps(&self.events())
    }
}

pub(crate) struct RecordingPin {
    line: Line,
    log: Rc<RefCell<Vec<Event>>>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log
            .borrow_mut()
            .push(Event::Pin(self.line, PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log
            .borrow_mut()
            .push(Event::Pin(self.line, PinState::High));
        Ok(())
    }
}

pub(crate) struct RecordingDelay {
    log: Rc<RefCell<Vec<Event>>>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        self.log
            .borrow_mut()
            .push(Event::DelayNs(us as u64 * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log
            .borrow_mut()
            .push(Event::DelayNs(ms as u64 * 1_000_000));
    }
}

/// Replay pin levels, and take a snapshot of RS and D4~D7 on every rising edge of EN
pub(crate) fn transfers(events: &[Event]) -> Vec<Transfer> {
    let mut rs = PinState::Low;
    let mut data = [PinState::Low; 4];
    let mut result = Vec::new();

    for event in events {
        match *event {
            Event::Pin(Line::Rs, level) => rs = level,
            Event::Pin(Line::D4, level) => data[0] = level,
            Event::Pin(Line::D5, level) => data[1] = level,
            Event::Pin(Line::D6, level) => data[2] = level,
            Event::Pin(Line::D7, level) => data[3] = level,
            Event::Pin(Line::En, PinState::High) => {
                let nibble = data
                    .iter()
                    .enumerate()
                    .filter(|(_, level)| **level == PinState::High)
                    .fold(0u8, |acc, (index, _)| acc | (1 << index));
                result.push(Transfer { rs, nibble });
            }
            Event::Pin(Line::En, PinState::Low) | Event::DelayNs(_) => {}
        }
    }

    result
}

pub(crate) fn bytes(transfers: &[Transfer]) -> Vec<(PinState, u8)> {
    assert!(transfers.len() % 2 == 0, "odd number of nibbles");

    transfers
        .chunks(2)
        .map(|pair| {
            assert_eq!(pair[0].rs, pair[1].rs, "RS changed inside a byte");
            (pair[0].rs, (pair[0].nibble << 4) | pair[1].nibble)
        })
        .collect()
}

/// Transfers and the waits between them, delays belonging to an enable pulse are dropped
pub(crate) fn steps(events: &[Event]) -> Vec<Step> {
    let mut result = Vec::new();
    let mut after_enable = false;

    for (event, transfer) in events.iter().zip(transfers_at(events)) {
        match *event {
            Event::Pin(Line::En, _) => {
                if let Some(transfer) = transfer {
                    result.push(Step::Transfer(transfer.rs, transfer.nibble));
                }
                after_enable = true;
            }
            Event::Pin(..) => after_enable = false,
            Event::DelayNs(ns) => {
                if !after_enable {
                    result.push(Step::WaitUs(ns / 1_000));
                }
                after_enable = false;
            }
        }
    }

    result
}

// transfer latched by each event, if any
fn transfers_at(events: &[Event]) -> Vec<Option<Transfer>> {
    let mut latched = transfers(events).into_iter();
    events
        .iter()
        .map(|event| match event {
            Event::Pin(Line::En, PinState::High) => latched.next(),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_delays_are_not_steps() {
        let events = [
            Event::DelayNs(50_000_000),
            Event::Pin(Line::Rs, PinState::Low),
            Event::Pin(Line::D4, PinState::High),
            Event::Pin(Line::D5, PinState::High),
            Event::Pin(Line::D6, PinState::Low),
            Event::Pin(Line::D7, PinState::Low),
            Event::Pin(Line::En, PinState::Low),
            Event::DelayNs(1_000),
            Event::Pin(Line::En, PinState::High),
            Event::DelayNs(1_000),
            Event::Pin(Line::En, PinState::Low),
            Event::DelayNs(100_000),
            Event::DelayNs(5_000_000),
        ];

        assert_eq!(
            steps(&events),
            [
                Step::WaitUs(50_000),
                Step::Transfer(PinState::Low, 0x03),
                Step::WaitUs(5_000),
            ]
        );
    }
}
