//! Common tools

use core::fmt::Write;

use heapless::String;

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(PartialEq)]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

/// Simple bit ops
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> BitState;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        assert!(pos <= 7, "bit offset larger than 7");
        *self |= 1u8 << pos;
        *self
    }

    fn clear_bit(&mut self, pos: u8) -> Self {
        assert!(pos <= 7, "bit offset larger than 7");
        *self &= !(1u8 << pos);
        *self
    }

    fn check_bit(&self, pos: u8) -> BitState {
        assert!(pos <= 7, "bit offset larger than 7");

        match (*self >> pos) & 1 == 1 {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }
}

/// Capacity of the text buffer used by [`format_int`].
///
/// `i32::MIN` is the longest output: a sign and 10 digits.
pub const INT_TEXT_CAPACITY: usize = 11;

/// Capacity of the text buffer used by [`format_float`].
///
/// `-f32::MAX` is the longest output: a sign, 39 integer digits, a point and 4 decimals (45).
/// NaN and infinities print as `NaN`, `inf` and `-inf`.
pub const FLOAT_TEXT_CAPACITY: usize = 48;

/// Format an integer in decimal, like `%d`
pub fn format_int(num: i32) -> String<INT_TEXT_CAPACITY> {
    let mut text = String::new();
    // can't overflow, see INT_TEXT_CAPACITY
    if write!(text, "{}", num).is_err() {
        log::warn!("integer text truncated to \"{}\"", text.as_str());
    }
    text
}

/// Format a float with 4 decimals, like `%.4f`
pub fn format_float(num: f32) -> String<FLOAT_TEXT_CAPACITY> {
    let mut text = String::new();
    // can't overflow, see FLOAT_TEXT_CAPACITY
    if write!(text, "{:.4}", num).is_err() {
        log::warn!("float text truncated to \"{}\"", text.as_str());
    }
    text
}
