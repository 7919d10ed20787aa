//! Errors detected before any pin is driven

use thiserror::Error;

/// An invalid driver configuration
///
/// Once the hardware is initialized nothing is reported back, the controller has no status path
/// this driver reads. These are the only errors the crate produces.
#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum ConfigurationError {
    /// Two bus lines were assigned the same pin
    #[error("pin of line {second} is already used by line {first}")]
    DuplicatePin {
        /// Line that claimed the pin first
        first: &'static str,
        /// Line that claimed it again
        second: &'static str,
    },
    /// 5x10 font only exists in one line mode
    #[error("5x10 font is not available in two line mode")]
    FontUnavailable,
}
