//! Real-time clock trait
//!
//! The seam between application logic and chip drivers. Implementations
//! wrap one RTC chip on one bus; the error type is whatever the
//! underlying bus surfaces.

use crate::datetime::DateTime;

/// Trait for battery-backed real-time clocks
///
/// Implementations handle the specific chip (DS1307, DS3231, PCF8563,
/// ...). All operations are blocking bus transactions.
pub trait RealTimeClock {
    /// Error type propagated from the bus
    type Error;

    /// Write a full date and time in one transaction
    fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), Self::Error>;

    /// Read the full date and time
    fn datetime(&mut self) -> Result<DateTime, Self::Error>;

    /// Resume the timekeeping oscillator
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Halt the timekeeping oscillator
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Check whether the oscillator is halted
    fn is_halted(&mut self) -> Result<bool, Self::Error>;
}
