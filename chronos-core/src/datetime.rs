//! Calendar date and wall-clock time as one record
//!
//! The chip writes all seven time registers in a single auto-increment
//! transaction, so the record requires all seven fields; there is no
//! partial form.

use crate::bcd::{bcd_to_binary, binary_to_bcd};
use crate::field::TimeField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A full date and time, as the chip stores it.
///
/// Values outside a field's range are wrapped by the same modulus the
/// single-field setters use when the record is encoded for the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    /// Full year, 2000-2099
    pub year: u16,
    /// Month 1-12
    pub month: u8,
    /// Day of month 1-31
    pub day: u8,
    /// Day of week 1-7
    pub weekday: u8,
    /// Hour 0-23
    pub hour: u8,
    /// Minute 0-59
    pub minute: u8,
    /// Second 0-59
    pub second: u8,
}

impl DateTime {
    /// Encode into the chip's register layout, seconds first.
    ///
    /// Each field is modulus-wrapped then BCD-encoded, exactly as the
    /// single-field setters do.
    pub fn to_registers(&self) -> [u8; 7] {
        [
            binary_to_bcd(TimeField::Second.wrap(self.second as u16)),
            binary_to_bcd(TimeField::Minute.wrap(self.minute as u16)),
            binary_to_bcd(TimeField::Hour.wrap(self.hour as u16)),
            binary_to_bcd(TimeField::Weekday.wrap(self.weekday as u16)),
            binary_to_bcd(TimeField::Day.wrap(self.day as u16)),
            binary_to_bcd(TimeField::Month.wrap(self.month as u16)),
            binary_to_bcd(TimeField::Year.wrap(self.year)),
        ]
    }

    /// Decode from the chip's register layout, clamping each field into
    /// its reportable range.
    pub fn from_registers(regs: &[u8; 7]) -> Self {
        let field = |f: TimeField| f.clamp(bcd_to_binary(regs[f.register() as usize]));
        Self {
            year: field(TimeField::Year),
            month: field(TimeField::Month) as u8,
            day: field(TimeField::Day) as u8,
            weekday: field(TimeField::Weekday) as u8,
            hour: field(TimeField::Hour) as u8,
            minute: field(TimeField::Minute) as u8,
            second: field(TimeField::Second) as u8,
        }
    }
}
