//! Time register map and value bound tables
//!
//! The DS1307 keeps its seven time fields in consecutive registers
//! starting at offset 0. The ordering below is the chip's wire layout,
//! not anything semantic.
//!
//! Two bound tables live here:
//!
//! - [`TimeField::wrap`] is applied before a write and is a plain
//!   modulus, so out-of-range input wraps instead of being rejected
//!   (month 13 wraps to 0).
//! - [`TimeField::clamp`] is applied after a read and pins the decoded
//!   value into the field's reportable range, defending against unset or
//!   corrupted registers at the cost of misreporting them as the nearest
//!   boundary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the chip's seven time registers.
///
/// Discriminants are the register offsets on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TimeField {
    /// Seconds 0-59; bit 7 of this register is the oscillator-halt bit
    Second = 0,
    /// Minutes 0-59
    Minute = 1,
    /// Hours 0-23 (24-hour mode)
    Hour = 2,
    /// Day of week 1-7
    Weekday = 3,
    /// Day of month 1-31
    Day = 4,
    /// Month 1-12
    Month = 5,
    /// Year 0-99, reported as 2000-2099
    Year = 6,
}

impl TimeField {
    /// Register offset of this field on the wire
    pub const fn register(self) -> u8 {
        self as u8
    }

    /// Wraparound modulus applied to a value before it is encoded for a
    /// write.
    ///
    /// This is a wraparound, not a range check: `Month.wrap(13)` is 0,
    /// which no real month maps to. The read-side [`clamp`](Self::clamp)
    /// then reports such a register as the nearest in-range value.
    pub fn wrap(self, value: u16) -> u8 {
        let modulus = match self {
            TimeField::Second | TimeField::Minute => 60,
            TimeField::Hour => 24,
            TimeField::Weekday => 8,
            TimeField::Day => 32,
            TimeField::Month => 13,
            TimeField::Year => 100,
        };
        (value % modulus) as u8
    }

    /// Clamp a decoded register value into this field's reportable range.
    ///
    /// Years are shifted into 2000-2099; every other field reports in its
    /// natural range. Lossy for out-of-range raw values.
    pub fn clamp(self, decoded: u8) -> u16 {
        match self {
            TimeField::Second | TimeField::Minute => decoded.min(59) as u16,
            TimeField::Hour => decoded.min(23) as u16,
            TimeField::Weekday => decoded.clamp(1, 7) as u16,
            TimeField::Day => decoded.clamp(1, 31) as u16,
            TimeField::Month => decoded.clamp(1, 12) as u16,
            TimeField::Year => decoded.min(99) as u16 + 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_offsets_match_wire_layout() {
        assert_eq!(TimeField::Second.register(), 0);
        assert_eq!(TimeField::Minute.register(), 1);
        assert_eq!(TimeField::Hour.register(), 2);
        assert_eq!(TimeField::Weekday.register(), 3);
        assert_eq!(TimeField::Day.register(), 4);
        assert_eq!(TimeField::Month.register(), 5);
        assert_eq!(TimeField::Year.register(), 6);
    }

    #[test]
    fn test_wrap_moduli() {
        assert_eq!(TimeField::Second.wrap(75), 15);
        assert_eq!(TimeField::Minute.wrap(60), 0);
        assert_eq!(TimeField::Hour.wrap(30), 6);
        assert_eq!(TimeField::Weekday.wrap(8), 0);
        assert_eq!(TimeField::Day.wrap(32), 0);
        assert_eq!(TimeField::Month.wrap(13), 0);
        assert_eq!(TimeField::Year.wrap(2024), 24);
    }

    #[test]
    fn test_wrap_passes_in_range_values_through() {
        assert_eq!(TimeField::Second.wrap(59), 59);
        assert_eq!(TimeField::Hour.wrap(23), 23);
        assert_eq!(TimeField::Weekday.wrap(7), 7);
        assert_eq!(TimeField::Day.wrap(31), 31);
        assert_eq!(TimeField::Month.wrap(12), 12);
        assert_eq!(TimeField::Year.wrap(99), 99);
    }

    #[test]
    fn test_clamp_upper_bounds() {
        assert_eq!(TimeField::Second.clamp(165), 59);
        assert_eq!(TimeField::Minute.clamp(60), 59);
        assert_eq!(TimeField::Hour.clamp(24), 23);
        assert_eq!(TimeField::Weekday.clamp(8), 7);
        assert_eq!(TimeField::Day.clamp(32), 31);
        assert_eq!(TimeField::Month.clamp(13), 12);
        assert_eq!(TimeField::Year.clamp(165), 2099);
    }

    #[test]
    fn test_clamp_lower_bounds() {
        // Calendar fields are 1-based on the chip; a zeroed register
        // reports as the lower bound
        assert_eq!(TimeField::Weekday.clamp(0), 1);
        assert_eq!(TimeField::Day.clamp(0), 1);
        assert_eq!(TimeField::Month.clamp(0), 1);
        assert_eq!(TimeField::Second.clamp(0), 0);
        assert_eq!(TimeField::Hour.clamp(0), 0);
        assert_eq!(TimeField::Year.clamp(0), 2000);
    }

    #[test]
    fn test_clamp_passes_valid_values_through() {
        assert_eq!(TimeField::Second.clamp(42), 42);
        assert_eq!(TimeField::Hour.clamp(14), 14);
        assert_eq!(TimeField::Weekday.clamp(5), 5);
        assert_eq!(TimeField::Day.clamp(15), 15);
        assert_eq!(TimeField::Month.clamp(3), 3);
        assert_eq!(TimeField::Year.clamp(24), 2024);
    }
}
