//! DS1307 real-time clock driver
//!
//! Driver for the DS1307 64x8 serial RTC via I2C. The chip keeps seconds
//! through year in seven BCD registers at offsets 0-6 and auto-increments
//! its register pointer during multi-byte access, so a full date-time
//! goes out in a single 8-byte transaction.
//!
//! Bit 7 of the SECONDS register is the clock-halt bit: while set, the
//! oscillator is stopped and the register file is preserved from the
//! backup battery.

use chronos_core::bcd::{bcd_to_binary, binary_to_bcd};
use chronos_core::{DateTime, RealTimeClock, TimeField};
use chronos_hal::I2cBus;

/// Factory-fixed 7-bit I2C address of the DS1307
pub const DS1307_ADDRESS: u8 = 0x68;

/// Oscillator-halt bit in the SECONDS register
const CLOCK_HALT: u8 = 0x80;

/// DS1307 driver
///
/// Owns its bus handle; every operation is a blocking transaction and
/// bus errors propagate unmodified.
pub struct Ds1307<BUS> {
    bus: BUS,
    address: u8,
}

impl<BUS> Ds1307<BUS>
where
    BUS: I2cBus,
{
    /// Create a driver at the chip's factory address
    pub fn new(bus: BUS) -> Self {
        Self::with_address(bus, DS1307_ADDRESS)
    }

    /// Create a driver at a non-standard address, e.g. behind an
    /// address-translating bus mux
    pub fn with_address(bus: BUS, address: u8) -> Self {
        Self { bus, address }
    }

    /// Destroy the driver, returning the bus handle
    pub fn release(self) -> BUS {
        self.bus
    }

    /// Write one raw byte to a time register.
    ///
    /// The byte goes on the wire as-is; callers are responsible for BCD
    /// encoding and range reduction.
    pub fn write_register(&mut self, field: TimeField, raw: u8) -> Result<(), BUS::Error> {
        self.bus.write(self.address, &[field.register(), raw])
    }

    /// Read the raw (BCD-encoded) contents of a time register
    pub fn read_register(&mut self, field: TimeField) -> Result<u8, BUS::Error> {
        let mut buf = [0u8; 1];
        self.bus
            .write_read(self.address, &[field.register()], &mut buf)?;
        Ok(buf[0])
    }

    /// Resume the oscillator by clearing the halt bit.
    ///
    /// Raw read-modify-write of SECONDS; the seconds count in bits 0-6
    /// is untouched. Idempotent.
    pub fn start(&mut self) -> Result<(), BUS::Error> {
        let raw = self.read_register(TimeField::Second)?;
        self.write_register(TimeField::Second, raw & !CLOCK_HALT)
    }

    /// Halt the oscillator by setting the halt bit. Idempotent.
    pub fn stop(&mut self) -> Result<(), BUS::Error> {
        let raw = self.read_register(TimeField::Second)?;
        self.write_register(TimeField::Second, raw | CLOCK_HALT)
    }

    /// Check whether the oscillator is halted
    pub fn is_halted(&mut self) -> Result<bool, BUS::Error> {
        let raw = self.read_register(TimeField::Second)?;
        Ok(raw & CLOCK_HALT != 0)
    }

    /// Set the seconds register; the value wraps modulo 60
    pub fn set_second(&mut self, value: u8) -> Result<(), BUS::Error> {
        self.set_field(TimeField::Second, value as u16)
    }

    /// Set the minutes register; the value wraps modulo 60
    pub fn set_minute(&mut self, value: u8) -> Result<(), BUS::Error> {
        self.set_field(TimeField::Minute, value as u16)
    }

    /// Set the hours register (24-hour mode); the value wraps modulo 24
    pub fn set_hour(&mut self, value: u8) -> Result<(), BUS::Error> {
        self.set_field(TimeField::Hour, value as u16)
    }

    /// Set the weekday register; the value wraps modulo 8
    pub fn set_weekday(&mut self, value: u8) -> Result<(), BUS::Error> {
        self.set_field(TimeField::Weekday, value as u16)
    }

    /// Set the day-of-month register; the value wraps modulo 32
    pub fn set_day(&mut self, value: u8) -> Result<(), BUS::Error> {
        self.set_field(TimeField::Day, value as u16)
    }

    /// Set the month register; the value wraps modulo 13
    pub fn set_month(&mut self, value: u8) -> Result<(), BUS::Error> {
        self.set_field(TimeField::Month, value as u16)
    }

    /// Set the year register; the value wraps modulo 100, so full years
    /// (2024) and on-chip years (24) store the same byte
    pub fn set_year(&mut self, value: u16) -> Result<(), BUS::Error> {
        self.set_field(TimeField::Year, value)
    }

    fn set_field(&mut self, field: TimeField, value: u16) -> Result<(), BUS::Error> {
        self.write_register(field, binary_to_bcd(field.wrap(value)))
    }

    /// Write the full date and time in one 8-byte transaction, relying
    /// on the chip's auto-increment addressing from the SECONDS register
    pub fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), BUS::Error> {
        let mut buf = [0u8; 8];
        buf[0] = TimeField::Second.register();
        buf[1..].copy_from_slice(&datetime.to_registers());
        self.bus.write(self.address, &buf)
    }

    /// Read the full date and time in one 7-register burst, clamping
    /// each field into its reportable range
    pub fn datetime(&mut self) -> Result<DateTime, BUS::Error> {
        let mut regs = [0u8; 7];
        self.bus
            .write_read(self.address, &[TimeField::Second.register()], &mut regs)?;
        Ok(DateTime::from_registers(&regs))
    }

    /// Read one time field, BCD-decoded and clamped into range.
    ///
    /// Years are reported as 2000-2099. The halt bit is not masked, so
    /// while the chip is halted the seconds field reads as 59.
    pub fn time(&mut self, field: TimeField) -> Result<u16, BUS::Error> {
        let raw = self.read_register(field)?;
        Ok(field.clamp(bcd_to_binary(raw)))
    }

    /// Check whether a field currently reads as `expected`.
    ///
    /// The register is selected by `field`; `expected` values that
    /// happen to alias a register offset have no special meaning.
    pub fn time_equals(&mut self, field: TimeField, expected: u16) -> Result<bool, BUS::Error> {
        Ok(self.time(field)? == expected)
    }
}

impl<BUS> RealTimeClock for Ds1307<BUS>
where
    BUS: I2cBus,
{
    type Error = BUS::Error;

    fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), Self::Error> {
        Ds1307::set_datetime(self, datetime)
    }

    fn datetime(&mut self) -> Result<DateTime, Self::Error> {
        Ds1307::datetime(self)
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        Ds1307::start(self)
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        Ds1307::stop(self)
    }

    fn is_halted(&mut self) -> Result<bool, Self::Error> {
        Ds1307::is_halted(self)
    }
}
