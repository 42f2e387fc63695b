//! I2C bus abstractions
//!
//! Provides the blocking bus trait the RTC drivers consume, plus an
//! adapter onto the `embedded-hal` 1.0 ecosystem trait.

/// I2C bus master
///
/// The bus collaborator the RTC drivers are written against. Every call
/// is one blocking transaction; errors from the underlying peripheral
/// surface unmodified through [`I2cBus::Error`].
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write `data` to the device at the given 7-bit address.
    ///
    /// For register-file devices the first byte is the register address
    /// and the remainder is payload (auto-increment write).
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes from the device at the given 7-bit address,
    /// starting at its current register pointer
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// The select-register-then-read pattern: `write_data` carries the
    /// register address, `read_buf` receives the register contents.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz) - the fastest the DS1307 family supports
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

/// Adapter implementing [`I2cBus`] for any `embedded-hal` 1.0 I2C
/// peripheral.
///
/// Lets the Chronos drivers run directly on top of chip HALs that
/// implement the ecosystem trait (embassy, rp2040-hal, stm32 HALs, ...).
pub struct EmbeddedHalI2c<T>(pub T);

impl<T> EmbeddedHalI2c<T> {
    /// Wrap an `embedded-hal` I2C peripheral
    pub fn new(peripheral: T) -> Self {
        Self(peripheral)
    }

    /// Unwrap, returning the peripheral
    pub fn release(self) -> T {
        self.0
    }
}

impl<T> I2cBus for EmbeddedHalI2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write_data, read_buf)
    }
}
