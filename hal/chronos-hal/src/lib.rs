//! Chronos Hardware Abstraction Layer
//!
//! This crate defines the bus abstraction the Chronos RTC drivers are
//! written against, so the same driver code runs on any platform that can
//! provide a blocking I2C master.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application code                       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chronos-drivers (Ds1307<BUS>)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chronos-hal (this crate - I2cBus)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Platform I2C peripheral                │
//! │  (via EmbeddedHalI2c for e-h 1.0)       │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key items at crate root for convenience
pub use i2c::{EmbeddedHalI2c, I2cBus, I2cConfig};
