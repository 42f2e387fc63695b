//! Board-agnostic core logic for the Chronos RTC stack
//!
//! This crate contains everything about DS1307-family timekeeping that
//! does not touch a bus:
//!
//! - Packed-BCD codec for the chip's register encoding
//! - The time register map with its wrap and clamp bound tables
//! - The `DateTime` record and its wire-order register layout
//! - The `RealTimeClock` trait chip drivers implement

#![no_std]
#![deny(unsafe_code)]

pub mod bcd;
pub mod clock;
pub mod datetime;
pub mod field;

pub use clock::RealTimeClock;
pub use datetime::DateTime;
pub use field::TimeField;
