//! Chip driver implementations
//!
//! This crate provides concrete drivers written against the bus traits
//! in chronos-hal and implementing the traits defined in chronos-core:
//!
//! - Real-time clocks (DS1307)

#![no_std]
#![deny(unsafe_code)]

pub mod rtc;
