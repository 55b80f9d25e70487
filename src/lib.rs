#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(feature = "async")]
mod asynch;
mod config;
mod driver;
mod error;
mod measurement;
mod registers;

#[cfg(feature = "async")]
pub use asynch::Veml6075Async;
pub use config::{Configuration, DynamicRange, IntegrationTime};
pub use driver::Veml6075;
pub use error::Error;
pub use measurement::{RawSample, UvReading};
pub use registers::{DEVICE_ADDRESS, DEVICE_ID};
