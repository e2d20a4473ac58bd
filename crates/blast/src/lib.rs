#![doc = include_str!("../README.md")]

pub mod args;
pub mod driver;
pub mod logging;
