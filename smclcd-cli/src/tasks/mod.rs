//! Background tasks

pub mod backlight;
