//! Signal processing stages for the preprocessing pipeline
//!
//! Each stage is a pure function over a mono sample slice:
//! - Level metering (RMS, dB conversions)
//! - Clipping detection
//! - Soft-knee limiting
//! - High-pass filtering
//! - RMS-targeted normalization

pub mod clipping;
pub mod highpass;
pub mod level;
pub mod normalize;
pub mod soft_clip;
