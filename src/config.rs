//! Configuration parameters for the preprocessing pipeline

use serde::{Deserialize, Serialize};

use crate::error::PreprocessError;

/// Preprocessing configuration parameters
///
/// Every stage of the pipeline is optional and individually configurable.
/// `Default` carries values tuned for speech capture ahead of transcription:
/// mains-hum removal at 60 Hz and normalization to 0.1 RMS (-20 dBFS).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Normalize the buffer to `target_rms` (default: true)
    pub normalize: bool,

    /// Target RMS level in (0, 1] (default: 0.1, i.e. -20 dBFS)
    pub target_rms: f32,

    /// Apply the high-pass filter (default: true)
    pub high_pass: bool,

    /// High-pass cutoff frequency in Hz (default: 60.0, mains-hum rejection)
    pub cutoff_freq: f32,

    /// Scan the original buffer for clipping (default: true)
    pub detect_clip: bool,

    /// Soft-limit the buffer when clipping was detected (default: false)
    pub apply_soft_clip: bool,

    /// Clipping detection threshold in (0, 1] (default: 0.95)
    ///
    /// The soft limiter, when enabled, runs at `clip_threshold * 0.8` to
    /// leave headroom below the detection threshold.
    pub clip_threshold: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            target_rms: 0.1,
            high_pass: true,
            cutoff_freq: 60.0,
            detect_clip: true,
            apply_soft_clip: false,
            clip_threshold: 0.95,
        }
    }
}

impl PreprocessConfig {
    /// Validate the configuration ranges
    ///
    /// The stage functions assume their parameters are in range; the
    /// orchestrator calls this before any stage runs.
    ///
    /// # Errors
    ///
    /// Returns `PreprocessError::InvalidInput` if `target_rms` or
    /// `clip_threshold` fall outside (0, 1], or `NumericalError` if
    /// `cutoff_freq` is non-finite.
    pub fn validate(&self) -> Result<(), PreprocessError> {
        if !self.target_rms.is_finite() || self.target_rms <= 0.0 || self.target_rms > 1.0 {
            return Err(PreprocessError::InvalidInput(format!(
                "target_rms must be in (0, 1], got {}",
                self.target_rms
            )));
        }

        if !self.clip_threshold.is_finite()
            || self.clip_threshold <= 0.0
            || self.clip_threshold > 1.0
        {
            return Err(PreprocessError::InvalidInput(format!(
                "clip_threshold must be in (0, 1], got {}",
                self.clip_threshold
            )));
        }

        if !self.cutoff_freq.is_finite() {
            return Err(PreprocessError::NumericalError(format!(
                "cutoff_freq must be finite, got {}",
                self.cutoff_freq
            )));
        }

        if self.cutoff_freq <= 0.0 {
            return Err(PreprocessError::InvalidInput(format!(
                "cutoff_freq must be > 0 Hz, got {}",
                self.cutoff_freq
            )));
        }

        Ok(())
    }
}
