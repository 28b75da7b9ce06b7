//! Preprocessing result types

use serde::{Deserialize, Serialize};

use crate::dsp::clipping::ClippingReport;

/// Diagnostic warning raised by the preprocessing pipeline
///
/// Warnings are advisory only and never affect pipeline success. The
/// variants are language-neutral; rendering user-facing (possibly
/// localized) text is a presentation concern. `message()` provides a
/// default English rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WarningKind {
    /// More than 1% of the input samples were at or above the clipping
    /// threshold
    ClippingDetected {
        /// Percentage of clipped samples in [0, 100]
        percentage: f32,
    },

    /// The processed buffer came out very quiet (RMS below 0.01)
    LowOutputLevel,
}

impl WarningKind {
    /// Default English rendering of the warning
    ///
    /// # Example
    ///
    /// ```
    /// use stage_dsp::WarningKind;
    ///
    /// let warning = WarningKind::ClippingDetected { percentage: 2.5 };
    /// assert!(warning.message().contains("2.50%"));
    /// ```
    pub fn message(&self) -> String {
        match self {
            WarningKind::ClippingDetected { percentage } => format!(
                "Clipping detected in {:.2}% of samples. Consider lowering the microphone gain.",
                percentage
            ),
            WarningKind::LowOutputLevel => {
                "Audio level is very low. Consider raising the microphone gain.".to_string()
            }
        }
    }
}

/// Level statistics gathered across the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessStats {
    /// RMS of the original, unmodified input buffer
    pub original_rms: f32,

    /// RMS of the final processed buffer
    pub processed_rms: f32,

    /// Clipping report over the original buffer (absent when detection
    /// is disabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipping: Option<ClippingReport>,

    /// Samples the normalizer's hard clamp pulled back into [-1, 1]
    ///
    /// Normalization gain can push soft-limited peaks past unity again;
    /// the count makes that visible instead of silently reordering stages.
    pub clamped_samples: usize,
}

/// Result of a full preprocessing pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessResult {
    /// Processed buffer, same length as the input
    pub buffer: Vec<f32>,

    /// Level and clipping statistics
    pub stats: PreprocessStats,

    /// Advisory warnings in emission order (possibly empty)
    pub warnings: Vec<WarningKind>,
}
