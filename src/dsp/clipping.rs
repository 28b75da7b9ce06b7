//! Clipping detection
//!
//! Scans a buffer for samples at or above a magnitude threshold. Run
//! against the original, unmodified input so the report reflects what the
//! capture device actually delivered.

use serde::{Deserialize, Serialize};

/// Result of scanning a buffer for clipped samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClippingReport {
    /// Whether any sample reached the threshold
    pub has_clipping: bool,

    /// Number of samples with `|x| >= threshold`
    pub clipped_samples: usize,

    /// Clipped samples as a percentage of buffer length, in [0, 100]
    pub clipping_percentage: f32,
}

/// Detect clipping in a buffer
///
/// Counts samples whose magnitude is at or above `threshold`. Decreasing
/// the threshold never decreases the count.
///
/// `threshold` is expected in (0, 1]; the pipeline orchestrator validates
/// it before calling.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `threshold` - Magnitude threshold in (0, 1] (0.95 catches near-full-scale peaks)
///
/// # Example
///
/// ```
/// use stage_dsp::dsp::clipping::detect_clipping;
///
/// let samples = vec![0.2, 0.97, -1.0, 0.5];
/// let report = detect_clipping(&samples, 0.95);
/// assert!(report.has_clipping);
/// assert_eq!(report.clipped_samples, 2);
/// assert_eq!(report.clipping_percentage, 50.0);
/// ```
pub fn detect_clipping(samples: &[f32], threshold: f32) -> ClippingReport {
    let clipped_samples = samples.iter().filter(|x| x.abs() >= threshold).count();
    let clipping_percentage = if samples.is_empty() {
        0.0
    } else {
        clipped_samples as f32 / samples.len() as f32 * 100.0
    };

    if clipped_samples > 0 {
        log::debug!(
            "Clipping scan: {}/{} samples at or above {:.2} ({:.2}%)",
            clipped_samples,
            samples.len(),
            threshold,
            clipping_percentage
        );
    }

    ClippingReport {
        has_clipping: clipped_samples > 0,
        clipped_samples,
        clipping_percentage,
    }
}
