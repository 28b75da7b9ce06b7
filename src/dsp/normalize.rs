//! RMS-targeted normalization
//!
//! Scales a buffer so its RMS hits a target level, then hard-clamps to
//! [-1, 1]. Near-silent buffers are returned unchanged rather than having
//! their noise floor amplified without bound.
//!
//! The clamp can reintroduce clipping distortion when the gain pushes
//! scaled peaks past unity. That is a deliberate tradeoff of running
//! normalization last in the pipeline; `GainReport::clamped_samples`
//! makes it observable.

use crate::dsp::level::{linear_to_db, rms};

/// RMS floor below which a buffer is treated as silent
const SILENCE_RMS_FLOOR: f32 = 0.001;

/// What the normalizer did to a buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainReport {
    /// Linear gain applied (1.0 when the silence guard fired)
    pub gain: f32,

    /// Samples the hard clamp pulled back into [-1, 1]
    pub clamped_samples: usize,
}

/// Normalize a buffer to a target RMS level
///
/// Computes the current RMS; if it is below 0.001 the buffer is treated
/// as silent and returned unchanged with unity gain. Otherwise every
/// sample is scaled by `target_rms / current_rms` and clamped to [-1, 1].
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `target_rms` - Target RMS in (0, 1] (0.1 is -20 dBFS)
///
/// # Returns
///
/// The normalized buffer and a `GainReport` with the applied gain and
/// the number of clamped samples
///
/// # Example
///
/// ```
/// use stage_dsp::dsp::normalize::normalize;
///
/// let samples = vec![0.5f32; 1024];
/// let (normalized, report) = normalize(&samples, 0.1);
/// assert!((normalized[0] - 0.1).abs() < 1e-6);
/// assert_eq!(report.clamped_samples, 0);
/// ```
pub fn normalize(samples: &[f32], target_rms: f32) -> (Vec<f32>, GainReport) {
    let current_rms = rms(samples);

    if current_rms < SILENCE_RMS_FLOOR {
        log::warn!(
            "Buffer is essentially silent (RMS {:.6}), skipping normalization",
            current_rms
        );
        return (
            samples.to_vec(),
            GainReport {
                gain: 1.0,
                clamped_samples: 0,
            },
        );
    }

    let gain = target_rms / current_rms;
    let mut clamped_samples = 0;

    let normalized: Vec<f32> = samples
        .iter()
        .map(|&sample| {
            let scaled = sample * gain;
            if scaled.abs() > 1.0 {
                clamped_samples += 1;
                scaled.clamp(-1.0, 1.0)
            } else {
                scaled
            }
        })
        .collect();

    log::debug!(
        "Normalized {} samples: RMS {:.4} -> {:.4} target, gain {:+.2} dB, {} clamped",
        samples.len(),
        current_rms,
        target_rms,
        linear_to_db(gain),
        clamped_samples
    );

    (
        normalized,
        GainReport {
            gain,
            clamped_samples,
        },
    )
}
