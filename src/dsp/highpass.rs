//! Single-pole IIR high-pass filter
//!
//! Removes sub-cutoff energy (mains hum, handling rumble, HVAC) before
//! transcription. The default 60 Hz cutoff targets mains hum while leaving
//! the speech band untouched.
//!
//! Filter state lives entirely within one call; there is no carry-over
//! between buffers.

use crate::error::PreprocessError;

/// Apply a first-order IIR high-pass filter to a buffer
///
/// Coefficients: `RC = 1/(2*pi*cutoff)`, `dt = 1/rate`,
/// `alpha = RC/(RC + dt)`. The recurrence is
///
/// ```text
/// y[0] = x[0]
/// y[i] = alpha * (y[i-1] + x[i] - x[i-1])
/// ```
///
/// Stable for `0 < alpha < 1`, which holds whenever both `sample_rate`
/// and `cutoff_freq` are positive and finite.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz, must be > 0
/// * `cutoff_freq` - Cutoff frequency in Hz, must be > 0
///
/// # Errors
///
/// Returns `PreprocessError` if `sample_rate` or `cutoff_freq` is
/// non-positive or non-finite.
///
/// # Example
///
/// ```
/// use stage_dsp::dsp::highpass::high_pass;
///
/// let samples = vec![0.5f32; 16000];
/// let filtered = high_pass(&samples, 16000.0, 60.0)?;
/// assert_eq!(filtered.len(), samples.len());
/// # Ok::<(), stage_dsp::PreprocessError>(())
/// ```
pub fn high_pass(
    samples: &[f32],
    sample_rate: f32,
    cutoff_freq: f32,
) -> Result<Vec<f32>, PreprocessError> {
    if !sample_rate.is_finite() || !cutoff_freq.is_finite() {
        return Err(PreprocessError::NumericalError(format!(
            "Filter parameters must be finite: sample_rate={}, cutoff_freq={}",
            sample_rate, cutoff_freq
        )));
    }

    if sample_rate <= 0.0 {
        return Err(PreprocessError::InvalidInput(format!(
            "Sample rate must be > 0 Hz, got {}",
            sample_rate
        )));
    }

    if cutoff_freq <= 0.0 {
        return Err(PreprocessError::InvalidInput(format!(
            "Cutoff frequency must be > 0 Hz, got {}",
            cutoff_freq
        )));
    }

    let rc = 1.0 / (2.0 * std::f32::consts::PI * cutoff_freq);
    let dt = 1.0 / sample_rate;
    let alpha = rc / (rc + dt);

    log::debug!(
        "High-pass: {} samples, cutoff {:.1} Hz at {:.0} Hz (alpha={:.6})",
        samples.len(),
        cutoff_freq,
        sample_rate,
        alpha
    );

    let mut filtered = Vec::with_capacity(samples.len());
    if samples.is_empty() {
        return Ok(filtered);
    }

    filtered.push(samples[0]);
    for i in 1..samples.len() {
        let y = alpha * (filtered[i - 1] + samples[i] - samples[i - 1]);
        filtered.push(y);
    }

    Ok(filtered)
}
