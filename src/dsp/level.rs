//! Level metering utilities
//!
//! RMS measurement plus dBFS conversions. The normalizer and the
//! orchestrator both meter through here.

/// Compute the RMS (root mean square) level of a buffer
///
/// `sqrt(mean(x^2))` over the whole slice, O(n), no side effects.
/// Returns 0.0 for an empty slice; the pipeline entry point rejects
/// empty buffers before any stage runs, so this only matters for
/// standalone use.
///
/// # Example
///
/// ```
/// use stage_dsp::dsp::level::rms;
///
/// let samples = vec![0.5f32; 1024];
/// assert!((rms(&samples) - 0.5).abs() < 1e-6);
/// ```
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_sq: f32 = samples.iter().map(|&x| x * x).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Convert a linear amplitude to dBFS
///
/// Returns `f32::NEG_INFINITY` for amplitudes at or below zero.
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        return f32::NEG_INFINITY;
    }
    20.0 * linear.log10()
}

/// Convert a dBFS value to linear amplitude
pub fn db_to_linear(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}
