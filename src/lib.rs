//! # Stage DSP
//!
//! An audio preprocessing pipeline that conditions raw mono capture
//! buffers before they are handed to a speech transcription engine.
//!
//! ## Features
//!
//! - **Clipping detection**: scan for samples at or above a magnitude threshold
//! - **Soft limiting**: tanh-based soft knee for over-threshold peaks
//! - **High-pass filtering**: single-pole IIR for mains hum and rumble
//! - **Normalization**: RMS-targeted gain with a silence guard
//!
//! ## Quick Start
//!
//! ```
//! use stage_dsp::{preprocess_audio, PreprocessConfig};
//!
//! // Mono capture buffer, nominal range [-1.0, 1.0]
//! let samples = vec![0.05f32; 16000];
//! let sample_rate = 16000;
//!
//! let result = preprocess_audio(&samples, sample_rate, &PreprocessConfig::default())?;
//!
//! println!("RMS: {:.4} -> {:.4}", result.stats.original_rms, result.stats.processed_rms);
//! for warning in &result.warnings {
//!     println!("warning: {}", warning.message());
//! }
//! # Ok::<(), stage_dsp::PreprocessError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline applies a fixed stage order, each stage optional per
//! configuration:
//!
//! ```text
//! Input -> Clip Detection -> Soft Limit -> High-pass -> Normalize -> Output
//! ```
//!
//! Every stage is a pure function producing a new buffer of the same
//! length; the caller's buffer is never mutated. Identical inputs always
//! yield identical outputs, so calls are safe from any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dsp;
pub mod error;
pub mod result;

// Re-export main types
pub use config::PreprocessConfig;
pub use dsp::clipping::ClippingReport;
pub use error::PreprocessError;
pub use result::{PreprocessResult, PreprocessStats, WarningKind};

/// Clipping percentage above which a warning is emitted
const CLIPPING_WARN_PERCENTAGE: f32 = 1.0;

/// Processed RMS below which the low-level warning is emitted
const LOW_LEVEL_RMS: f32 = 0.01;

/// Headroom factor applied to the detection threshold when soft limiting
///
/// Limiting at a fraction of the detection threshold keeps the knee
/// below the level that triggered detection in the first place.
const SOFT_CLIP_HEADROOM: f32 = 0.8;

/// Run the full preprocessing pipeline over a capture buffer
///
/// Stage order is fixed; each stage runs only if enabled in `config`:
///
/// 1. Clipping detection over the original, unmodified input
/// 2. Soft limiting at `clip_threshold * 0.8`, only when step 1 found clipping
/// 3. High-pass filtering at `cutoff_freq`
/// 4. Normalization to `target_rms`
///
/// Warnings are advisory and never fail the call: clipping above 1% of
/// samples and a processed RMS below 0.01 each add one warning.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, nominal range [-1.0, 1.0], length >= 1
/// * `sample_rate` - Sample rate in Hz (typically 16000 or 44100)
/// * `config` - Pipeline configuration
///
/// # Returns
///
/// `PreprocessResult` with the processed buffer (same length as the
/// input), level statistics, and any warnings
///
/// # Errors
///
/// Returns `PreprocessError::InvalidInput` before any stage runs when the
/// buffer is empty, the sample rate is zero, or the configuration is out
/// of range (see [`PreprocessConfig::validate`]).
///
/// # Example
///
/// ```
/// use stage_dsp::{preprocess_audio, PreprocessConfig};
///
/// let samples: Vec<f32> = (0..16000)
///     .map(|i| 0.3 * (2.0 * std::f32::consts::PI * 220.0 * i as f32 / 16000.0).sin())
///     .collect();
///
/// let result = preprocess_audio(&samples, 16000, &PreprocessConfig::default())?;
/// assert_eq!(result.buffer.len(), samples.len());
/// # Ok::<(), stage_dsp::PreprocessError>(())
/// ```
pub fn preprocess_audio(
    samples: &[f32],
    sample_rate: u32,
    config: &PreprocessConfig,
) -> Result<PreprocessResult, PreprocessError> {
    log::debug!(
        "Preprocessing {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(PreprocessError::InvalidInput(
            "Empty audio buffer".to_string(),
        ));
    }

    if sample_rate == 0 {
        return Err(PreprocessError::InvalidInput(
            "Sample rate must be > 0 Hz".to_string(),
        ));
    }

    config.validate()?;

    let mut warnings = Vec::new();
    let original_rms = dsp::level::rms(samples);

    // 1. Clipping detection runs against the original buffer so the
    //    report reflects the capture device, not our own processing
    let clipping = if config.detect_clip {
        let report = dsp::clipping::detect_clipping(samples, config.clip_threshold);
        if report.has_clipping && report.clipping_percentage > CLIPPING_WARN_PERCENTAGE {
            log::warn!(
                "Input clipping at {:.2}% of samples",
                report.clipping_percentage
            );
            warnings.push(WarningKind::ClippingDetected {
                percentage: report.clipping_percentage,
            });
        }
        Some(report)
    } else {
        None
    };

    let mut processed = samples.to_vec();

    // 2. Soft limiting, only when detection actually saw clipping
    if config.apply_soft_clip && clipping.map(|c| c.has_clipping).unwrap_or(false) {
        processed = dsp::soft_clip::soft_clip(&processed, config.clip_threshold * SOFT_CLIP_HEADROOM);
    }

    // 3. High-pass filtering
    if config.high_pass {
        processed = dsp::highpass::high_pass(&processed, sample_rate as f32, config.cutoff_freq)?;
    }

    // 4. Normalization
    let mut clamped_samples = 0;
    if config.normalize {
        let (normalized, gain_report) = dsp::normalize::normalize(&processed, config.target_rms);
        processed = normalized;
        clamped_samples = gain_report.clamped_samples;
    }

    let processed_rms = dsp::level::rms(&processed);
    if processed_rms < LOW_LEVEL_RMS {
        log::warn!("Processed audio is very quiet (RMS {:.4})", processed_rms);
        warnings.push(WarningKind::LowOutputLevel);
    }

    Ok(PreprocessResult {
        buffer: processed,
        stats: PreprocessStats {
            original_rms,
            processed_rms,
            clipping,
            clamped_samples,
        },
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(length: usize, amplitude: f32, freq: f32, sample_rate: f32) -> Vec<f32> {
        (0..length)
            .map(|i| {
                let t = i as f32 / sample_rate;
                amplitude * (2.0 * std::f32::consts::PI * freq * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_rejects_empty_buffer() {
        let result = preprocess_audio(&[], 16000, &PreprocessConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let samples = vec![0.1f32; 100];
        let result = preprocess_audio(&samples, 0, &PreprocessConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_config_before_stages() {
        let samples = vec![0.1f32; 100];
        let mut config = PreprocessConfig::default();
        config.cutoff_freq = -60.0;
        assert!(preprocess_audio(&samples, 16000, &config).is_err());
    }

    #[test]
    fn test_length_preserved_end_to_end() {
        let samples = sine(16000, 0.3, 220.0, 16000.0);
        let result = preprocess_audio(&samples, 16000, &PreprocessConfig::default()).unwrap();
        assert_eq!(result.buffer.len(), samples.len());
    }

    #[test]
    fn test_caller_buffer_untouched() {
        let samples = sine(8000, 0.3, 220.0, 16000.0);
        let before = samples.clone();
        let _ = preprocess_audio(&samples, 16000, &PreprocessConfig::default()).unwrap();
        assert_eq!(samples, before);
    }

    #[test]
    fn test_deterministic() {
        let samples = sine(16000, 0.4, 330.0, 16000.0);
        let config = PreprocessConfig::default();
        let a = preprocess_audio(&samples, 16000, &config).unwrap();
        let b = preprocess_audio(&samples, 16000, &config).unwrap();
        assert_eq!(a.buffer, b.buffer);
        assert_eq!(a.warnings, b.warnings);
    }

    #[test]
    fn test_clipping_report_is_over_original_buffer() {
        // Soft limiting and normalization change the buffer, but the
        // report must still describe the raw input
        let samples: Vec<f32> = (0..1000)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let mut config = PreprocessConfig::default();
        config.apply_soft_clip = true;

        let result = preprocess_audio(&samples, 16000, &config).unwrap();
        let report = result.stats.clipping.unwrap();
        assert!(report.has_clipping);
        assert_eq!(report.clipped_samples, 1000);
        assert_eq!(report.clipping_percentage, 100.0);
    }

    #[test]
    fn test_detection_disabled_omits_report() {
        let samples = sine(8000, 0.3, 220.0, 16000.0);
        let mut config = PreprocessConfig::default();
        config.detect_clip = false;

        let result = preprocess_audio(&samples, 16000, &config).unwrap();
        assert!(result.stats.clipping.is_none());
        assert!(result
            .warnings
            .iter()
            .all(|w| !matches!(w, WarningKind::ClippingDetected { .. })));
    }

    #[test]
    fn test_soft_clip_skipped_without_detected_clipping() {
        // apply_soft_clip is set but detection finds nothing, so only
        // high-pass and normalize should run
        let samples = sine(16000, 0.3, 220.0, 16000.0);
        let mut config = PreprocessConfig::default();
        config.apply_soft_clip = true;
        config.high_pass = false;
        config.normalize = false;

        let result = preprocess_audio(&samples, 16000, &config).unwrap();
        assert_eq!(result.buffer, samples);
    }

    #[test]
    fn test_all_stages_disabled_is_identity() {
        let samples = sine(8000, 0.3, 220.0, 16000.0);
        let config = PreprocessConfig {
            normalize: false,
            high_pass: false,
            detect_clip: false,
            apply_soft_clip: false,
            ..PreprocessConfig::default()
        };

        let result = preprocess_audio(&samples, 16000, &config).unwrap();
        assert_eq!(result.buffer, samples);
        assert!(result.stats.clipping.is_none());
        assert_eq!(result.stats.clamped_samples, 0);
    }

    #[test]
    fn test_clipping_warning_above_one_percent() {
        // 2% of samples at full scale
        let mut samples = sine(1000, 0.3, 220.0, 16000.0);
        for i in 0..20 {
            samples[i * 50] = 1.0;
        }

        let result = preprocess_audio(&samples, 16000, &PreprocessConfig::default()).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, WarningKind::ClippingDetected { .. })));
    }

    #[test]
    fn test_no_warning_at_or_below_one_percent() {
        // Exactly 1% clipped: has_clipping is true but the warning
        // threshold is strictly greater than 1.0
        let mut samples = sine(1000, 0.3, 220.0, 16000.0);
        for i in 0..10 {
            samples[i * 97] = 1.0;
        }

        let result = preprocess_audio(&samples, 16000, &PreprocessConfig::default()).unwrap();
        let report = result.stats.clipping.unwrap();
        assert!(report.has_clipping);
        assert!((report.clipping_percentage - 1.0).abs() < 1e-6);
        assert!(result
            .warnings
            .iter()
            .all(|w| !matches!(w, WarningKind::ClippingDetected { .. })));
    }

    #[test]
    fn test_low_level_warning_on_silence() {
        // All-zero input stays silent through every stage
        let samples = vec![0.0f32; 16000];
        let result = preprocess_audio(&samples, 16000, &PreprocessConfig::default()).unwrap();

        assert!(result.warnings.contains(&WarningKind::LowOutputLevel));
        assert!(result.buffer.iter().all(|&x| x == 0.0));
        assert_eq!(result.stats.processed_rms, 0.0);
    }

    #[test]
    fn test_normalization_reaches_target() {
        let samples = sine(44100, 0.3, 440.0, 44100.0);
        let mut config = PreprocessConfig::default();
        config.high_pass = false;

        let result = preprocess_audio(&samples, 44100, &config).unwrap();
        assert!(
            (result.stats.processed_rms - 0.1).abs() < 1e-3,
            "Processed RMS should hit the 0.1 target, got {}",
            result.stats.processed_rms
        );
    }

    #[test]
    fn test_warnings_can_co_occur() {
        // A stuck-at-DC capture: every sample reads as clipped, but the
        // high-pass strips the DC so the processed buffer ends up nearly
        // silent. Both warnings must appear.
        let samples = vec![0.96f32; 32000];
        let mut config = PreprocessConfig::default();
        config.normalize = false;
        config.cutoff_freq = 2000.0;

        let result = preprocess_audio(&samples, 16000, &config).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| matches!(w, WarningKind::ClippingDetected { .. })));
        assert!(result.warnings.contains(&WarningKind::LowOutputLevel));
    }
}
