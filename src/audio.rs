//! Per-frame tone synthesis: a short sine burst written as 16-bit mono PCM
//! WAV and handed to the platform's command-line player. The whole path is
//! fire-and-forget; a missing player or failed write just means silence.

use std::{
    env, fs,
    path::Path,
    process::{Command, Stdio},
    sync::atomic::{AtomicU64, Ordering},
    thread,
};

pub(crate) const SAMPLE_RATE: u32 = 44_100;
pub(crate) const TONE_MS: u32 = 100;
const FREQ_LO: f64 = 220.0;
const FREQ_HI: f64 = 440.0;

static TONE_SEQ: AtomicU64 = AtomicU64::new(0);

/// The trigger fires on every third rendered frame.
pub(crate) fn tone_due(frame_count: u64) -> bool {
    frame_count % 3 == 0
}

/// Maps a noise sample in [-1, 1] linearly onto [220, 440] Hz.
pub(crate) fn tone_freq(sample: f64) -> f64 {
    let t = ((sample + 1.0) / 2.0).clamp(0.0, 1.0);
    FREQ_LO + t * (FREQ_HI - FREQ_LO)
}

/// Kicks off playback on a detached thread and returns immediately. The
/// join handle and every failure inside the thread are dropped on purpose;
/// the render loop never waits on audio.
pub(crate) fn play_tone(freq: f64) {
    let n = TONE_SEQ.fetch_add(1, Ordering::Relaxed);
    let path = env::temp_dir().join(format!("noisefield-{}-{n}.wav", std::process::id()));
    let _ = thread::Builder::new().name("tone".into()).spawn(move || {
        if write_tone(&path, freq, TONE_MS).is_ok() {
            let _ = player_command(&path).status();
        }
        let _ = fs::remove_file(&path);
    });
}

pub(crate) fn write_tone(path: &Path, freq: f64, duration_ms: u32) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    let samples = u64::from(SAMPLE_RATE) * u64::from(duration_ms) / 1000;
    for i in 0..samples {
        let t = i as f64 / f64::from(SAMPLE_RATE);
        let amp = (2.0 * std::f64::consts::PI * freq * t).sin();
        writer.write_sample((amp * 32767.0).round() as i16)?;
    }
    writer.finalize()
}

#[cfg(target_os = "macos")]
fn player_command(path: &Path) -> Command {
    let mut cmd = Command::new("afplay");
    cmd.arg(path).stdout(Stdio::null()).stderr(Stdio::null());
    cmd
}

#[cfg(not(target_os = "macos"))]
fn player_command(path: &Path) -> Command {
    let mut cmd = Command::new("aplay");
    cmd.arg("-q").arg(path).stdout(Stdio::null()).stderr(Stdio::null());
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_gate_fires_every_third_frame() {
        let fired: Vec<u64> = (0..12).filter(|&n| tone_due(n)).collect();
        assert_eq!(fired, vec![0, 3, 6, 9]);
    }

    #[test]
    fn frequency_range_matches_noise_range() {
        assert_eq!(tone_freq(-1.0), 220.0);
        assert_eq!(tone_freq(0.0), 330.0);
        assert_eq!(tone_freq(1.0), 440.0);
        // out-of-range samples clamp instead of leaving the audible band
        assert_eq!(tone_freq(-2.0), 220.0);
        assert_eq!(tone_freq(2.0), 440.0);
    }

    #[test]
    fn wav_has_riff_header_and_exact_size() {
        let path = env::temp_dir().join(format!("noisefield-wavtest-{}.wav", std::process::id()));
        write_tone(&path, 220.0, 100).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // 44-byte header plus 4410 mono 16-bit samples
        assert_eq!(bytes.len(), 44 + 4410 * 2);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(&bytes[36..40], b"data");
    }

    #[test]
    fn wav_samples_start_at_zero_crossing() {
        let path = env::temp_dir().join(format!("noisefield-zerotest-{}.wav", std::process::id()));
        write_tone(&path, 440.0, 10).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // sin(0) = 0, little-endian i16
        assert_eq!(&bytes[44..46], &[0, 0]);
    }
}
