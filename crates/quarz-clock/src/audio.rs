//! Tick sound output.
//!
//! A cpal output stream runs for the life of the app and normally emits
//! silence. [`TickChannel::trigger`] bumps a generation counter; the audio
//! callback notices the change and restarts a short synthesized tick
//! envelope, so a new tick always replaces the previous one instead of
//! overlapping it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{Context, Result, bail};
use cpal::SampleFormat;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

/// Handle to the tick sound. Dropping it stops the stream.
pub struct TickChannel {
    generation: Arc<AtomicU32>,
    // Kept alive; cpal stops the stream on drop.
    _stream: cpal::Stream,
}

impl TickChannel {
    /// Opens the default output device and starts a silent stream.
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no default audio output device")?;
        let config = device
            .default_output_config()
            .context("audio device has no default output config")?;

        if config.sample_format() != SampleFormat::F32 {
            bail!(
                "unsupported output sample format {:?}",
                config.sample_format()
            );
        }

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;
        log::debug!("tick audio: {sample_rate} Hz, {channels} channel(s)");

        let generation = Arc::new(AtomicU32::new(0));
        let callback_generation = Arc::clone(&generation);
        let mut synth = TickSynth::new(sample_rate);

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let generation = callback_generation.load(Ordering::Acquire);
                    synth.fill(data, channels, generation);
                },
                |err| log::warn!("audio stream error: {err}"),
                None,
            )
            .context("failed to build audio output stream")?;

        stream.play().context("failed to start audio output stream")?;

        Ok(Self {
            generation,
            _stream: stream,
        })
    }

    /// Restarts the tick from the beginning, cutting off any tick still
    /// playing.
    pub fn trigger(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// Sine burst with a quadratic decay envelope, restarted on generation
/// change. Lives entirely inside the audio callback.
struct TickSynth {
    sample_rate: f32,
    burst_samples: u32,
    /// Position within the current burst; at or past `burst_samples` the
    /// synth outputs silence.
    pos: u32,
    seen_generation: u32,
}

impl TickSynth {
    const FREQ_HZ: f32 = 2000.0;
    const BURST_SECS: f32 = 0.06;
    const AMPLITUDE: f32 = 0.25;

    fn new(sample_rate: u32) -> Self {
        let burst_samples = (Self::BURST_SECS * sample_rate as f32) as u32;
        Self {
            sample_rate: sample_rate as f32,
            burst_samples,
            // Start exhausted: silence until the first trigger.
            pos: u32::MAX,
            seen_generation: 0,
        }
    }

    fn fill(&mut self, data: &mut [f32], channels: usize, generation: u32) {
        if generation != self.seen_generation {
            self.seen_generation = generation;
            self.pos = 0;
        }

        let channels = channels.max(1);
        for frame in data.chunks_mut(channels) {
            let sample = if self.pos < self.burst_samples {
                let t = self.pos as f32 / self.sample_rate;
                let env = 1.0 - self.pos as f32 / self.burst_samples as f32;
                self.pos += 1;
                (std::f32::consts::TAU * Self::FREQ_HZ * t).sin() * env * env * Self::AMPLITUDE
            } else {
                0.0
            };

            for ch in frame {
                *ch = sample;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TickSynth;

    const RATE: u32 = 48_000;

    fn peak(data: &[f32]) -> f32 {
        data.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    #[test]
    fn silent_until_first_trigger() {
        let mut synth = TickSynth::new(RATE);
        let mut buf = [1.0f32; 256];
        synth.fill(&mut buf, 1, 0);
        assert!(buf.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn trigger_produces_a_decaying_burst_then_silence() {
        let mut synth = TickSynth::new(RATE);

        // Whole burst is under 0.06s * 48kHz = 2880 samples.
        let mut buf = vec![0.0f32; 4096];
        synth.fill(&mut buf, 1, 1);

        assert!(peak(&buf[..1024]) > 0.01, "burst start should be audible");
        assert!(peak(&buf[..1024]) > peak(&buf[1024..2048]), "envelope decays");
        assert!(buf[3000..].iter().all(|&s| s == 0.0), "tail is silent");
    }

    #[test]
    fn retrigger_restarts_the_envelope() {
        let mut synth = TickSynth::new(RATE);

        let mut first = vec![0.0f32; 2048];
        synth.fill(&mut first, 1, 1);

        // Exhaust the rest of the burst.
        let mut rest = vec![0.0f32; 8192];
        synth.fill(&mut rest, 1, 1);

        // A new generation starts the burst over at full amplitude.
        let mut second = vec![0.0f32; 2048];
        synth.fill(&mut second, 1, 2);
        assert!((peak(&first) - peak(&second)).abs() < 1e-6);
    }

    #[test]
    fn stereo_frames_duplicate_the_sample() {
        let mut synth = TickSynth::new(RATE);
        let mut buf = vec![0.0f32; 512];
        synth.fill(&mut buf, 2, 1);
        for frame in buf.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }
}
