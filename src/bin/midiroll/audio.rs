//! WAV playback through the default output device.
//!
//! The file is decoded up front and mixed to mono. The UI thread only sends
//! start/stop messages through a ring buffer; the device callback owns the
//! samples and the play position.

use std::path::Path;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use midiroll::playback::AudioHandle;
use rtrb::{Consumer, Producer, RingBuffer};

const CONTROL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ControlMessage {
    Start { offset_sec: f64 },
    Stop,
}

/// Mono samples plus their rate.
struct DecodedWav {
    samples: Vec<f32>,
    sample_rate: u32,
}

fn decode(path: &Path) -> EyreResult<DecodedWav> {
    let reader = hound::WavReader::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<f32>, _>>()
            .wrap_err("failed to decode WAV samples")?,
        hound::SampleFormat::Int => {
            let max_val = (1u32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_val))
                .collect::<Result<Vec<f32>, _>>()
                .wrap_err("failed to decode WAV samples")?
        }
    };

    let samples = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect();
    Ok(DecodedWav {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Callback-side playback state.
struct Voice {
    samples: Vec<f32>,
    source_rate: f64,
    /// Source samples advanced per output frame
    step: f64,
    position: f64,
    playing: bool,
    control: Consumer<ControlMessage>,
}

impl Voice {
    fn poll_control(&mut self) {
        while let Ok(message) = self.control.pop() {
            match message {
                ControlMessage::Start { offset_sec } => {
                    self.position = offset_sec.max(0.0) * self.source_rate;
                    self.playing = true;
                }
                ControlMessage::Stop => self.playing = false,
            }
        }
    }

    fn next_sample(&mut self) -> f32 {
        if !self.playing {
            return 0.0;
        }
        match self.samples.get(self.position as usize) {
            Some(&sample) => {
                self.position += self.step;
                sample
            }
            None => {
                self.playing = false;
                0.0
            }
        }
    }
}

pub struct WavPlayer {
    control: Producer<ControlMessage>,
    duration_sec: f64,
    _stream: cpal::Stream,
}

impl WavPlayer {
    /// Decode `path` and open a paused output stream for it.
    pub fn open(path: &Path) -> EyreResult<Self> {
        let wav = decode(path)?;
        let duration_sec = wav.samples.len() as f64 / wav.sample_rate.max(1) as f64;

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;
        let output_rate = config.sample_rate().0 as f64;
        let channels = config.channels() as usize;

        let (producer, consumer) = RingBuffer::new(CONTROL_CAPACITY);
        let mut voice = Voice {
            samples: wav.samples,
            source_rate: wav.sample_rate as f64,
            step: wav.sample_rate as f64 / output_rate,
            position: 0.0,
            playing: false,
            control: consumer,
        };

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    voice.poll_control();
                    // Copy to output (mono to all channels)
                    for frame in data.chunks_mut(channels) {
                        frame.fill(voice.next_sample());
                    }
                },
                |err| log::error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        log::info!(
            "audio: {} ({:.1}s at {} Hz, output {} Hz x{})",
            path.display(),
            duration_sec,
            wav.sample_rate,
            output_rate,
            channels
        );
        Ok(Self {
            control: producer,
            duration_sec,
            _stream: stream,
        })
    }

    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    fn send(&mut self, message: ControlMessage) {
        if self.control.push(message).is_err() {
            log::warn!("audio control queue full, dropped {message:?}");
        }
    }
}

impl AudioHandle for WavPlayer {
    fn start(&mut self, offset_sec: f64) {
        self.send(ControlMessage::Start { offset_sec });
    }

    fn stop(&mut self) {
        self.send(ControlMessage::Stop);
    }
}
