#![allow(dead_code)]

pub fn generate_sine_wave(samples: usize, frequency: f32, sample_rate: u32) -> Vec<i16> {
	let mut data = Vec::with_capacity(samples);
	for i in 0..samples {
		let t = i as f32 / sample_rate as f32;
		let sample = (2.0 * std::f32::consts::PI * frequency * t).sin() * 16000.0;
		data.push(sample as i16);
	}
	data
}

/// Interleaves `frames` frames where channel `c` of frame `i` holds `c * 1000 + i`.
pub fn ramp_samples(channels: u16, frames: usize) -> Vec<i16> {
	let mut samples = Vec::with_capacity(frames * channels as usize);
	for i in 0..frames {
		for c in 0..channels as usize {
			samples.push((c * 1000 + i) as i16);
		}
	}
	samples
}

/// Builds a canonical 44-byte-header wav image by hand.
pub fn create_wav(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
	let bits_per_sample: u16 = 16;
	let data_size = samples.len() * 2;
	let file_size = 36 + data_size;

	let mut wav = Vec::new();

	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(file_size as u32).to_le_bytes());
	wav.extend_from_slice(b"WAVE");

	wav.extend_from_slice(b"fmt ");
	wav.extend_from_slice(&16u32.to_le_bytes());
	wav.extend_from_slice(&1u16.to_le_bytes());
	wav.extend_from_slice(&channels.to_le_bytes());
	wav.extend_from_slice(&sample_rate.to_le_bytes());
	let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
	wav.extend_from_slice(&byte_rate.to_le_bytes());
	let block_align = channels * bits_per_sample / 8;
	wav.extend_from_slice(&block_align.to_le_bytes());
	wav.extend_from_slice(&bits_per_sample.to_le_bytes());

	wav.extend_from_slice(b"data");
	wav.extend_from_slice(&(data_size as u32).to_le_bytes());

	for sample in samples {
		wav.extend_from_slice(&sample.to_le_bytes());
	}

	wav
}
