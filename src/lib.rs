//! Read, write and split uncompressed 16-bit PCM WAV files.
//!
//! ```no_run
//! use wavsplit::container::wav;
//! use wavsplit::transform::extract_channel;
//!
//! let (header, samples) = wav::read("mozart.wav")?;
//! let (mono, left) = extract_channel(&header, &samples, 0, None)?;
//! wav::write("mozart_s0.wav", &mono, &left)?;
//! # Ok::<(), wavsplit::io::WavError>(())
//! ```

pub mod cli;
pub mod container;
pub mod core;
pub mod io;
pub mod show;
pub mod transform;
