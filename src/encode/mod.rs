//! Animated GIF output
//!
//! Frames are encoded as they arrive, full-size, looping forever, all with the
//! same delay. No inter-frame optimisation is attempted. An empty frame
//! sequence writes no bytes at all; callers that should not create an output
//! file for an empty log must check before opening it.

use crate::errors::ReplayError;
use crate::render::Frame;
use crate::timeline::progress::ProgressObserver;
use crate::timeline::Replay;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame};
use std::io::Write;
use tracing::info;

/// Streams rendered frames into a looping GIF
pub struct GifWriter<W: Write> {
    encoder: GifEncoder<W>,
    delay: Delay,
    written: usize,
}

impl<W: Write> GifWriter<W> {
    pub fn new(writer: W, delay_ms: u32) -> Result<Self, ReplayError> {
        let mut encoder = GifEncoder::new(writer);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(ReplayError::EncoderSetup)?;
        Ok(GifWriter {
            encoder,
            delay: Delay::from_numer_denom_ms(delay_ms, 1),
            written: 0,
        })
    }

    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), ReplayError> {
        let gif_frame = GifFrame::from_parts(frame.image.to_rgba(), 0, 0, self.delay);
        self.encoder
            .encode_frame(gif_frame)
            .map_err(|source| ReplayError::Encode {
                index: frame.index,
                source,
            })?;
        self.written += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> usize {
        self.written
    }
}

/// Encode every frame of `frames` into `writer`, returning the frame count
///
/// The GIF trailer is written and `writer` flushed before returning.
pub fn encode_gif<I, W>(frames: I, mut writer: W, delay_ms: u32) -> Result<usize, ReplayError>
where
    I: IntoIterator<Item = Frame>,
    W: Write,
{
    let written = {
        let mut gif = GifWriter::new(&mut writer, delay_ms)?;
        for frame in frames {
            gif.write_frame(&frame)?;
        }
        gif.frames_written()
        // encoder drops here and emits the trailer
    };
    writer.flush()?;
    Ok(written)
}

/// Replay `replay` and write the resulting animation to `writer`
///
/// Returns the number of frames written; an empty replay writes nothing.
pub fn replay_to_gif<W, P>(replay: Replay, writer: W, progress: P) -> Result<usize, ReplayError>
where
    W: Write,
    P: ProgressObserver,
{
    if replay.is_empty() {
        return Ok(0);
    }
    let delay_ms = replay.config().frame_delay_ms;
    let written = encode_gif(replay.frames(progress)?, writer, delay_ms)?;
    info!(frames = written, "animation written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::progress::NullProgress;
    use image::codecs::gif::GifDecoder;
    use image::AnimationDecoder;
    use std::io::Cursor;

    fn decode(bytes: Vec<u8>) -> Vec<image::Frame> {
        let decoder = GifDecoder::new(Cursor::new(bytes)).unwrap();
        decoder.into_frames().collect_frames().unwrap()
    }

    #[test]
    fn test_frames_round_trip_through_gif() {
        let replay = Replay::from_log("+ 0 10\n+ 5 10\n- 0 10\n");
        let mut out = Vec::new();
        let written = replay_to_gif(replay, &mut out, NullProgress).unwrap();

        assert_eq!(written, 3);
        let frames = decode(out);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].buffer().dimensions(), (340, 74));
    }

    #[test]
    fn test_empty_replay_writes_nothing() {
        let mut out = Vec::new();
        let written = replay_to_gif(Replay::from_log(""), &mut out, NullProgress).unwrap();
        assert_eq!(written, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_colors_survive_encoding() {
        let replay = Replay::from_log("+ 0 4\n+ 2 4\n");
        let mut out = Vec::new();
        replay_to_gif(replay, &mut out, NullProgress).unwrap();

        let frames = decode(out);
        // second frame: unit 2 is covered twice, centre of its 10px cell
        let pixel = frames[1].buffer().get_pixel(10 + 25, 15);
        assert_eq!(pixel.0, [255, 0, 0, 255]);
    }
}
