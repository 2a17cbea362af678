/*!
    Synthetic test-pattern source.
*/

use vapour_types::{Error, Rational, Result, StreamInfo};

use crate::{FrameSource, Script};

/**
    A frame source that synthesizes YUV 4:2:0 test frames from a small
    key-value script.

    The script is UTF-8 text, one `key = value` pair per line. Blank lines
    and lines starting with `#` are ignored. Recognized keys:

    - `width`, `height` — frame dimensions in pixels (required, even)
    - `frames` — total frame count (required, may be zero)
    - `fps` — frame rate as `num/den` or a bare integer (default `25/1`)

    Frames are deterministic per index: a diagonal luma gradient that scrolls
    with the frame number over flat drifting chroma planes, so consumers can
    verify payload content byte-for-byte.
*/
#[derive(Debug)]
pub struct PatternSource {
    info: StreamInfo,
}

impl FrameSource for PatternSource {
    async fn open(script: &Script) -> Result<Self> {
        let path = script.path().display().to_string();
        let text = std::str::from_utf8(script.contents())
            .map_err(|_| Error::init(format!("failed to evaluate {path}: script is not valid UTF-8")))?;

        let mut width: Option<u32> = None;
        let mut height: Option<u32> = None;
        let mut frames: Option<u32> = None;
        let mut fps = Rational::new(25, 1);

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                Error::init(format!("failed to evaluate {path}: line {}: expected `key = value`", line_no + 1))
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "width" => width = Some(parse_u32(&path, key, value)?),
                "height" => height = Some(parse_u32(&path, key, value)?),
                "frames" => frames = Some(parse_u32(&path, key, value)?),
                "fps" => fps = parse_fps(&path, value)?,
                other => {
                    return Err(Error::init(format!(
                        "failed to evaluate {path}: unknown key `{other}`"
                    )));
                }
            }
        }

        let width = width.ok_or_else(|| missing_key(&path, "width"))?;
        let height = height.ok_or_else(|| missing_key(&path, "height"))?;
        let frames = frames.ok_or_else(|| missing_key(&path, "frames"))?;

        if width == 0 || height == 0 {
            return Err(Error::init(format!(
                "failed to evaluate {path}: width and height must be positive"
            )));
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(Error::init(format!(
                "failed to evaluate {path}: width and height must be even for 4:2:0 output"
            )));
        }

        let frame_size = frame_size(width, height);
        Ok(Self {
            info: StreamInfo::new(width, height, frame_size, frames, fps),
        })
    }

    fn info(&self) -> StreamInfo {
        self.info
    }

    async fn decode_into(&mut self, index: u32, frame: &mut [u8]) -> Result<()> {
        if index >= self.info.num_frames {
            return Err(Error::decode(index, "frame index out of range"));
        }
        if frame.len() != self.info.frame_size {
            return Err(Error::decode(index, "frame buffer size mismatch"));
        }

        let w = self.info.width as usize;
        let h = self.info.height as usize;
        let shift = index as usize * 7;

        let (luma, chroma) = frame.split_at_mut(w * h);
        let (u_plane, v_plane) = chroma.split_at_mut(w / 2 * (h / 2));

        // Diagonal gradient scrolling with the frame index
        for y in 0..h {
            for (x, sample) in luma[y * w..(y + 1) * w].iter_mut().enumerate() {
                *sample = ((x + y + shift) & 0xff) as u8;
            }
        }
        u_plane.fill(((64 + shift) & 0xff) as u8);
        v_plane.fill((192usize.wrapping_sub(shift) & 0xff) as u8);

        Ok(())
    }
}

/// Bytes per 8-bit 4:2:0 frame: a full luma plane plus two quarter-size chroma planes.
fn frame_size(width: u32, height: u32) -> usize {
    let (w, h) = (width as usize, height as usize);
    w * h + 2 * (w / 2) * (h / 2)
}

fn parse_u32(path: &str, key: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| Error::init(format!("failed to evaluate {path}: invalid value for `{key}`: `{value}`")))
}

fn parse_fps(path: &str, value: &str) -> Result<Rational> {
    let (num, den) = match value.split_once('/') {
        Some((num, den)) => (num.trim(), den.trim()),
        None => (value, "1"),
    };
    let num: u32 = parse_u32(path, "fps", num)?;
    let den: u32 = parse_u32(path, "fps", den)?;
    if num == 0 || den == 0 {
        return Err(Error::init(format!(
            "failed to evaluate {path}: fps must be positive"
        )));
    }
    Ok(Rational::new(num, den))
}

fn missing_key(path: &str, key: &str) -> Error {
    Error::init(format!("failed to evaluate {path}: missing required key `{key}`"))
}
