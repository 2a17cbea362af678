/*!
    Stream metadata types.
*/

use crate::Rational;

/**
    Metadata for an open frame stream.

    Produced exactly once when a source is opened and fixed for the
    stream's lifetime. `frame_size` is consistent with the source's
    dimensions and pixel layout for every frame it decodes.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StreamInfo {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Size of one decoded frame in bytes.
    pub frame_size: usize,
    /// Total number of frames in the stream.
    pub num_frames: u32,
    /// Frame rate.
    pub fps: Rational,
}

impl StreamInfo {
    /**
        Create new stream metadata.

        # Panics

        Panics if `width` or `height` is zero.
    */
    pub fn new(width: u32, height: u32, frame_size: usize, num_frames: u32, fps: Rational) -> Self {
        assert!(width != 0, "width cannot be zero");
        assert!(height != 0, "height cannot be zero");
        Self {
            width,
            height,
            frame_size,
            num_frames,
            fps,
        }
    }

    /**
        Total number of payload bytes the stream will emit across all frames.
    */
    pub fn total_bytes(&self) -> u64 {
        self.frame_size as u64 * self.num_frames as u64
    }
}

// Ensure metadata can cross task boundaries
static_assertions::assert_impl_all!(StreamInfo: Send, Sync);
