/*!
    Frame emitter implementation.
*/

use bytes::Bytes;

use vapour_mux::{MuxConfig, y4m};
use vapour_source::{FrameSource, Script};
use vapour_types::{Result, StreamInfo};

/// Lifecycle of an emitter. `Ended` and `Errored` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EmitterState {
    /// Opened, header not yet emitted.
    Ready,
    /// Emitting frames.
    Streaming,
    /// All frames emitted, clean close.
    Ended,
    /// Setup or decode failure, no further emission.
    Errored,
}

/**
    Pull-driven frame emitter.

    Owns the source, the current frame index, and one frame buffer sized to
    `info().frame_size`. The buffer is reused for every decode — memory stays
    O(frame_size) no matter how long the stream is — and each emitted chunk is
    an owned copy framed per the configured output format.

    `next_chunk` takes `&mut self`, so a second decode cannot be issued while
    one is in flight.
*/
pub struct FrameEmitter<S> {
    source: S,
    info: StreamInfo,
    config: MuxConfig,
    current_frame: u32,
    frame_buffer: Vec<u8>,
    state: EmitterState,
}

impl<S: FrameSource> FrameEmitter<S> {
    /**
        Open the source for the given definition and prepare to emit.

        Initialization failures surface as the returned `Err` — there is no
        out-of-band error channel to subscribe to.
    */
    pub async fn open(script: &Script, config: MuxConfig) -> Result<Self> {
        let source = S::open(script).await?;
        Ok(Self::new(source, config))
    }

    /**
        Wrap an already-open source.
    */
    pub fn new(source: S, config: MuxConfig) -> Self {
        let info = source.info();
        Self {
            source,
            info,
            config,
            current_frame: 0,
            frame_buffer: vec![0; info.frame_size],
            state: EmitterState::Ready,
        }
    }

    /**
        Stream metadata, available from the moment the emitter exists.
    */
    pub fn info(&self) -> StreamInfo {
        self.info
    }

    /**
        The mux configuration this emitter was opened with.
    */
    pub fn config(&self) -> &MuxConfig {
        &self.config
    }

    /**
        Index of the next frame to decode.
    */
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /**
        Produce the next chunk of output.

        Returns exactly one of:
        - `Some(Ok(bytes))` - the stream header (first pull in Y4M mode) or
          one framed frame
        - `None` - end of stream; idempotent once reached
        - `Some(Err(_))` - a terminal decode failure, delivered once; every
          later call returns `None`

        Each call issues at most one decode request and advances the frame
        counter before awaiting it, so a failed frame is never retried.
    */
    pub async fn next_chunk(&mut self) -> Option<Result<Bytes>> {
        match self.state {
            EmitterState::Ended | EmitterState::Errored => return None,
            EmitterState::Ready => {
                self.state = EmitterState::Streaming;
                if self.config.is_y4m() {
                    return Some(Ok(y4m::header(&self.info)));
                }
            }
            EmitterState::Streaming => {}
        }

        if self.current_frame >= self.info.num_frames {
            self.state = EmitterState::Ended;
            return None;
        }

        let index = self.current_frame;
        self.current_frame += 1;

        match self.source.decode_into(index, &mut self.frame_buffer).await {
            Ok(()) => {
                let chunk = if self.config.is_y4m() {
                    y4m::frame(&self.frame_buffer)
                } else {
                    Bytes::copy_from_slice(&self.frame_buffer)
                };
                Some(Ok(chunk))
            }
            Err(e) => {
                self.state = EmitterState::Errored;
                Some(Err(e))
            }
        }
    }
}
