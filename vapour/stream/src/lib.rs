/*!
    Pull-driven frame streaming for the vapour crate ecosystem.

    This crate adapts a [`FrameSource`](vapour_source::FrameSource) into a
    backpressure-respecting byte stream, optionally muxing frames into the Y4M
    container format. It is built from two pieces:

    - [`FrameEmitter`] - tracks the current frame index, owns one reusable
      frame buffer, and on each pull either decodes the next frame or signals
      end of stream. At most one decode is ever in flight.
    - [`FrameStream`] - bridges the emitter to [`futures::Stream`]. The stream
      is pull-driven: while the consumer does not poll, no frames are decoded,
      so nothing is produced speculatively ahead of demand.

    # Example

    ```ignore
    use futures::StreamExt;
    use vapour_mux::MuxConfig;
    use vapour_source::{PatternSource, Script};
    use vapour_stream::FrameStream;

    let script = Script::load("clip.pattern").await?;
    let mut stream = FrameStream::<PatternSource>::open(&script, MuxConfig::y4m()).await?;

    let info = stream.info();
    while let Some(chunk) = stream.next().await {
        sink.write_all(&chunk?).await?;
    }
    ```

    # Error Handling

    Open failures surface as an `Err` from [`FrameStream::open`]; per-frame
    decode failures surface as exactly one `Err` item, after which the stream
    is terminated. Both travel the same [`Error`](vapour_types::Error)
    channel, so one consumer failure handler observes setup-time and per-frame
    failures uniformly.
*/

pub use vapour_mux::{MuxConfig, OutputFormat};
pub use vapour_source::{FrameSource, Script};
pub use vapour_types::{Error, Rational, Result, StreamInfo};

mod adapter;
mod emitter;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::FrameStream;
pub use emitter::FrameEmitter;
