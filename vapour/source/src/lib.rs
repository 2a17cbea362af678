/*!
    Frame source contract and script handling for the vapour crate ecosystem.

    A [`FrameSource`] turns a frame-generation definition (a [`Script`]) into a
    sequence of decodable frames plus stream metadata. The streaming layer only
    ever talks to sources through this contract: open the definition, describe
    the stream once, then decode one frame at a time into a caller-supplied
    buffer.

    Decoding is asynchronous — an implementation may run on a background worker
    or a hardware-accelerated path — but callers serialize requests, so an
    implementation never sees two decodes in flight.

    # Example

    ```ignore
    use vapour_source::{FrameSource, PatternSource, Script};

    let script = Script::load("clip.pattern").await?;
    let mut source = PatternSource::open(&script).await?;

    let info = source.info();
    let mut frame = vec![0u8; info.frame_size];
    source.decode_into(0, &mut frame).await?;
    ```
*/

use std::future::Future;

pub use vapour_types::{Error, Rational, Result, StreamInfo};

mod pattern;
mod script;

pub use pattern::PatternSource;
pub use script::Script;

/**
    A source of decodable video frames.

    Implementations evaluate a frame-generation definition once at open time,
    report fixed stream metadata, and decode frames by index into a buffer
    owned by the caller.
*/
pub trait FrameSource: Sized {
    /**
        Evaluate the given definition and open the stream.

        Failures are reported as [`Error::Init`] — a source never panics on a
        malformed definition. Definitions with varying dimensions or unknown
        frame layout must be rejected here.
    */
    fn open(script: &Script) -> impl Future<Output = Result<Self>> + Send;

    /**
        Describe the stream. Stable for the lifetime of the source.
    */
    fn info(&self) -> StreamInfo;

    /**
        Decode frame `index` into `frame`, in place.

        The buffer length equals `info().frame_size`. Failures are reported
        as [`Error::Decode`] and are terminal for the stream that issued the
        request.
    */
    fn decode_into(
        &mut self,
        index: u32,
        frame: &mut [u8],
    ) -> impl Future<Output = Result<()>> + Send;
}
