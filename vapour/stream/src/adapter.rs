/*!
    Backpressure bridge from the frame emitter to `futures::Stream`.
*/

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::future::BoxFuture;
use futures::stream::{FusedStream, Stream};
use tokio_util::io::StreamReader;

use vapour_mux::MuxConfig;
use vapour_source::{FrameSource, Script};
use vapour_types::{Result, StreamInfo};

use crate::FrameEmitter;

/// One pull cycle: `Idle -> Pulling -> (Idle | Done)`.
enum AdapterState<S: FrameSource> {
    /// Waiting for consumer demand.
    Idle(Box<FrameEmitter<S>>),
    /// One `next_chunk` call in flight; the emitter lives inside the future.
    Pulling(BoxFuture<'static, (Box<FrameEmitter<S>>, Option<Result<Bytes>>)>),
    /// End of stream or terminal error already delivered.
    Done,
}

/**
    A [`FrameSource`] exposed as a pull-driven byte stream.

    Implements [`Stream`] over framed chunks. Decoding is driven purely by
    consumer polls: while the consumer applies backpressure (stops polling),
    no decode requests are issued, and polls that arrive while a decode is in
    flight are coalesced by the task system rather than starting a second
    decode. Dropping the stream mid-pull drops the in-flight decode with it.

    After end of stream or a terminal error the stream is fused: every later
    poll returns `None`.
*/
pub struct FrameStream<S: FrameSource> {
    info: StreamInfo,
    state: AdapterState<S>,
}

impl<S: FrameSource + Send + 'static> FrameStream<S> {
    /**
        Open the source for the given definition and expose it as a stream.
    */
    pub async fn open(script: &Script, config: MuxConfig) -> Result<Self> {
        Ok(Self::new(FrameEmitter::open(script, config).await?))
    }

    /**
        Wrap an already-open emitter.
    */
    pub fn new(emitter: FrameEmitter<S>) -> Self {
        Self {
            info: emitter.info(),
            state: AdapterState::Idle(Box::new(emitter)),
        }
    }

    /**
        Stream metadata, captured at open time.
    */
    pub fn info(&self) -> StreamInfo {
        self.info
    }

    /**
        Bridge the stream into the tokio I/O ecosystem as an `AsyncRead`.

        Chunk boundaries disappear; consumers see one contiguous byte stream
        suitable for `tokio::io::copy`.
    */
    pub fn into_reader(self) -> StreamReader<Self, Bytes> {
        StreamReader::new(self)
    }
}

impl<S: FrameSource + Send + 'static> Stream for FrameStream<S> {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match std::mem::replace(&mut this.state, AdapterState::Done) {
                AdapterState::Idle(mut emitter) => {
                    this.state = AdapterState::Pulling(Box::pin(async move {
                        let item = emitter.next_chunk().await;
                        (emitter, item)
                    }));
                }
                AdapterState::Pulling(mut pull) => match pull.as_mut().poll(cx) {
                    Poll::Pending => {
                        this.state = AdapterState::Pulling(pull);
                        return Poll::Pending;
                    }
                    Poll::Ready((emitter, Some(Ok(chunk)))) => {
                        this.state = AdapterState::Idle(emitter);
                        return Poll::Ready(Some(Ok(chunk)));
                    }
                    Poll::Ready((_, Some(Err(e)))) => {
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Ready((_, None)) => {
                        return Poll::Ready(None);
                    }
                },
                AdapterState::Done => return Poll::Ready(None),
            }
        }
    }
}

impl<S: FrameSource + Send + 'static> FusedStream for FrameStream<S> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, AdapterState::Done)
    }
}
