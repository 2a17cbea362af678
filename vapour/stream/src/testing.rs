/*!
    Instrumented source for exercising the streaming layer.
*/

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;

use vapour_source::{FrameSource, Script};
use vapour_types::{Error, Rational, Result, StreamInfo};

/// Observations recorded by a [`MockSource`] across decode calls.
#[derive(Default)]
pub(crate) struct DecodeLog {
    order: Mutex<Vec<u32>>,
    buffers: Mutex<HashSet<usize>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    completed: AtomicUsize,
}

impl DecodeLog {
    /// Frame indices in the order decode requests were issued.
    pub fn decode_order(&self) -> Vec<u32> {
        self.order.lock().unwrap().clone()
    }

    /// How many decode requests were issued.
    pub fn decodes_issued(&self) -> usize {
        self.order.lock().unwrap().len()
    }

    /// How many decode requests ran to completion.
    pub fn decodes_completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Highest number of decodes observed in flight simultaneously.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Number of distinct buffer identities handed to decode calls.
    pub fn distinct_buffers(&self) -> usize {
        self.buffers.lock().unwrap().len()
    }
}

/// A [`FrameSource`] double that records decode traffic and can inject
/// failures or block until released.
pub(crate) struct MockSource {
    info: StreamInfo,
    fail_at: Option<u32>,
    gate: Option<Arc<Semaphore>>,
    log: Arc<DecodeLog>,
}

impl MockSource {
    /// A 64x48 @ 25 fps source with the given frame count.
    pub fn new(num_frames: u32) -> (Self, Arc<DecodeLog>) {
        let log = Arc::new(DecodeLog::default());
        let source = Self {
            info: StreamInfo::new(64, 48, 64 * 48 * 3 / 2, num_frames, Rational::new(25, 1)),
            fail_at: None,
            gate: None,
            log: Arc::clone(&log),
        };
        (source, log)
    }

    /// Make decode of the given frame index fail.
    pub fn failing_at(mut self, index: u32) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Block every decode until a permit is added to the returned gate.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }
}

impl FrameSource for MockSource {
    async fn open(_script: &Script) -> Result<Self> {
        Err(Error::init("mock sources are constructed directly"))
    }

    fn info(&self) -> StreamInfo {
        self.info
    }

    async fn decode_into(&mut self, index: u32, frame: &mut [u8]) -> Result<()> {
        self.log.order.lock().unwrap().push(index);
        self.log.buffers.lock().unwrap().insert(frame.as_ptr() as usize);

        let in_flight = self.log.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        match &self.gate {
            Some(gate) => gate.acquire().await.unwrap().forget(),
            None => tokio::task::yield_now().await,
        }

        self.log.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.log.completed.fetch_add(1, Ordering::SeqCst);

        if self.fail_at == Some(index) {
            return Err(Error::decode(index, "injected failure"));
        }
        frame.fill(index as u8);
        Ok(())
    }
}
