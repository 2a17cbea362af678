/*!
    Y4M stream framing.
*/

use bytes::{BufMut, Bytes, BytesMut};

use vapour_types::StreamInfo;

/// Marker prepended to every frame payload.
pub const FRAME_MARKER: &[u8; 6] = b"FRAME\n";

/**
    Build the stream header, emitted exactly once before the first frame.

    The chroma tag is hard-coded to `C420`: sources currently hand over 4:2:0
    planar data and there is no format negotiation. Widening the tag requires
    negotiation support, not a header change alone.
*/
pub fn header(info: &StreamInfo) -> Bytes {
    Bytes::from(format!(
        "YUV4MPEG2 C420 W{} H{} F{}:{} Ip A0:0\n",
        info.width, info.height, info.fps.num, info.fps.den
    ))
}

/**
    Frame a decoded payload: `FRAME\n` followed by the payload bytes, as one
    contiguous chunk of `payload.len() + 6` bytes.
*/
pub fn frame(payload: &[u8]) -> Bytes {
    let mut chunk = BytesMut::with_capacity(FRAME_MARKER.len() + payload.len());
    chunk.put_slice(FRAME_MARKER);
    chunk.put_slice(payload);
    chunk.freeze()
}
