/*!
    Y4M container framing and output configuration for the vapour crate
    ecosystem.

    Y4M is a simple uncompressed raw-video container: one stream header line
    followed by repeated `FRAME` marker + raw-pixel-payload units. The framing
    here is pure and stateless — the streaming layer decides when to emit the
    header and feeds it one decoded buffer at a time.

    # Basic Usage

    ```ignore
    use vapour_mux::{MuxConfig, y4m};

    let config = MuxConfig::y4m();

    let mut out = Vec::new();
    out.extend_from_slice(&y4m::header(&info));
    for payload in decoded_frames {
        out.extend_from_slice(&y4m::frame(&payload));
    }
    ```

    # Output Formats

    - **Y4M**: header + per-frame markers, playable by ffmpeg/mpv as-is
    - **Raw**: bare concatenated planar frames, for piping into encoders
      that are told the geometry out of band
*/

pub use vapour_types::{Rational, Result, StreamInfo};

mod config;
pub mod y4m;

pub use config::{MuxConfig, OutputFormat};
