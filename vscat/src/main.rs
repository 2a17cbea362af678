use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncWriteExt;

use vapour_mux::MuxConfig;
use vapour_source::{PatternSource, Script};
use vapour_stream::FrameStream;

#[derive(Parser, Debug)]
#[command(name = "vscat")]
#[command(about = "Stream a frame-generation script as Y4M or raw planar video")]
struct Args {
    /// Script file describing the frames to generate
    script: PathBuf,

    /// Output file (defaults to the script path with its extension rewritten)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit raw planar frames without Y4M framing
    #[arg(long)]
    raw: bool,

    /// Override the output file extension (with leading dot)
    #[arg(long)]
    extension: Option<String>,
}

impl Args {
    fn mux_config(&self) -> MuxConfig {
        let config = if self.raw {
            MuxConfig::raw()
        } else {
            MuxConfig::y4m()
        };
        match &self.extension {
            Some(extension) => config.with_extension(extension),
            None => config,
        }
    }

    fn output_path(&self, config: &MuxConfig) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => config.apply_extension(&self.script),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.mux_config();
    let output = args.output_path(&config);

    let script = Script::load(&args.script)
        .await
        .with_context(|| format!("failed to read script {}", args.script.display()))?;

    let stream = FrameStream::<PatternSource>::open(&script, config).await?;
    let info = stream.info();
    log::info!(
        "{}x{} @ {} fps, {} frames, {} bytes/frame",
        info.width,
        info.height,
        info.fps,
        info.num_frames,
        info.frame_size,
    );

    let mut file = tokio::fs::File::create(&output)
        .await
        .with_context(|| format!("failed to create {}", output.display()))?;

    let mut reader = stream.into_reader();
    let written = tokio::io::copy(&mut reader, &mut file)
        .await
        .with_context(|| format!("streaming to {} failed", output.display()))?;
    file.flush().await?;

    log::info!("wrote {} bytes to {}", written, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn output_path_follows_format() {
        let args = Args::parse_from(["vscat", "clips/intro.pattern"]);
        let config = args.mux_config();
        assert!(config.is_y4m());
        assert_eq!(args.output_path(&config), PathBuf::from("clips/intro.y4m"));

        let args = Args::parse_from(["vscat", "clips/intro.pattern", "--raw"]);
        let config = args.mux_config();
        assert_eq!(args.output_path(&config), PathBuf::from("clips/intro.yuv"));
    }

    #[test]
    fn explicit_output_and_extension_win() {
        let args = Args::parse_from(["vscat", "intro.pattern", "-o", "out.bin"]);
        let config = args.mux_config();
        assert_eq!(args.output_path(&config), PathBuf::from("out.bin"));

        let args = Args::parse_from(["vscat", "intro.pattern", "--extension", ".video"]);
        let config = args.mux_config();
        assert_eq!(args.output_path(&config), PathBuf::from("intro.video"));
    }
}
