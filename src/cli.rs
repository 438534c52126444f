use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quranvid",
    about = "Narrated Quran page videos — per-ayah RTL captions over a still background, stitched with FFmpeg",
    version,
    after_help = "\x1b[1mExamples:\x1b[0m
  quranvid 255                      Render page 255 with defaults
  quranvid                          Prompt for the page number
  quranvid 1 --background sky.jpg   Use a different background still
  quranvid 604 -o last-page.mp4     Choose the output file"
)]
pub struct Cli {
    /// Page number to render (1-604). Prompted for interactively when omitted.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Path to a quranvid.toml config file (default: ./quranvid.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Background image (overrides the config)
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Output video path (default: quran_page_<PAGE>_video.mp4)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
