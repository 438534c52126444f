use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuranVidError {
    #[error("Content fetch failed: {0}")]
    ContentFetch(String),

    #[error("Page {page}: listing mismatch ({texts} text ayahs, {audios} audio ayahs)")]
    Alignment {
        page: u32,
        texts: usize,
        audios: usize,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Audio download failed: {0}")]
    AudioDownload(String),

    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Background image not found: {0}")]
    BackgroundNotFound(PathBuf),

    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuranVidError {
    /// Return an actionable hint for the user, if applicable.
    pub fn hint(&self) -> Option<String> {
        match self {
            QuranVidError::ContentFetch(_) => Some(
                "Check your network connection. Pages run 1-604; a page outside that range is rejected by the API.".into(),
            ),
            QuranVidError::Alignment { .. } => Some(
                "The text and audio editions disagree for this page. Try again later or pick another recitation in quranvid.toml.".into(),
            ),
            QuranVidError::Render(_) => Some(
                "Ensure the configured font file exists and is a valid TTF/OTF with Arabic coverage (e.g. NotoSansArabic-Bold.ttf).".into(),
            ),
            QuranVidError::Ffmpeg(_) => Some(
                "Ensure FFmpeg is installed and on your PATH. Install via: brew install ffmpeg (macOS) or apt install ffmpeg (Linux).".into(),
            ),
            QuranVidError::ConfigNotFound(_) => Some(
                "Pass --config with a valid quranvid.toml path, or omit it to use built-in defaults.".into(),
            ),
            QuranVidError::BackgroundNotFound(_) => Some(
                "Provide a background image via --background or the [assets] section of quranvid.toml.".into(),
            ),
            QuranVidError::InvalidPage(_) => Some(
                "Enter a positive page number (1-604 in the standard mushaf).".into(),
            ),
            _ => None,
        }
    }
}

pub type QuranVidResult<T> = Result<T, QuranVidError>;
