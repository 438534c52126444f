use crate::error::{QuranVidError, QuranVidResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub video: VideoConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote content source: one text edition and one audio (recitation) edition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_text_edition")]
    pub text_edition: String,
    #[serde(default = "default_audio_edition")]
    pub audio_edition: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_bitrate")]
    pub bitrate: String,
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Encoder thread cap; encoding is the only concurrent stage.
    #[serde(default = "default_threads")]
    pub threads: u32,
}

/// Caption layout constants. These are fixed per run, not per verse.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextConfig {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_line_pitch")]
    pub line_pitch: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetConfig {
    #[serde(default = "default_background")]
    pub background: PathBuf,
    #[serde(default = "default_font")]
    pub font: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

// Defaults
fn default_api_base() -> String {
    "https://api.alquran.cloud/v1".into()
}
fn default_text_edition() -> String {
    "quran-simple".into()
}
fn default_audio_edition() -> String {
    "ar.abdurrahmaansudais".into()
}
fn default_fps() -> u32 {
    10
}
fn default_bitrate() -> String {
    "10000k".into()
}
fn default_preset() -> String {
    "medium".into()
}
fn default_threads() -> u32 {
    16
}
fn default_canvas_width() -> u32 {
    1280
}
fn default_canvas_height() -> u32 {
    1280
}
fn default_font_size() -> f32 {
    100.0
}
fn default_line_pitch() -> u32 {
    120
}
fn default_margin() -> u32 {
    20
}
fn default_background() -> PathBuf {
    "background.jpg".into()
}
fn default_font() -> PathBuf {
    "fonts/NotoSansArabic-Bold.ttf".into()
}
fn default_output_dir() -> PathBuf {
    ".".into()
}
fn default_log_file() -> PathBuf {
    "quranvid.log".into()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            text_edition: default_text_edition(),
            audio_edition: default_audio_edition(),
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            bitrate: default_bitrate(),
            preset: default_preset(),
            threads: default_threads(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            font_size: default_font_size(),
            line_pitch: default_line_pitch(),
            margin: default_margin(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            font: default_font(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, else `./quranvid.toml` if present,
    /// else built-in defaults. An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> QuranVidResult<Config> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(QuranVidError::ConfigNotFound(p.to_path_buf()));
                }
                Self::parse_file(p)
            }
            None => {
                let default_path = Path::new("quranvid.toml");
                if default_path.exists() {
                    Self::parse_file(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn parse_file(path: &Path) -> QuranVidResult<Config> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| QuranVidError::ConfigParse(e.to_string()))
    }

    /// Deterministic output file name for a page, under the output directory.
    pub fn output_path_for_page(&self, page: u32) -> PathBuf {
        self.output
            .directory
            .join(format!("quran_page_{page}_video.mp4"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.api_base, "https://api.alquran.cloud/v1");
        assert_eq!(config.source.text_edition, "quran-simple");
        assert_eq!(config.source.audio_edition, "ar.abdurrahmaansudais");
        assert_eq!(config.video.fps, 10);
        assert_eq!(config.video.bitrate, "10000k");
        assert_eq!(config.video.preset, "medium");
        assert_eq!(config.video.threads, 16);
        assert_eq!(config.text.canvas_width, 1280);
        assert_eq!(config.text.canvas_height, 1280);
        assert!((config.text.font_size - 100.0).abs() < f32::EPSILON);
        assert_eq!(config.text.line_pitch, 120);
        assert_eq!(config.text.margin, 20);
        assert_eq!(config.assets.background, PathBuf::from("background.jpg"));
        assert_eq!(config.output.log_file, PathBuf::from("quranvid.log"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[source]
api_base = "http://localhost:8080/v1"
audio_edition = "ar.alafasy"

[video]
fps = 24
bitrate = "4000k"

[text]
canvas_width = 1920
canvas_height = 1080
font_size = 72.0

[assets]
background = "assets/bg.png"
font = "assets/arabic.ttf"

[output]
directory = "./out"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.source.api_base, "http://localhost:8080/v1");
        assert_eq!(config.source.audio_edition, "ar.alafasy");
        // untouched sections keep their defaults
        assert_eq!(config.source.text_edition, "quran-simple");
        assert_eq!(config.video.fps, 24);
        assert_eq!(config.video.bitrate, "4000k");
        assert_eq!(config.video.preset, "medium");
        assert_eq!(config.text.canvas_width, 1920);
        assert_eq!(config.text.line_pitch, 120);
        assert_eq!(config.assets.background, PathBuf::from("assets/bg.png"));
        assert_eq!(config.output.directory, PathBuf::from("./out"));
    }

    #[test]
    fn test_parse_empty_config_is_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.video.fps, 10);
        assert_eq!(config.text.margin, 20);
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(toml::from_str::<Config>("not valid toml [[[").is_err());
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/quranvid.toml")));
        assert!(matches!(result, Err(QuranVidError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quranvid.toml");
        std::fs::write(&path, "[video]\nfps = 30\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.video.fps, 30);
        assert_eq!(config.video.bitrate, "10000k");
    }

    #[test]
    fn test_output_path_for_page() {
        let mut config = Config::default();
        config.output.directory = PathBuf::from("videos");
        assert_eq!(
            config.output_path_for_page(255),
            PathBuf::from("videos/quran_page_255_video.mp4")
        );
    }
}
