use crate::config::Config;
use crate::error::{QuranVidError, QuranVidResult};
use crate::quran::QuranClient;
use crate::render::encoder::{self, AudioTrack, StillImageTrack};
use crate::render::VerseRenderer;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// The finished page artifact.
#[derive(Debug)]
pub struct PageVideo {
    pub path: PathBuf,
    pub duration_secs: f64,
    pub verse_count: usize,
}

/// Build the narrated video for one page.
///
/// Verses are processed strictly in page order: render the caption overlay,
/// download the narration, probe its duration, compose a duration-matched
/// segment. The segments are then concatenated into the output file. All
/// per-verse scratch files live in a temp directory owned here and are
/// removed when it drops, whether or not the encode succeeds.
pub fn assemble_page(page: u32, config: &Config, output: &Path) -> QuranVidResult<PageVideo> {
    let background = &config.assets.background;
    if !background.exists() {
        return Err(QuranVidError::BackgroundNotFound(background.clone()));
    }

    let client = QuranClient::new(&config.source);
    let verses = client.fetch_page(page)?;
    if verses.is_empty() {
        return Err(QuranVidError::ContentFetch(format!(
            "Page {page} has no ayahs"
        )));
    }

    let renderer = VerseRenderer::new(&config.assets.font, &config.text)?;
    let workdir = tempfile::Builder::new().prefix("quranvid-").tempdir()?;
    let background_track = StillImageTrack(background.clone());

    let mut segments = Vec::with_capacity(verses.len());
    for (index, verse) in verses.iter().enumerate() {
        let overlay_path = workdir.path().join(format!("verse_{page}_{index}.png"));
        let overlay = renderer.render(&verse.caption);
        overlay.save(&overlay_path).map_err(|e| {
            QuranVidError::Render(format!(
                "Failed to save caption image {}: {e}",
                overlay_path.display()
            ))
        })?;
        info!("Rendered caption image: {}", overlay_path.display());

        let audio_path = workdir.path().join(format!("verse_{page}_{index}.mp3"));
        download_audio(&verse.audio_url, &audio_path)?;
        info!("Downloaded narration: {}", audio_path.display());

        let duration_secs = encoder::probe_duration(&audio_path)?;
        let segment_path = workdir.path().join(format!("verse_{page}_{index}.mp4"));
        let segment = encoder::compose(
            &background_track,
            &StillImageTrack(overlay_path),
            &AudioTrack(audio_path),
            duration_secs,
            &segment_path,
            &config.video,
        )?;
        info!(
            "Composed segment {}/{} ({duration_secs:.2}s)",
            index + 1,
            verses.len()
        );
        segments.push(segment);
    }

    if let Err(e) = encoder::concat_segments(&segments, output) {
        error!("Failed to encode page {page}: {e}");
        return Err(e);
    }

    let duration_secs = segments.iter().map(|s| s.duration_secs).sum();
    info!("Video created: {}", output.display());

    Ok(PageVideo {
        path: output.to_path_buf(),
        duration_secs,
        verse_count: segments.len(),
    })
}

fn download_audio(url: &str, dest: &Path) -> QuranVidResult<()> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| QuranVidError::AudioDownload(format!("GET {url} failed: {e}")))?;

    let bytes = response
        .into_body()
        .read_to_vec()
        .map_err(|e| QuranVidError::AudioDownload(format!("Failed to read {url}: {e}")))?;

    std::fs::write(dest, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_background_fails_before_any_fetch() {
        let mut config = Config::default();
        config.assets.background = PathBuf::from("/nonexistent/background.jpg");
        let result = assemble_page(1, &config, Path::new("out.mp4"));
        assert!(matches!(
            result,
            Err(QuranVidError::BackgroundNotFound(_))
        ));
    }
}
