use crate::config::VideoConfig;
use crate::error::{QuranVidError, QuranVidResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

// ---------------------------------------------------------------------------
// Track model
// ---------------------------------------------------------------------------

/// A still image held on screen for a segment's full duration.
#[derive(Debug, Clone)]
pub struct StillImageTrack(pub PathBuf);

/// An audio file carrying one verse's narration.
#[derive(Debug, Clone)]
pub struct AudioTrack(pub PathBuf);

/// One encoded audio+video segment of the page timeline.
#[derive(Debug, Clone)]
pub struct Segment {
    pub path: PathBuf,
    pub duration_secs: f64,
}

// ---------------------------------------------------------------------------
// FFmpeg operations
// ---------------------------------------------------------------------------

/// Query a media file's duration via ffprobe. Returns seconds.
pub fn probe_duration(path: &Path) -> QuranVidResult<f64> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "csv=p=0",
        ])
        .arg(path.as_os_str())
        .output()
        .map_err(|e| QuranVidError::Ffmpeg(format!("Failed to run ffprobe: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(QuranVidError::Ffmpeg(format!("ffprobe failed: {stderr}")));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .trim()
        .parse::<f64>()
        .map_err(|e| QuranVidError::Ffmpeg(format!("Failed to parse ffprobe duration: {e}")))
}

/// Compose one segment: the background still with the overlay centered on
/// top, both held for `duration_secs`, muxed with the narration audio and
/// encoded with the fixed target settings.
pub fn compose(
    background: &StillImageTrack,
    overlay: &StillImageTrack,
    audio: &AudioTrack,
    duration_secs: f64,
    output: &Path,
    video: &VideoConfig,
) -> QuranVidResult<Segment> {
    let args = compose_args(&background.0, &overlay.0, &audio.0, duration_secs, output, video);
    debug!(
        "Composing {:.3}s segment to {}",
        duration_secs,
        output.display()
    );
    run_ffmpeg(&args, "segment compose")?;
    Ok(Segment {
        path: output.to_path_buf(),
        duration_secs,
    })
}

fn compose_args(
    background: &Path,
    overlay: &Path,
    audio: &Path,
    duration_secs: f64,
    output: &Path,
    video: &VideoConfig,
) -> Vec<String> {
    let mut args: Vec<String> = vec!["-y".into()];
    // Inputs: looped background (0), looped overlay (1), narration (2)
    args.extend(["-loop".into(), "1".into(), "-i".into()]);
    args.push(background.display().to_string());
    args.extend(["-loop".into(), "1".into(), "-i".into()]);
    args.push(overlay.display().to_string());
    args.push("-i".into());
    args.push(audio.display().to_string());

    args.extend([
        "-filter_complex".into(),
        "[0:v][1:v]overlay=(W-w)/2:(H-h)/2:format=auto[vout]".into(),
        "-map".into(),
        "[vout]".into(),
        "-map".into(),
        "2:a".into(),
        "-t".into(),
        format!("{duration_secs:.3}"),
        "-r".into(),
        video.fps.to_string(),
        "-c:v".into(),
        "libx264".into(),
        "-preset".into(),
        video.preset.clone(),
        "-b:v".into(),
        video.bitrate.clone(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-threads".into(),
        video.threads.to_string(),
        "-c:a".into(),
        "aac".into(),
    ]);
    args.push(output.display().to_string());
    args
}

/// Concatenate segments in order into one continuous timeline using the
/// concat demuxer. Segments already carry the target encode settings, so the
/// streams are copied, not re-encoded; there is no cross-fade.
pub fn concat_segments(segments: &[Segment], output_path: &Path) -> QuranVidResult<()> {
    debug!(
        "Concatenating {} segments to {}",
        segments.len(),
        output_path.display()
    );
    match segments {
        [] => Err(QuranVidError::Ffmpeg("No segments to concatenate".into())),
        [single] => {
            std::fs::copy(&single.path, output_path)?;
            Ok(())
        }
        _ => {
            let concat_dir = output_path.parent().unwrap_or(Path::new("."));
            let concat_list_path = concat_dir.join(".quranvid-concat-list.txt");
            std::fs::write(&concat_list_path, concat_list(segments))?;

            let args = vec![
                "-y".to_string(),
                "-f".into(),
                "concat".into(),
                "-safe".into(),
                "0".into(),
                "-i".into(),
                concat_list_path.display().to_string(),
                "-c".into(),
                "copy".into(),
                output_path.display().to_string(),
            ];
            let result = run_ffmpeg(&args, "concat");

            let _ = std::fs::remove_file(&concat_list_path);
            result
        }
    }
}

fn concat_list(segments: &[Segment]) -> String {
    let mut content = String::new();
    for segment in segments {
        content.push_str(&format!("file '{}'\n", segment.path.display()));
    }
    content
}

fn run_ffmpeg(args: &[String], context: &str) -> QuranVidResult<()> {
    let output = Command::new("ffmpeg")
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| QuranVidError::Ffmpeg(format!("Failed to spawn ffmpeg for {context}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(QuranVidError::Ffmpeg(format!(
            "FFmpeg {context} failed: {}",
            stderr.lines().last().unwrap_or("unknown error")
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
