use crate::config::SourceConfig;
use crate::error::{QuranVidError, QuranVidResult};
use serde::Deserialize;
use tracing::info;

/// One ayah's caption paired with the URL of its narration clip.
#[derive(Debug, Clone)]
pub struct VerseEntry {
    pub caption: String,
    pub audio_url: String,
}

/// An ayah as returned by the content source. The text edition fills `text`
/// and `number_in_surah`; the audio edition additionally fills `audio`.
#[derive(Debug, Deserialize)]
struct Ayah {
    #[serde(default)]
    text: String,
    #[serde(rename = "numberInSurah")]
    number_in_surah: u32,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Deserialize)]
struct PageData {
    ayahs: Vec<Ayah>,
}

#[derive(Deserialize)]
struct ApiResponse {
    data: PageData,
}

/// Blocking client for the page text/audio endpoints.
pub struct QuranClient {
    api_base: String,
    text_edition: String,
    audio_edition: String,
}

impl QuranClient {
    pub fn new(source: &SourceConfig) -> Self {
        Self {
            api_base: source.api_base.clone(),
            text_edition: source.text_edition.clone(),
            audio_edition: source.audio_edition.clone(),
        }
    }

    /// Fetch one page: text listing and audio listing, validated for equal
    /// length and paired positionally. Verse order is the page order of the
    /// API payload and is preserved.
    pub fn fetch_page(&self, page: u32) -> QuranVidResult<Vec<VerseEntry>> {
        let text_ayahs = self.fetch_edition(page, &self.text_edition)?;
        let audio_ayahs = self.fetch_edition(page, &self.audio_edition)?;
        let verses = pair_verses(page, text_ayahs, audio_ayahs)?;
        info!("Fetched {} ayahs for page {page}", verses.len());
        Ok(verses)
    }

    fn fetch_edition(&self, page: u32, edition: &str) -> QuranVidResult<Vec<Ayah>> {
        let url = format!("{}/page/{page}/{edition}", self.api_base);
        let response = ureq::get(&url)
            .call()
            .map_err(|e| QuranVidError::ContentFetch(format!("GET {url} failed: {e}")))?;

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| QuranVidError::ContentFetch(format!("Failed to read {url}: {e}")))?;

        let parsed: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| QuranVidError::ContentFetch(format!("Malformed JSON from {url}: {e}")))?;

        Ok(parsed.data.ayahs)
    }
}

/// Derive the on-screen caption for one ayah.
///
/// The first ayah of a surah arrives with the basmala prepended, which the
/// narration does not repeat, so its first four words are dropped. Every
/// caption ends with the ornate verse-number marker, even when the stripped
/// body is empty.
fn caption(text: &str, number_in_surah: u32) -> String {
    let body = if number_in_surah == 1 {
        text.split_whitespace().skip(4).collect::<Vec<_>>().join(" ")
    } else {
        text.to_string()
    };
    format!("{body} \u{FD3F}{number_in_surah}\u{FD3E}")
}

fn pair_verses(
    page: u32,
    text_ayahs: Vec<Ayah>,
    audio_ayahs: Vec<Ayah>,
) -> QuranVidResult<Vec<VerseEntry>> {
    if text_ayahs.len() != audio_ayahs.len() {
        return Err(QuranVidError::Alignment {
            page,
            texts: text_ayahs.len(),
            audios: audio_ayahs.len(),
        });
    }

    text_ayahs
        .into_iter()
        .zip(audio_ayahs)
        .map(|(text_ayah, audio_ayah)| {
            let audio_url = audio_ayah.audio.ok_or_else(|| {
                QuranVidError::ContentFetch(format!(
                    "Audio edition entry {} on page {page} carries no audio URL",
                    audio_ayah.number_in_surah
                ))
            })?;
            Ok(VerseEntry {
                caption: caption(&text_ayah.text, text_ayah.number_in_surah),
                audio_url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayah(text: &str, number_in_surah: u32, audio: Option<&str>) -> Ayah {
        Ayah {
            text: text.into(),
            number_in_surah,
            audio: audio.map(String::from),
        }
    }

    #[test]
    fn test_caption_first_ayah_drops_basmala_words() {
        assert_eq!(caption("A B C D E F", 1), "E F \u{FD3F}1\u{FD3E}");
    }

    #[test]
    fn test_caption_later_ayah_unmodified() {
        assert_eq!(caption("X Y", 2), "X Y \u{FD3F}2\u{FD3E}");
    }

    #[test]
    fn test_caption_keeps_marker_when_body_strips_empty() {
        // Four words or fewer on ayah 1: the body vanishes, the marker stays.
        assert_eq!(caption("A B C D", 1), " \u{FD3F}1\u{FD3E}");
        assert_eq!(caption("", 5), " \u{FD3F}5\u{FD3E}");
    }

    #[test]
    fn test_pair_verses_length_mismatch_is_alignment_error() {
        let texts: Vec<Ayah> = (1..=5).map(|n| ayah("t", n, None)).collect();
        let audios: Vec<Ayah> = (1..=4).map(|n| ayah("", n, Some("u"))).collect();
        let result = pair_verses(7, texts, audios);
        match result {
            Err(QuranVidError::Alignment { page, texts, audios }) => {
                assert_eq!(page, 7);
                assert_eq!(texts, 5);
                assert_eq!(audios, 4);
            }
            other => panic!("expected Alignment error, got {other:?}"),
        }
    }

    #[test]
    fn test_pair_verses_positional_and_ordered() {
        let texts = vec![ayah("first words go here extra", 1, None), ayah("second", 2, None)];
        let audios = vec![
            ayah("", 1, Some("http://a/1.mp3")),
            ayah("", 2, Some("http://a/2.mp3")),
        ];
        let verses = pair_verses(1, texts, audios).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].caption, "extra \u{FD3F}1\u{FD3E}");
        assert_eq!(verses[0].audio_url, "http://a/1.mp3");
        assert_eq!(verses[1].caption, "second \u{FD3F}2\u{FD3E}");
        assert_eq!(verses[1].audio_url, "http://a/2.mp3");
    }

    #[test]
    fn test_pair_verses_missing_audio_url() {
        let texts = vec![ayah("t", 3, None)];
        let audios = vec![ayah("", 3, None)];
        assert!(matches!(
            pair_verses(1, texts, audios),
            Err(QuranVidError::ContentFetch(_))
        ));
    }

    #[test]
    fn test_parse_page_response() {
        let json = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "number": 604,
                "ayahs": [
                    {
                        "number": 6231,
                        "audio": "https://cdn.islamic.network/quran/audio/64/ar.abdurrahmaansudais/6231.mp3",
                        "text": "...",
                        "numberInSurah": 4
                    },
                    {
                        "number": 6232,
                        "audio": "https://cdn.islamic.network/quran/audio/64/ar.abdurrahmaansudais/6232.mp3",
                        "text": "...",
                        "numberInSurah": 5
                    }
                ]
            }
        }"#;
        let parsed: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.ayahs.len(), 2);
        assert_eq!(parsed.data.ayahs[0].number_in_surah, 4);
        assert!(parsed.data.ayahs[1].audio.as_deref().unwrap().ends_with("6232.mp3"));
    }

    #[test]
    fn test_parse_text_edition_response_without_audio() {
        let json = r#"{"data": {"ayahs": [{"text": "abc", "numberInSurah": 1}]}}"#;
        let parsed: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.ayahs[0].text, "abc");
        assert!(parsed.data.ayahs[0].audio.is_none());
    }
}
