use serde::Deserialize;
use std::error::Error;

/// Wikipedia REST endpoint returning a random page summary.
pub const SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/random/summary";

/// Longest body we hand to the session; keeps the sample on one
/// terminal line at the usual 80-column width.
pub const MAX_BODY_CHARS: usize = 80;

const FALLBACK_BODY: &str = "Failed to retrieve data";

/// The (title, body) pair fetched once per run to serve as the typing
/// target. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub title: String,
    pub body: String,
}

impl Sample {
    /// Degenerate sample used when acquisition fails. The failure is
    /// absorbed into the data model so the typing test always runs; the
    /// user can type the error string itself.
    pub fn fallback() -> Self {
        Self {
            title: String::new(),
            body: FALLBACK_BODY.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    title: String,
    extract: String,
}

/// Fetch a random page summary. One blocking request, no retry; any
/// transport, status, or parse error yields `Sample::fallback()`.
pub fn fetch_sample() -> Sample {
    fetch_sample_from(SUMMARY_URL)
}

pub fn fetch_sample_from(url: &str) -> Sample {
    try_fetch(url).unwrap_or_else(|_| Sample::fallback())
}

fn try_fetch(url: &str) -> Result<Sample, Box<dyn Error>> {
    let resp = reqwest::blocking::get(url)?.error_for_status()?;
    let text = resp.text()?;
    Ok(parse_summary(&text)?)
}

fn parse_summary(payload: &str) -> Result<Sample, serde_json::Error> {
    let summary: SummaryResponse = serde_json::from_str(payload)?;
    Ok(Sample {
        title: summary.title,
        body: truncate_body(&summary.extract, MAX_BODY_CHARS),
    })
}

/// Cut `text` down to `max_chars`, breaking at a word boundary and
/// appending a `"..."` marker. Text within budget passes through.
fn truncate_body(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let budget = max_chars.saturating_sub(3);
    let head: String = text.chars().take(budget).collect();
    let cut = match head.rfind(' ') {
        Some(idx) if idx > 0 => &head[..idx],
        _ => head.as_str(),
    };
    format!("{}...", cut.trim_end())
}
