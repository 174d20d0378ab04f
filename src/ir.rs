use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// The count is always the trailing field so keywords may contain spaces.
static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)[\s,]+(\d+)$").unwrap());
// A JSON array of objects (or an empty one), as opposed to a `[tag] keyword` line.
static JSON_ARRAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[\s*[{\]]").unwrap());

/// One row of search-frequency telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordStat {
    pub keyword: String,
    pub count: u64,
}

impl KeywordStat {
    pub fn new(keyword: impl Into<String>, count: u64) -> Self {
        Self {
            keyword: keyword.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSummary {
    pub total_searches: u64,
    pub keyword_count: usize,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid keyword JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: expected `keyword,count`, got {content:?}")]
    InvalidLine { line: usize, content: String },

    #[error("line {line}: count {value:?} is out of range")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: keyword is empty")]
    EmptyKeyword { line: usize },
}

/// Parses either a JSON array of `{keyword, count}` objects or one
/// `keyword<sep>count` pair per line. Lines may start with a bracketed tag
/// such as `[속보]`.
pub fn parse_keywords(input: &str) -> Result<Vec<KeywordStat>, ParseError> {
    let trimmed = input.trim_start();
    if JSON_ARRAY_RE.is_match(trimmed) {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let mut stats = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let caps = LINE_RE.captures(line).ok_or_else(|| ParseError::InvalidLine {
            line: line_no,
            content: line.to_string(),
        })?;
        let keyword = caps[1].trim().trim_matches('"').trim();
        if keyword.is_empty() {
            return Err(ParseError::EmptyKeyword { line: line_no });
        }
        let count = caps[2].parse::<u64>().map_err(|_| ParseError::InvalidCount {
            line: line_no,
            value: caps[2].to_string(),
        })?;
        stats.push(KeywordStat::new(keyword, count));
    }
    Ok(stats)
}

/// Sorts by count descending and keeps the first `limit` entries. Ties keep
/// their input order.
pub fn rank_keywords(stats: &[KeywordStat], limit: usize) -> Vec<KeywordStat> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Every other keyword, ranked; used for the "related terms" panel.
pub fn related_keywords(stats: &[KeywordStat], keyword: &str, limit: usize) -> Vec<KeywordStat> {
    let others: Vec<KeywordStat> = stats
        .iter()
        .filter(|stat| stat.keyword != keyword)
        .cloned()
        .collect();
    rank_keywords(&others, limit)
}

pub fn summarize(stats: &[KeywordStat]) -> KeywordSummary {
    KeywordSummary {
        total_searches: stats
            .iter()
            .fold(0u64, |total, stat| total.saturating_add(stat.count)),
        keyword_count: stats.len(),
    }
}
