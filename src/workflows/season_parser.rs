use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Tried in order; the first pattern that matches anywhere in the title wins.
static SEASON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\[Season\s+([0-9]+)\]", // [Season 2]
        r"(?i)\(S([0-9]+)\)",         // (S2)
        r"(?i)Season\s+([0-9]+)",     // Season 2
        r"(?i)S([0-9]+)",             // S2
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static EPISODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Ep\.?\s*([0-9]+)",   // Ep. 201, Ep 201, Ep.201
        r"(?i)Episode\s+([0-9]+)", // Episode 201
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Extracts `(volume, episode)` from a chapter title such as
/// `"[Season 2] Ep. 201"` or `"(S3) Episode 234"`.
///
/// The season maps to the volume. Either number falls back to 1 when the
/// title carries no recognizable marker, so this never fails.
pub fn parse_season_from_title(title: &str) -> (u64, u64) {
    let volume = first_number(&SEASON_PATTERNS, title).unwrap_or(1);
    let episode = first_number(&EPISODE_PATTERNS, title).unwrap_or(1);

    debug!(title, volume, episode, "parsed chapter title");
    (volume, episode)
}

/// Returns the captured number of the first pattern that matches.
///
/// Numbers too large for a `u64` saturate at `u64::MAX`.
fn first_number(patterns: &[Regex], title: &str) -> Option<u64> {
    let (re, captures) = patterns
        .iter()
        .find_map(|re| re.captures(title).map(|captures| (re, captures)))?;
    let digits = captures.get(1)?.as_str();
    // The capture is always ASCII digits, so parsing only fails on overflow
    let number = digits.parse().unwrap_or(u64::MAX);

    debug!(pattern = re.as_str(), number, "marker matched");
    Some(number)
}
