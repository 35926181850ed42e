/// Builds a Kavita-compatible chapter filename:
/// `"<series> Vol.<volume> Ch.<chapter> - <chapter title>"`.
///
/// Both titles are sanitized. Volume and chapter are rendered as given,
/// including zero or negative values.
pub fn generate_filename(
    series_title: &str,
    volume: i64,
    chapter: i64,
    chapter_title: &str,
) -> String {
    format!(
        "{} Vol.{} Ch.{} - {}",
        sanitize_filename(series_title),
        volume,
        chapter,
        sanitize_filename(chapter_title)
    )
}

/// Replaces each character that is illegal in common filesystem paths with
/// `_`, then trims surrounding whitespace.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches(is_trimmable)
        .to_string()
}

// Unicode whitespace plus the file, group, record and unit separators.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Appends `.<extension>` to a generated filename. A leading dot on the
/// extension is ignored and a blank extension leaves the name untouched.
pub fn with_extension(filename: &str, extension: Option<&str>) -> String {
    match extension.map(|ext| ext.trim().trim_start_matches('.')) {
        Some(ext) if !ext.is_empty() => format!("{filename}.{}", sanitize_filename(ext)),
        _ => filename.to_string(),
    }
}
