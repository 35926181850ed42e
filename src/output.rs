use anyhow::Result;

use crate::cli::OutputFormat;
use webtoon_namer::domain::models::ChapterName;
use webtoon_namer::workflows::{renamer, season_parser};

pub struct ChapterNamer {
    pub series_title: String,
    pub volume: Option<i64>,
    pub chapter: Option<i64>,
    pub extension: Option<String>,
    pub format: OutputFormat,
}

impl ChapterNamer {
    /// Parses the title and builds its filename. Explicit volume or chapter
    /// numbers take the place of the parsed ones. Parsed numbers beyond
    /// `i64::MAX` are capped there.
    pub fn name(&self, title: &str) -> ChapterName {
        let (volume, episode) = season_parser::parse_season_from_title(title);
        let volume = self
            .volume
            .unwrap_or_else(|| i64::try_from(volume).unwrap_or(i64::MAX));
        let chapter = self
            .chapter
            .unwrap_or_else(|| i64::try_from(episode).unwrap_or(i64::MAX));

        let mut name = ChapterName::new(&self.series_title, title, volume, chapter);
        name.filename = renamer::with_extension(&name.filename, self.extension.as_deref());
        name
    }

    pub fn render(&self, title: &str) -> Result<String> {
        let name = self.name(title);
        let line = match self.format {
            OutputFormat::Filename => name.filename,
            OutputFormat::Json => serde_json::to_string(&name)?,
            OutputFormat::Numbers => format!("{}\t{}", name.volume, name.chapter),
        };
        Ok(line)
    }
}
