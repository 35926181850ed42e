use serde::{Deserialize, Serialize};

use crate::workflows::renamer;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChapterName {
    pub title: String,
    pub volume: i64,
    pub chapter: i64,
    pub filename: String,
}

impl ChapterName {
    pub fn new(series_title: &str, title: &str, volume: i64, chapter: i64) -> Self {
        Self {
            title: title.to_string(),
            volume,
            chapter,
            filename: renamer::generate_filename(series_title, volume, chapter, title),
        }
    }
}
