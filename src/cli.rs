use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Print the generated filename
    Filename,
    /// Print one JSON object per title
    Json,
    /// Print the volume and chapter numbers separated by a tab
    Numbers,
}

#[derive(Parser)]
#[command(name = "webtoon-namer")]
#[command(about = "Parse season/episode numbers from webtoon chapter titles and build Kavita-compatible filenames")]
pub struct Cli {
    /// Chapter titles to process. Prompts for titles when none are given
    pub titles: Vec<String>,

    /// Series title used as the filename prefix
    #[arg(long)]
    pub series: Option<String>,

    /// Use this volume number instead of the one parsed from the title
    #[arg(long, allow_negative_numbers = true)]
    pub volume: Option<i64>,

    /// Use this chapter number instead of the one parsed from the title
    #[arg(long, allow_negative_numbers = true)]
    pub chapter: Option<i64>,

    /// File extension appended to the generated filename
    #[arg(long)]
    pub extension: Option<String>,

    /// Output format
    #[arg(long, default_value = "filename")]
    pub format: OutputFormat,

    /// Path to a config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["webtoon-namer", "Ep. 45"]).unwrap();
        assert_eq!(cli.titles, vec!["Ep. 45".to_string()]);
        assert_eq!(cli.format, OutputFormat::Filename);
        assert_eq!(cli.series, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "webtoon-namer",
            "--series",
            "Tower of God",
            "--volume",
            "-1",
            "--chapter",
            "0",
            "--format",
            "json",
            "--extension",
            "cbz",
            "-v",
            "[Season 2] Ep. 201",
        ])
        .unwrap();
        assert_eq!(cli.series.as_deref(), Some("Tower of God"));
        assert_eq!(cli.volume, Some(-1));
        assert_eq!(cli.chapter, Some(0));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.extension.as_deref(), Some("cbz"));
        assert!(cli.verbose);
        assert_eq!(cli.titles, vec!["[Season 2] Ep. 201".to_string()]);
    }

    #[test]
    fn test_parse_without_titles() {
        let cli = Cli::try_parse_from(["webtoon-namer", "--series", "X"]).unwrap();
        assert!(cli.titles.is_empty());
    }
}
