mod cli;
mod config;
mod output;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use config::Config;
use output::ChapterNamer;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,webtoon_namer=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let series_title =
        config::resolve_series_title(cli.series, config::series_title_from_env(), &config)?;

    let namer = ChapterNamer {
        series_title,
        volume: cli.volume,
        chapter: cli.chapter,
        extension: cli.extension.or(config.extension),
        format: cli.format,
    };

    let print_title = |title: &str| -> Result<()> {
        println!("{}", namer.render(title)?);
        Ok(())
    };

    if cli.titles.is_empty() {
        prompt::prompt_titles(print_title)?;
    } else {
        for title in &cli.titles {
            print_title(title)?;
        }
    }

    Ok(())
}
