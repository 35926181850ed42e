use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Reads chapter titles from the terminal until an empty line, Ctrl-C or
/// Ctrl-D, handing each one to `handle` as it is entered.
pub fn prompt_titles(mut handle: impl FnMut(&str) -> Result<()>) -> Result<()> {
    eprintln!("Enter chapter titles, one per line (empty line to finish):");
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let title = line.trim();
                if title.is_empty() {
                    return Ok(());
                }
                rl.add_history_entry(title)?;
                handle(title)?;
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}
