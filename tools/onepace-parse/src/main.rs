use clap::Parser;
use onepace_core::parser::FilenameParser;
use onepace_core::{Episode, Taxonomy};
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Parse One Pace file names read from stdin, one JSON object per line.
#[derive(Parser)]
#[command(name = "onepace-parse", version)]
struct Args {
    /// Skip arc resolution and only report the parsed fields
    #[arg(long)]
    no_resolve: bool,
}

#[derive(Debug, Serialize)]
pub struct ParseOutput {
    pub input: String,
    pub episode: Option<Episode>,
    pub saga: Option<String>,
    pub arc: Option<String>,
    pub saga_position: Option<usize>,
    pub arc_position: Option<usize>,
    pub error: Option<String>,
}

impl ParseOutput {
    fn parsed(input: &str, episode: Episode) -> Self {
        Self {
            input: input.to_string(),
            episode: Some(episode),
            saga: None,
            arc: None,
            saga_position: None,
            arc_position: None,
            error: None,
        }
    }

    fn failed(input: &str, error: String) -> Self {
        Self {
            input: input.to_string(),
            episode: None,
            saga: None,
            arc: None,
            saga_position: None,
            arc_position: None,
            error: Some(error),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let parser = FilenameParser::new().map_err(io::Error::other)?;
    let taxonomy = Taxonomy::one_pace();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = match parser.parse_name(line, line) {
            Err(e) => ParseOutput::failed(line, e.to_string()),
            Ok(episode) if args.no_resolve => ParseOutput::parsed(line, episode),
            Ok(episode) => describe(&taxonomy, line, episode),
        };

        let json = serde_json::to_string(&output).map_err(io::Error::other)?;
        writeln!(stdout, "{json}")?;
    }

    Ok(())
}

/// Looks the episode's label up without attaching it.
fn describe(taxonomy: &Taxonomy, line: &str, episode: Episode) -> ParseOutput {
    match taxonomy.lookup(episode.arc_label()) {
        Some(location) => ParseOutput {
            input: line.to_string(),
            saga: taxonomy.saga(location).map(|s| s.display_name()),
            arc: taxonomy.arc(location).map(|a| a.display_name()),
            saga_position: Some(location.saga_position()),
            arc_position: Some(location.arc_position()),
            episode: Some(episode),
            error: None,
        },
        None => {
            let error = format!("no matching arc for {:?}", episode.arc_label());
            ParseOutput {
                error: Some(error),
                ..ParseOutput::parsed(line, episode)
            }
        }
    }
}
