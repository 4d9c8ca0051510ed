use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use jack_compiler::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::tokenizer::Tokenizer,
    Position,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Print the tokens of a source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Prefix each token with its category
    #[arg(short, long)]
    kinds: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<usize, Error> {
    let name = cli.file.to_string_lossy().to_string();
    let file = File::open(&cli.file).map_err(|e| io_error(e, &name))?;

    let mut tokenizer = Tokenizer::new(BufReader::new(file), Some(name.clone()))?;
    let mut stdout = io::stdout().lock();
    let mut count = 0;

    while tokenizer.has_more_tokens() {
        tokenizer.advance()?;
        let token = tokenizer.token()?;

        let written = if cli.kinds {
            writeln!(stdout, "{}", token)
        } else {
            writeln!(stdout, "{}", token.value)
        };
        written.map_err(|e| io_error(e, &name))?;
        count += 1;
    }

    Ok(count)
}

fn io_error(error: io::Error, file: &str) -> Error {
    Error::new(
        ErrorImpl::Io {
            message: error.to_string(),
        },
        Position(0, std::rc::Rc::new(file.to_string()), 0),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    debug!("tokenizing {:?}", cli.file);

    match run(&cli) {
        Ok(count) => {
            info!(count, "tokenized");
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &cli.file);
            ExitCode::FAILURE
        }
    }
}
