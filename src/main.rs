use clap::Parser;
use tracing_subscriber::EnvFilter;

use claude_headless::cli::{self, Cli};
use claude_headless::HeadlessError;

fn main() {
    // stdout belongs to claude; our own diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Cli::parse();

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            match e.downcast_ref::<HeadlessError>() {
                Some(err) => {
                    if let Some(hint) = err.hint() {
                        eprintln!("{}", hint);
                    }
                    err.exit_code()
                }
                None => 1,
            }
        }
    };

    std::process::exit(exit_code);
}

fn run(args: Cli) -> anyhow::Result<i32> {
    Ok(cli::run(args)?)
}
