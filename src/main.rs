//! `spellrank` command line entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use spellrank::cli::args::SpellRankArgs;
use spellrank::cli::commands::execute_command;

/// Map the `-q`/`-v` verbosity to a log filter. `RUST_LOG` still wins.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() -> ExitCode {
    let args = SpellRankArgs::parse();
    init_logging(args.verbosity());

    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("spellrank: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_verbosity() {
        assert_eq!(log_level(0), LevelFilter::Error);
        assert_eq!(log_level(1), LevelFilter::Warn);
        assert_eq!(log_level(3), LevelFilter::Debug);
        assert_eq!(log_level(7), LevelFilter::Trace);
    }
}
