use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, ArgGroup, Parser};
use matlang::{
    config::{Config, InputSource},
    run,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// matlang is an indentation-sensitive scripting language with built-in
/// matrix arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "socket", "string"])))]
struct Args {
    /// Run the program stored in a file.
    #[arg(long, visible_alias = "f", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Accept one connection on a local port and run what it sends.
    #[arg(long, visible_alias = "sc", value_name = "PORT")]
    socket: Option<u16>,

    /// Run the given program text.
    #[arg(long, visible_alias = "s", value_name = "TEXT")]
    string: Option<String>,

    /// Print the parsed syntax tree before evaluating it.
    #[arg(long)]
    ast: bool,

    /// Print help.
    #[arg(long, visible_alias = "h", action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn into_config(self) -> Option<Config> {
        let input = match (self.file, self.socket, self.string) {
            (Some(path), None, None) => InputSource::File(path),
            (None, Some(port), None) => InputSource::Socket(port),
            (None, None, Some(text)) => InputSource::Text(text),
            _ => return None,
        };
        Some(Config::new(input).with_ast_dump(self.ast))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                                                   EnvFilter::new("warn")
                                                                               }))
                             .with_writer(std::io::stderr)
                             .init();

    let Some(config) = Args::parse().into_config() else {
        return ExitCode::FAILURE;
    };

    match run(&config) {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(target: "matlang::cli", error = %e, "Run failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
