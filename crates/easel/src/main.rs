//! Easel - A paint program shell
//!
//! Usage: easel [OPTIONS]

use std::env;
use std::process::ExitCode;

use easel_shell::{dump_layout, parse_size, Shell, ShellConfig, ShellError};
use thiserror::Error;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Run(ShellConfig),
    DumpLayout { width: u32, height: u32 },
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("easel");

    let command = match parse_args(&args[1.min(args.len())..]) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Help => {
            print_usage(program);
            Ok(())
        }
        Command::Version => {
            println!("Easel {}", VERSION);
            Ok(())
        }
        Command::DumpLayout { width, height } => dump_layout(width, height).map(|json| println!("{}", json)),
        Command::Run(config) => run_shell(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Errors from the command line itself
#[derive(Debug, Error)]
enum ArgError {
    #[error("Unknown option '{0}'")]
    Unknown(String),
    #[error("{0} expects a value")]
    MissingValue(&'static str),
    #[error(transparent)]
    Size(ShellError),
}

fn parse_args(args: &[String]) -> Result<Command, ArgError> {
    let mut config = ShellConfig::default();
    let mut dump = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--size" => {
                let value = iter.next().ok_or(ArgError::MissingValue("--size"))?;
                let (width, height) = parse_size(value).map_err(ArgError::Size)?;
                config.width = width;
                config.height = height;
            }
            "--debug-hits" => config.debug_hits = true,
            "--dump-layout" => dump = true,
            other => return Err(ArgError::Unknown(other.to_string())),
        }
    }

    if dump {
        Ok(Command::DumpLayout {
            width: config.width,
            height: config.height,
        })
    } else {
        Ok(Command::Run(config))
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Easel {} - A paint program shell

USAGE:
    {} [OPTIONS]

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version information
    --size <WxH>        Window size (default 1024x768)
    --debug-hits        Start with the hit-test overlay on (toggle with F1)
    --dump-layout       Print the layout at the given size as JSON and exit

EXAMPLES:
    {}
    {} --size 800x600 --debug-hits
    {} --dump-layout --size 640x480

"#,
        VERSION, program, program, program, program
    );
}

/// Open the editor window
fn run_shell(config: ShellConfig) -> Result<(), ShellError> {
    log::info!("Easel {} starting", VERSION);
    let mut shell = Shell::new(config)?;
    shell.run()
}
