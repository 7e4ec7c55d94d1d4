use std::env;
use std::path::Path;
use std::process::ExitCode;

use myshell::config::ShellConfig;
use myshell::core::ShellState;
use myshell::error::ShellError;
use myshell::flags::{program_name, Flags};
use myshell::highlight::Highlighter;
use myshell::input::{BatchInput, InteractiveInput};
use myshell::process::signal;
use myshell::shell::Shell;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(|arg0| program_name(arg0))
        .unwrap_or("myshell")
        .to_string();

    let mut flags = Flags::new();
    if let Err(e) = flags.parse(args.get(1..).unwrap_or_default()) {
        eprintln!(
            "{} command line error; {}\nusage: {} [<scriptfile>]",
            program, e, program
        );
        return ExitCode::from(1);
    }

    if flags.is_set("help") {
        flags.print_help(&program);
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("myshell {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging(&flags);

    match run(&flags) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}", Highlighter::new().error(&e.to_string()));
            ExitCode::from(1)
        }
    }
}

fn init_logging(flags: &Flags) {
    let level = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(flags: &Flags) -> Result<u8, ShellError> {
    let config = ShellConfig::from_flags(flags);
    let state = ShellState::from_env(&config)?;
    signal::suppress_for_shell()?;

    match flags.script() {
        Some(script) => {
            let input = BatchInput::open(Path::new(script))?;
            Shell::new(input, state, config).run()
        }
        None => {
            let input = InteractiveInput::new(&config)?;
            Shell::new(input, state, config).run()
        }
    }
}
