use clap::{Parser as ClapParser, ValueEnum};
use lox_lang::cli::{self, CliError, Emit, RunOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "lox")]
#[command(about = "Lox - scan and parse expressions, printing their syntax tree")]
#[command(version)]
struct Cli {
    /// Script to run (starts an interactive prompt when omitted)
    script: Option<PathBuf>,

    /// What to print for each input
    #[arg(short, long, value_enum, default_value_t = EmitArg::Ast)]
    emit: EmitArg,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum EmitArg {
    Ast,
    Rpn,
    Tokens,
    Json,
}

impl From<EmitArg> for Emit {
    fn from(arg: EmitArg) -> Self {
        match arg {
            EmitArg::Ast => Emit::Ast,
            EmitArg::Rpn => Emit::Rpn,
            EmitArg::Tokens => Emit::Tokens,
            EmitArg::Json => Emit::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(cli::EXIT_USAGE);
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);

    let options = RunOptions {
        emit: cli.emit.into(),
        pretty: cli.pretty,
    };

    let result = match cli.script {
        Some(path) => cli::run_file(&path, &options, &mut io::stdout(), &mut io::stderr()),
        None if !atty::is(atty::Stream::Stdin) => run_stdin(&options),
        None => cli::run_prompt(
            io::stdin().lock(),
            &options,
            &mut io::stdout(),
            &mut io::stderr(),
        ),
    };

    if let Err(e) = result {
        if !matches!(e, CliError::Reported(_)) {
            eprintln!("{}", e);
        }
        process::exit(e.exit_code());
    }
}

fn run_stdin(options: &RunOptions) -> Result<(), CliError> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    cli::run_source(&source, options, &mut io::stdout(), &mut io::stderr())
}
