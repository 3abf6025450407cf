use clap::Parser;
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unary_tm::{
    analyze, explanation, Config, ConfigLoader, Halt, ProgramManager, TuringMachine,
};

/// Runs a single-tape Turing machine and prints its unary encoding.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  tm-cli --config machines/ends-in-one.txt --input 0101
  tm-cli --program even-length --input 01 --input 011
  printf '0\\n01\\n' | tm-cli --program ends-in-one --json")]
struct Cli {
    /// Path to a machine configuration file.
    #[clap(short, long, conflicts_with = "program")]
    config: Option<PathBuf>,

    /// Name of a built-in machine.
    #[clap(short, long)]
    program: Option<String>,

    /// The input strings to run. When omitted, inputs are read from stdin.
    #[clap(short, long)]
    input: Vec<String>,

    /// List the built-in machines.
    #[clap(short, long)]
    list: bool,

    /// Print one JSON report per input instead of text.
    #[clap(long)]
    json: bool,

    /// Print each step of the execution.
    #[clap(short = 'd', long)]
    debug: bool,
}

/// The result of running one input, as printed by `--json`.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    accepted: bool,
    halt: &'a Halt,
    steps: usize,
    tape: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run_cli(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Sends diagnostics and step traces to stderr so stdout only carries results.
fn init_tracing(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_cli(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = match (&cli.config, &cli.program) {
        (Some(path), _) => ConfigLoader::load_config(path)?,
        (None, Some(name)) => ProgramManager::get_program_by_name(name)?.config.clone(),
        (None, None) => {
            print_programs()?;
            return Ok(());
        }
    };

    if cli.list {
        print_programs()?;
    }

    execute(cli, &config)
}

/// Encodes the machine, then runs it over every input.
fn execute(cli: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    // The encoding is validated before anything runs, so an unknown name stops here.
    let encoded = config.encode()?;
    let table = config.table()?;

    for warning in analyze(&table) {
        tracing::warn!("{warning}");
    }

    if !cli.json {
        println!("Encoding Explanations:");
        for (label, code) in explanation() {
            println!("{label}: {code}");
        }
        println!();
        println!("Encoded Transitions: {encoded}");
        println!();
    }

    for input in read_inputs(cli)? {
        let mut machine = TuringMachine::new(&table, &input);
        let halt = machine.run();

        if cli.json {
            let report = Report {
                input: &input,
                accepted: halt.is_accept(),
                halt: &halt,
                steps: machine.step_count(),
                tape: machine.tape_string(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            if let Halt::Reject(rejection) = &halt {
                tracing::info!("{rejection}");
            }
            println!(
                "The machine {} the string.",
                if halt.is_accept() { "accepts" } else { "rejects" }
            );
        }
    }

    Ok(())
}

/// Returns the inputs given on the command line, or reads them from stdin.
///
/// An interactive terminal is prompted once; piped stdin supplies one input per line.
fn read_inputs(cli: &Cli) -> io::Result<Vec<String>> {
    if !cli.input.is_empty() {
        return Ok(cli.input.clone());
    }

    let stdin = io::stdin();
    if atty::is(atty::Stream::Stdin) {
        print!("Enter a string for the Turing Machine: ");
        io::stdout().flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        Ok(vec![line.trim_end_matches(['\r', '\n']).to_string()])
    } else {
        stdin.lock().lines().collect()
    }
}

fn print_programs() -> Result<(), Box<dyn Error>> {
    println!("Built-in machines:");
    for index in 0..ProgramManager::get_program_count() {
        let info = ProgramManager::get_program_info(index)?;
        println!(
            "  {:<16} {} (accepting: {})",
            info.name,
            info.description,
            info.final_states.join(", ")
        );
    }
    Ok(())
}
