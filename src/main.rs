use clap::{CommandFactory, Parser};
use keyingtime::config::EngineConfig;
use keyingtime::timing::KeyingTable;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(
    name = "keyingtime",
    version,
    about = "Estimate the minimum time for inputting the given text(s).",
    override_usage = "keyingtime [OPTIONS] <KEYING_TIME_FILE> [TEXT]...",
    after_help = "With no text, read the standard input.\nExample: keyingtime keytime.notepc.txt \"hello, world\""
)]
struct Cli {
    /// Keying time file: lines of `<c1><c2> <time>`
    keying_time_file: PathBuf,

    /// Text to type. Arguments are joined with a space.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,

    /// Built-in layout name or JSON layout file the text is written for
    #[arg(short, long)]
    layout: Option<String>,

    /// Estimate the text on every built-in layout
    #[arg(long, default_value_t = false, conflicts_with = "layout")]
    compare: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(flatten)]
    engine: EngineConfig,
}

fn usage() {
    let mut command = Cli::command();
    // Usage goes to stdout like the rest of the output.
    let _ = command.print_help();
    println!();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(_) => {
            usage();
            process::exit(1);
        }
    };

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let fingers = match cli.engine.finger_map() {
        Ok(f) => f,
        Err(e) => {
            error!("Could not load fingering: {}", e);
            usage();
            process::exit(1);
        }
    };

    let table = match KeyingTable::load(&cli.keying_time_file, fingers, &cli.engine) {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Could not open '{}': {}",
                cli.keying_time_file.display(),
                e
            );
            usage();
            process::exit(1);
        }
    };

    let text = if cli.text.is_empty() {
        let mut buf = Vec::new();
        if let Err(e) = io::stdin().lock().read_to_end(&mut buf) {
            error!("Could not read standard input: {}", e);
            process::exit(1);
        }
        String::from_utf8_lossy(&buf).into_owned()
    } else {
        cli.text.join(" ")
    };
    info!("Estimating {} characters", text.chars().count());

    let result = if cli.compare {
        cmd::compare::run(&table, &text, cli.json)
    } else {
        cmd::estimate::run(&table, &text, cli.layout.as_deref(), cli.json)
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
