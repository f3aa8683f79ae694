use clap::{ArgEnum, Parser};
use std::process;

mod lib;
pub(crate) mod models;

#[cfg(test)]
mod tests;

use lib::constants::{DEFAULT_LABEL, DEFAULT_SEP, LOG_FILE};
use lib::error::AppError;
use models::indexed_timing::IndexedTiming;
use models::keyed_timing::KeyedTiming;
use models::runner::CommandRunner;
use models::timing::Timing;
use models::timing_writer::TimingWriter;
use models::validator::Validate;

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Format {
    Flat,
    Keyed,
    Table,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// shell commands to time, run in order
    #[clap(required = true)]
    commands: Vec<String>,

    /// address timers by position instead of command text
    #[clap(long)]
    indexed: bool,

    #[clap(long, arg_enum, default_value = "table")]
    format: Format,

    /// label for the keyed format
    #[clap(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// line separator for the table format, accepts \n and \t
    #[clap(long)]
    sep: Option<String>,

    /// also write the timings to this csv file
    #[clap(long)]
    out: Option<String>,

    /// fail if a timer ended before it started
    #[clap(long)]
    validate: bool,

    #[clap(long, default_value = LOG_FILE)]
    log: String,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{}", &err.msg);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    AppError::init_logging(&args.log)?;

    let runner = CommandRunner::new(args.commands.clone());
    let n = runner.commands().len();

    if args.indexed {
        let mut timing = IndexedTiming::new(n);
        runner.run_indexed(&mut timing)?;
        report(&mut timing, args)
    } else {
        let mut timing = KeyedTiming::new(n);
        runner.run_keyed(&mut timing)?;
        report(&mut timing, args)
    }
}

fn report<T: Timing + Validate>(timing: &mut T, args: &Args) -> Result<(), AppError> {
    timing.resolve();
    if args.validate {
        timing.validate()?;
    }

    let rendered = match args.format {
        Format::Flat => timing.render_flat(),
        Format::Keyed => timing.render_keyed(&args.label),
        Format::Table => timing.render_table(&separator(&args.sep)),
    };
    println!("{}", rendered);

    if let Some(path) = &args.out {
        let rows = TimingWriter::new(path)?.write_timing(&*timing)?;
        log::info!("wrote {} rows to {}", rows, path);
    }
    Ok(())
}

fn separator(sep: &Option<String>) -> String {
    match sep {
        Some(s) => s.replace("\\n", "\n").replace("\\t", "\t"),
        None => DEFAULT_SEP.to_string(),
    }
}
