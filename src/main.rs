use anyhow::{Context, Result};
use formal::args::Args;
use formal::operands::Operands;
use formal::operations::calculate_to;
use formal::style;
use is_terminal::IsTerminal;
use std::io;
use tracing::{debug, trace};

fn main() {
    let args = formal::args::parsed();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        let sheet = style::colored(args.color);
        eprintln!("{} {e}", sheet.error("error:"));
        for cause in e.chain().skip(1) {
            eprintln!("  {} {cause}", sheet.note("caused by:"));
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let operands = Operands::parse(
        args.op,
        &args.first,
        &args.second,
        args.iterations.as_deref(),
        args.limits,
    )?;
    trace!(?operands, "parsed operands");

    let stdout = io::stdout();
    let result = if stdout.is_terminal() {
        calculate_to(args.op, &operands, stdout.lock())
    } else {
        calculate_to(args.op, &operands, io::BufWriter::new(stdout.lock()))
    };
    result.with_context(|| format!("failed to compute {}", args.op))
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("formal started with verbosity level: {}", verbose);
}
