use std::io;

use clap::Parser;
use owo_colors::OwoColorize;

use envinit::cli::Args;
use envinit::{Error, logging, run};

fn main() {
    let args = Args::parse();
    logging::init();

    let base = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    match run(&args, &base, &mut stdout.lock()) {
        Ok(_) => {}
        // Already reported on the console by `run`
        Err(Error::SameOutputFile) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
