use std::io::{self, BufWriter};
use std::process::exit;

use clap::Parser;
use log::{error, info};
use ordered_tree::interpreter::{Config, Interpreter, KeyMode};

/// Read `Insert <key> <value>`, `Find <key>`, `Delete <key>` and `InOrder`
/// commands from stdin, one per line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// Skip commands whose key is not a valid integer instead of using key 0
    #[arg(long)]
    strict: bool,
}

impl Opts {
    fn config(&self) -> Config {
        Config {
            key_mode: if self.strict {
                KeyMode::Strict
            } else {
                KeyMode::Lenient
            },
        }
    }
}

fn main() {
    let opts = Opts::parse();
    env_logger::init();
    info!("Welcome to use {}:{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(opts.config(), BufWriter::new(stdout.lock()));
    if let Err(err) = interpreter.run(stdin.lock()) {
        error!("{}", err);
        exit(1);
    }
}
