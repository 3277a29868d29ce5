//! Line-oriented front end: one command per line is read, applied to an
//! `OrderedTree<i64, String>` and its result written out
mod command;
mod error;

pub use command::{Command, KeyMode};
pub use error::{CommandError, InterpreterError, Result};

use crate::tree::{OrderedTree, Visit};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub key_mode: KeyMode,
}

pub struct Interpreter<W: Write> {
    tree: OrderedTree<i64, String>,
    config: Config,
    output: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(config: Config, output: W) -> Self {
        Interpreter {
            tree: OrderedTree::new(),
            config,
            output,
        }
    }

    /// Read and execute every line from `input` until EOF
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("Reading commands, key mode {:?}", self.config.key_mode);
        let mut count = 0;
        for line in input.split(b'\n') {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line);
            self.execute(&String::from_utf8_lossy(line))?;
            count += 1;
        }
        self.output.flush()?;
        info!("Processed {} lines, {} keys stored", count, self.tree.len());
        Ok(())
    }

    /// Parse and apply a single line. Malformed lines produce no output
    pub fn execute(&mut self, line: &str) -> Result<()> {
        match Command::parse(line, self.config.key_mode) {
            Ok(Some(command)) => self.apply(command),
            Ok(None) => {
                debug!("Ignoring line {:?}", line);
                Ok(())
            }
            Err(err) => {
                warn!("Skipping line {:?}: {}", line, err);
                Ok(())
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Insert { key, value } => self.tree.insert(key, value),
            Command::Find { key } => match self.tree.find(&key) {
                Some(value) => writeln!(self.output, "{}", value)?,
                None => writeln!(self.output, "not found")?,
            },
            Command::Delete { key } => {
                self.tree.delete(&key);
            }
            Command::InOrder => {
                let mut pairs = Vec::with_capacity(self.tree.len());
                self.tree.traverse(|key, value| {
                    pairs.push(format!("{}: {}\n", key, value));
                    Visit::Continue
                });
                writeln!(self.output, "{}", pairs.join(" "))?;
            }
        }
        Ok(())
    }

    pub fn tree(&self) -> &OrderedTree<i64, String> {
        &self.tree
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
