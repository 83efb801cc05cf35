//! Console session loop

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::index::IndexBuilder;
use crate::store::RecordStore;

use super::Command;

/// Run a command against the store, returning the line to print
pub fn execute<I: IndexBuilder>(store: &RecordStore<I>, command: &Command) -> Result<String> {
    match command {
        Command::Write { key, value } => {
            let written = store.store_kv(key, value)?;
            Ok(format!("wrote {written} byte data"))
        }
        Command::Read { key } => {
            let lookup = store.read_key_with_count(key)?;
            Ok(format!(
                "read {} data, last found: {}",
                lookup.occurrences, lookup.value
            ))
        }
        Command::Delete { key } => {
            let removed = store.delete_key(key)?;
            Ok(format!("deleted {removed} record(s)"))
        }
    }
}

/// Read commands from `input` until EOF, printing results to `output`
///
/// Stops at the first error and returns it.
pub fn run<I, R, W>(store: &RecordStore<I>, input: R, mut output: W) -> Result<()>
where
    I: IndexBuilder,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line)? else {
            continue;
        };

        tracing::trace!(command = %command.command_type(), "executing");
        let message = execute(store, &command)?;
        writeln!(output, "{message}")?;
        output.flush()?;
    }
    Ok(())
}
