use std::io::{BufRead, Write};

use tracing::info;

use crate::input::{Console, InputError, parse_count};

pub const COUNT_PROMPT: &str = "Enter the number of students: ";

/// Blocks until a positive integer roster size is entered.
pub fn run_stage1<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<usize, InputError> {
    let count = console.ask_until(COUNT_PROMPT, parse_count)?;
    info!(count, "roster size accepted");
    Ok(count)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_count.rs"]
mod tests;
