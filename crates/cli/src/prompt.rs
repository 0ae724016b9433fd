//! Interactive prompts for values not given on the command line.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Ask for a value on stdin until the line parses as `T`.
pub fn prompt_value<T>(prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    print!("{prompt}: ");
    io::stdout().flush()?;
    read_answer(&mut io::stdin().lock())
}

/// Parse one answer line; an empty answer is an error.
fn read_answer<T, R>(input: &mut R) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
{
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        bail!("Input required");
    }
    answer
        .parse()
        .with_context(|| format!("Invalid value: {answer}"))
}
