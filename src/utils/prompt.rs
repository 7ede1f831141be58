// src/utils/prompt.rs

//! Interactive prompts for run parameters.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{AppError, Result};

pub const RESULT_COUNT_PROMPT: &str = "Enter the number of results: ";
pub const YEAR_MONTH_PROMPT: &str = "Enter the selected year and month(e.g. 2020-11): ";

/// Print `question` and read one line of input, without the line ending.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::validation(format!(
            "No input received for prompt '{}'",
            question.trim_end()
        )));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask once and parse the answer. Invalid input is returned as an error,
/// not re-prompted.
pub fn ask_parsed<T, R, W>(input: &mut R, output: &mut W, question: &str) -> Result<T>
where
    T: FromStr<Err = AppError>,
    R: BufRead,
    W: Write,
{
    ask(input, output, question)?.parse()
}
