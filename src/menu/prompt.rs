use std::io::{BufRead, Write};

use crate::error::CatalogError;

/// Line-oriented console questions over any reader/writer pair.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Prompt<R, W> {
        Prompt { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns the answer trimmed. End of input is `CatalogError::InputClosed`.
    pub fn question(&mut self, query: &str) -> Result<String, CatalogError> {
        write!(self.output, "{}", query)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(CatalogError::InputClosed);
        }
        Ok(answer.trim().to_string())
    }

    /// Asks again until the answer parses as an integer.
    pub fn question_int(&mut self, query: &str) -> Result<i64, CatalogError> {
        loop {
            let answer = self.question(query)?;
            match answer.parse::<i64>() {
                Ok(num) => return Ok(num),
                Err(_) => writeln!(self.output, "Input valid number, please.")?,
            }
        }
    }

    /// Asks a yes/no question, repeating until it gets one of the two.
    pub fn key_in_yn(&mut self, query: &str) -> Result<bool, CatalogError> {
        loop {
            let answer = self.question(&format!("{} [y/n]: ", query))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}
