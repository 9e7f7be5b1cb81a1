//! Cost estimate and interactive confirmation.
//!
//! The API is paid per result, so live runs show the estimated cost and wait
//! for a yes before the first request.

use std::io::{self, BufRead, Write};

use crate::config::{ATS_COST_PER_RESULT, AWIS_COST_PER_LOOKUP};
use crate::error_handling::RunError;

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Estimated cost in USD of listing `results` sites, plus one detail lookup
/// per site when `enriched`.
pub fn estimate_cost(results: u64, enriched: bool) -> f64 {
    let mut cost = results as f64 * ATS_COST_PER_RESULT;
    if enriched {
        cost += results as f64 * AWIS_COST_PER_LOOKUP;
    }
    round_cents(cost)
}

/// Estimated cost in USD of `lookups` detail lookups.
pub fn estimate_lookup_cost(lookups: u64) -> f64 {
    round_cents(lookups as f64 * AWIS_COST_PER_LOOKUP)
}

/// Asks a yes/no question until it gets an answer.
///
/// `y`/`yes` confirm; `n`/`no`, an empty line or end of input decline.
pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    loop {
        writeln!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}

/// Shows the cost of querying `requests` results and asks to continue.
///
/// In test mode nothing is charged: the estimate is printed for reference
/// and the run continues without asking.
///
/// # Errors
///
/// Returns [`RunError::UserAbort`] when the user declines.
pub fn confirm_cost<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    requests: u64,
    cost: f64,
    test_mode: bool,
) -> Result<(), RunError> {
    if test_mode {
        writeln!(
            output,
            "TEST MODE. Querying {requests} results would cost ${cost:.2}, no requests will be made."
        )?;
        return Ok(());
    }

    let question = format!(
        "Querying {requests} results will cost ${cost:.2}, would you like to continue (y/n)?"
    );
    if ask_yes_no(input, output, &question)? {
        Ok(())
    } else {
        Err(RunError::UserAbort)
    }
}
