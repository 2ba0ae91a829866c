use std::io::{self, Write};

use anyhow::{Result, bail};

use crate::citation::{to_ordinal, word_to_number};
use crate::cli::OrdinalArgs;

pub fn run(args: OrdinalArgs) -> Result<()> {
    if args.numbers.is_empty() && args.words.is_empty() {
        bail!("pass at least one --number or --word");
    }

    let mut output = io::BufWriter::new(io::stdout().lock());

    for number in &args.numbers {
        writeln!(output, "{number}\t{}", to_ordinal(*number))?;
    }

    for word in &args.words {
        match word_to_number(word) {
            Some(number) => writeln!(output, "{word}\t{number}")?,
            None => writeln!(output, "{word}\t-")?,
        }
    }

    output.flush()?;
    Ok(())
}
