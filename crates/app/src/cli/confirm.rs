use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin, blocking until a line is read.
/// `assume_yes` skips the prompt.
pub(crate) fn confirm(question: &str, assume_yes: bool) -> Result<bool, String> {
    if assume_yes {
        return Ok(true);
    }

    ask(&mut io::stdin().lock(), &mut io::stderr(), question)
        .map_err(|error| format!("failed to read confirmation: {error}"))
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
