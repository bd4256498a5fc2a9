//! Interactive questions on stdin, used for values missing from the
//! command line.

use std::io::{self, BufRead, Write};

use crate::errors::AppResult;

/// Ask `question` on `output` and read one answer line from `input`.
/// Returns `None` at end of input.
pub fn ask_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> AppResult<Option<String>> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    Ok(Some(answer.trim().to_string()))
}

pub fn ask(question: &str) -> AppResult<Option<String>> {
    ask_from(&mut io::stdin().lock(), &mut io::stdout(), question)
}

/// Anything starting with `y` (any case) is a yes.
pub fn ask_yes_no(question: &str) -> AppResult<bool> {
    Ok(ask(question)?.is_some_and(|a| is_yes(&a)))
}

pub(crate) fn is_yes(answer: &str) -> bool {
    answer.trim_start().chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn answer_is_trimmed_and_question_shown() {
        let mut input = Cursor::new("  team.csv  \n");
        let mut output = Vec::new();
        let answer = ask_from(&mut input, &mut output, "Path: ").unwrap();
        assert_eq!(answer.as_deref(), Some("team.csv"));
        assert_eq!(output, b"Path: ");
    }

    #[test]
    fn end_of_input_is_none() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(ask_from(&mut input, &mut output, "Q? ").unwrap(), None);
    }

    #[test]
    fn yes_detection() {
        assert!(is_yes("y"));
        assert!(is_yes("Yes please"));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
    }
}
