//! Console prompt helpers.
//!
//! Generic over the input/output streams so the interactive workflows can be
//! driven by scripted input in tests. Prompt policy: yes/no questions read
//! once and never loop; free-text prompts treat empty input as a cancel (or
//! as the default, where one exists); numeric selections reprompt on invalid
//! input up to `MAX_SELECT_ATTEMPTS`.

use std::io::{self, BufRead, Write};

/// Attempt limit for numeric selections.
pub const MAX_SELECT_ATTEMPTS: usize = 5;

/// Prompt console wrapping an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::BufReader<io::Stdin>, io::Stdout> {
    /// Console over process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Single yes/no confirmation. `y` or `yes` (any case) is yes, anything
    /// else (including empty input) is no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} (y/n): ", question)?;
        self.output.flush()?;
        let answer = self.read_trimmed()?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    /// Required free text. Empty input means the user cancelled.
    pub fn line_required(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let input = self.prompt_line(prompt)?;
        if input.is_empty() {
            Ok(None)
        } else {
            Ok(Some(input))
        }
    }

    /// Free text, falling back to a default on empty input.
    pub fn line_or_default(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let input = self.prompt_line(prompt)?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Numbered selection from `len` items, returning a zero-based index.
    ///
    /// Input must parse as an integer in `1..=len`. Invalid input reprompts
    /// up to `MAX_SELECT_ATTEMPTS`; empty input or exhausting the attempts
    /// cancels with `None`.
    pub fn select(&mut self, prompt: &str, len: usize) -> io::Result<Option<usize>> {
        for _ in 0..MAX_SELECT_ATTEMPTS {
            let input = self.prompt_line(prompt)?;
            if input.is_empty() {
                return Ok(None);
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=len).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
        Ok(None)
    }

    /// Numbered selection with a zero-based default index.
    ///
    /// Empty input takes the default. Exhausting the attempts announces the
    /// fallback and takes the default rather than cancelling.
    pub fn select_or_default(
        &mut self,
        prompt: &str,
        len: usize,
        default: usize,
    ) -> io::Result<usize> {
        for _ in 0..MAX_SELECT_ATTEMPTS {
            let input = self.prompt_line(prompt)?;
            if input.is_empty() {
                return Ok(default);
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=len).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
        writeln!(
            self.output,
            "No valid selection after {} attempts, using the default.",
            MAX_SELECT_ATTEMPTS
        )?;
        Ok(default)
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        self.read_trimmed()
    }

    /// Read one line, trimmed. EOF reads as empty input.
    fn read_trimmed(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_confirm_accepts_y_and_yes() {
        assert!(console("y\n").confirm("File it?").unwrap());
        assert!(console("Y\n").confirm("File it?").unwrap());
        assert!(console("yes\n").confirm("File it?").unwrap());
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        assert!(!console("n\n").confirm("File it?").unwrap());
        assert!(!console("nope\n").confirm("File it?").unwrap());
        assert!(!console("\n").confirm("File it?").unwrap());
        assert!(!console("").confirm("File it?").unwrap());
    }

    #[test]
    fn test_line_required_empty_cancels() {
        assert_eq!(console("\n").line_required("Topic").unwrap(), None);
        assert_eq!(
            console("police budgets\n").line_required("Topic").unwrap(),
            Some("police budgets".to_string())
        );
    }

    #[test]
    fn test_line_or_default() {
        assert_eq!(
            console("\n").line_or_default("Title", "Public Records Request").unwrap(),
            "Public Records Request"
        );
        assert_eq!(
            console("Budget docs\n").line_or_default("Title", "Public Records Request").unwrap(),
            "Budget docs"
        );
    }

    #[test]
    fn test_select_valid_choice() {
        assert_eq!(console("2\n").select("Choose", 3).unwrap(), Some(1));
    }

    #[test]
    fn test_select_reprompts_out_of_range_then_accepts() {
        let mut c = console("99\n2\n");
        assert_eq!(c.select("Choose", 2).unwrap(), Some(1));
        let output = String::from_utf8(c.output).unwrap();
        assert!(output.contains("Invalid choice. Try again."));
    }

    #[test]
    fn test_select_rejects_non_numeric() {
        assert_eq!(console("abc\n1\n").select("Choose", 2).unwrap(), Some(0));
    }

    #[test]
    fn test_select_empty_cancels() {
        assert_eq!(console("\n").select("Choose", 3).unwrap(), None);
    }

    #[test]
    fn test_select_exhausts_attempts() {
        let mut c = console("0\n7\nx\n99\n-1\n");
        assert_eq!(c.select("Choose", 3).unwrap(), None);
        let output = String::from_utf8(c.output).unwrap();
        assert_eq!(output.matches("Invalid choice. Try again.").count(), 5);
    }

    #[test]
    fn test_select_or_default_empty_takes_default() {
        assert_eq!(console("\n").select_or_default("Choose", 4, 2).unwrap(), 2);
    }

    #[test]
    fn test_select_or_default_exhaustion_announces_fallback() {
        let mut c = console("x\nx\nx\nx\nx\n");
        assert_eq!(c.select_or_default("Choose", 4, 0).unwrap(), 0);
        let output = String::from_utf8(c.output).unwrap();
        assert!(output.contains("using the default"));
    }
}
