//! Interpreter version gate
//!
//! Wheels are built for one CPython `major.minor`. A mismatch is reported and
//! the user decides whether to go on.

use dailybpy_core::config::PythonVersion;
use dailybpy_core::{DailybpyError, Result};
use std::io::{self, BufRead, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    Match,
    Mismatch {
        found: PythonVersion,
        required: PythonVersion,
    },
}

pub fn check_version(found: PythonVersion, required: PythonVersion) -> VersionCheck {
    if found == required {
        VersionCheck::Match
    } else {
        VersionCheck::Mismatch { found, required }
    }
}

/// Yes/no question to the user
pub trait Prompt {
    /// `None` when nobody can answer
    fn confirm(&mut self, question: &str) -> Option<bool>;
}

/// Asks on stdout and reads stdin, when stdin is a terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Option<bool> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return None;
        }

        print!("{question}");
        io::stdout().flush().ok()?;

        let mut answer = String::new();
        stdin.lock().read_line(&mut answer).ok()?;
        Some(answer.trim().eq_ignore_ascii_case("y"))
    }
}

/// Decides whether to continue after a version mismatch
pub fn confirm_mismatch(assume_yes: bool, prompt: &mut impl Prompt) -> Result<()> {
    if assume_yes {
        return Ok(());
    }

    match prompt.confirm("Continue anyway? (y/n): ") {
        Some(true) => Ok(()),
        Some(false) => Err(DailybpyError::InstallAborted(
            "Python version mismatch".to_string(),
        )),
        None => Err(DailybpyError::InstallAborted(
            "Python version mismatch and no terminal to confirm; pass --yes to continue"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        answer: Option<bool>,
        asked: usize,
    }

    impl Scripted {
        fn new(answer: Option<bool>) -> Self {
            Self { answer, asked: 0 }
        }
    }

    impl Prompt for Scripted {
        fn confirm(&mut self, _question: &str) -> Option<bool> {
            self.asked += 1;
            self.answer
        }
    }

    #[test]
    fn test_check_version() {
        let v311 = PythonVersion::new(3, 11);
        let v312 = PythonVersion::new(3, 12);
        assert_eq!(check_version(v311, v311), VersionCheck::Match);
        assert_eq!(
            check_version(v312, v311),
            VersionCheck::Mismatch {
                found: v312,
                required: v311
            }
        );
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut prompt = Scripted::new(Some(false));
        confirm_mismatch(true, &mut prompt).unwrap();
        assert_eq!(prompt.asked, 0);
    }

    #[test]
    fn test_yes_answer_continues() {
        let mut prompt = Scripted::new(Some(true));
        confirm_mismatch(false, &mut prompt).unwrap();
        assert_eq!(prompt.asked, 1);
    }

    #[test]
    fn test_no_answer_aborts() {
        let mut prompt = Scripted::new(Some(false));
        let err = confirm_mismatch(false, &mut prompt).unwrap_err();
        assert!(err.to_string().starts_with("INSTALL_ABORTED"));
    }

    #[test]
    fn test_no_terminal_aborts_with_hint() {
        let mut prompt = Scripted::new(None);
        let err = confirm_mismatch(false, &mut prompt).unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }
}
