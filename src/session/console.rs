//! Stdin/stdout implementation of the session decision points.

use std::io::{self, BufRead as _, Write as _};
use std::path::{Path, PathBuf};

use super::{CommitDecision, Console};

/// Interactive console over standard input and output.
///
/// End-of-input is treated as the conservative answer everywhere: quit the
/// scan loop, discard the scan, skip the report.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a new console.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ask(&self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl Console for StdConsole {
    fn catalogue_path(&mut self, default: &Path) -> io::Result<PathBuf> {
        println!("Path to catalogue file");
        let answer = self.ask(&format!("[{}]-> ", default.display()))?;
        if answer.is_empty() {
            Ok(default.to_path_buf())
        } else {
            Ok(PathBuf::from(answer))
        }
    }

    fn next_scan_target(&mut self) -> io::Result<Option<PathBuf>> {
        println!("Next path to scan (q to quit)");
        let answer = self.ask("-> ")?;
        if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }

    fn commit_decision(&mut self, duplicates: u64) -> io::Result<CommitDecision> {
        loop {
            println!("Scan finished, {duplicates} duplicates found, update catalogue?");
            let answer = self.ask("[y/N/q]-> ")?.to_lowercase();
            match answer.as_str() {
                "y" => return Ok(CommitDecision::Commit),
                "" | "n" => return Ok(CommitDecision::Discard),
                "q" => return Ok(CommitDecision::Quit),
                _ => continue,
            }
        }
    }

    fn wants_report(&mut self) -> io::Result<bool> {
        println!("Save CSV report of duplicate files?");
        let answer = self.ask("[y/N]-> ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}
