//! Terminal implementation of the interactive boundary.

use std::io::{self, BufRead, Write};

use crate::capture::Interaction;

/// Prompts on stdout, reads answers line-by-line from stdin.
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn read_line(&self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_string()
    }
}

impl Interaction for TerminalPrompt {
    fn select(&mut self, items: &[String]) -> Option<usize> {
        for (i, item) in items.iter().enumerate() {
            println!("{}. {}", i + 1, item);
        }
        print!("Select a book (1-{}, empty to cancel): ", items.len());
        let _ = io::stdout().flush();

        let answer = self.read_line();
        if answer.is_empty() {
            return None;
        }
        // Anything non-numeric or out of range counts as a decline.
        answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=items.len()).contains(n))
            .map(|n| n - 1)
    }

    fn confirm(&mut self, question: &str) -> bool {
        print!("{} [y/n] ", question);
        let _ = io::stdout().flush();
        matches!(self.read_line().to_lowercase().as_str(), "y" | "yes")
    }

    fn prompt_line(&mut self, question: &str) -> String {
        print!("{} ", question);
        let _ = io::stdout().flush();
        self.read_line()
    }
}
