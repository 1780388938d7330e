//! Interactive recency selection.

use std::io::{BufRead, Write};

use console::style;

use crate::config::RecencyWindow;
use crate::error::Result;

/// Render the recency menu, one numbered line per window.
pub fn menu_lines() -> Vec<String> {
    RecencyWindow::CHOICES
        .iter()
        .enumerate()
        .map(|(i, window)| format!("  {}. {}", i + 1, window))
        .collect()
}

/// Ask which window to download from `input`, echoing the menu to `output`.
///
/// An empty or unrecognised answer selects every post.
pub fn read_recency_window<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<RecencyWindow> {
    writeln!(output, "{}", style("How many posts should be downloaded?").bold())?;
    for line in menu_lines() {
        writeln!(output, "{}", line)?;
    }
    write!(output, "Choice [1]: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(RecencyWindow::from_menu_choice(&answer))
}

/// Prompt on the terminal.
pub fn prompt_recency_window() -> Result<RecencyWindow> {
    let stdin = std::io::stdin();
    read_recency_window(&mut stdin.lock(), &mut std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str) -> RecencyWindow {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        read_recency_window(&mut input, &mut output).unwrap()
    }

    #[test]
    fn test_menu_order() {
        let lines = menu_lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  1. All posts");
        assert_eq!(lines[1], "  2. Latest 50 posts");
        assert_eq!(lines[5], "  6. Latest 100 posts");
    }

    #[test]
    fn test_answers() {
        assert_eq!(ask("1\n"), RecencyWindow::All);
        assert_eq!(ask("2\n"), RecencyWindow::Latest(50));
        assert_eq!(ask("3\n"), RecencyWindow::Latest(25));
        assert_eq!(ask("4\n"), RecencyWindow::Latest(10));
        assert_eq!(ask("5\n"), RecencyWindow::Latest(75));
        assert_eq!(ask("6\n"), RecencyWindow::Latest(100));
    }

    #[test]
    fn test_unrecognised_answer_means_all() {
        assert_eq!(ask("7\n"), RecencyWindow::All);
        assert_eq!(ask("ten\n"), RecencyWindow::All);
        assert_eq!(ask(""), RecencyWindow::All);
    }

    #[test]
    fn test_menu_is_echoed() {
        let mut input = Cursor::new(b"4\n".to_vec());
        let mut output = Vec::new();
        read_recency_window(&mut input, &mut output).unwrap();

        let text = console::strip_ansi_codes(&String::from_utf8(output).unwrap()).into_owned();
        assert!(text.contains("4. Latest 10 posts"));
        assert!(text.ends_with("Choice [1]: "));
    }
}
