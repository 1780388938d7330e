//! Selection and variant mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many of the most recent posts to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecencyWindow {
    /// Every harvested post (default).
    #[default]
    All,
    /// Only the `n` most recent posts.
    Latest(usize),
}

impl RecencyWindow {
    /// Windows offered to the user.
    pub const CHOICES: [RecencyWindow; 6] = [
        RecencyWindow::All,
        RecencyWindow::Latest(50),
        RecencyWindow::Latest(25),
        RecencyWindow::Latest(10),
        RecencyWindow::Latest(75),
        RecencyWindow::Latest(100),
    ];

    /// Map a 1-based menu answer onto a window. Anything unrecognised means all.
    pub fn from_menu_choice(choice: &str) -> Self {
        choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::CHOICES.get(i).copied())
            .unwrap_or(RecencyWindow::All)
    }

    /// Truncation limit, if any.
    pub fn limit(&self) -> Option<usize> {
        match self {
            RecencyWindow::All => None,
            RecencyWindow::Latest(n) => Some(*n),
        }
    }
}

impl fmt::Display for RecencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecencyWindow::All => write!(f, "All posts"),
            RecencyWindow::Latest(n) => write!(f, "Latest {} posts", n),
        }
    }
}

impl FromStr for RecencyWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(RecencyWindow::All),
            other => match other.parse::<usize>() {
                Ok(n) if Self::CHOICES.contains(&RecencyWindow::Latest(n)) => {
                    Ok(RecencyWindow::Latest(n))
                }
                _ => Err(format!(
                    "Unknown window: {} (expected all, 10, 25, 50, 75 or 100)",
                    s
                )),
            },
        }
    }
}

/// Which resolved variant to keep for a video post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoVariant {
    /// The first item the resolver returns (default).
    #[default]
    First,
    /// The item with the greatest reported size.
    Largest,
}

impl fmt::Display for VideoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoVariant::First => write!(f, "first"),
            VideoVariant::Largest => write!(f, "largest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert_eq!(RecencyWindow::from_menu_choice("1"), RecencyWindow::All);
        assert_eq!(RecencyWindow::from_menu_choice("2"), RecencyWindow::Latest(50));
        assert_eq!(RecencyWindow::from_menu_choice(" 4\n"), RecencyWindow::Latest(10));
        assert_eq!(RecencyWindow::from_menu_choice("6"), RecencyWindow::Latest(100));
    }

    #[test]
    fn test_menu_fallback_is_all() {
        assert_eq!(RecencyWindow::from_menu_choice("0"), RecencyWindow::All);
        assert_eq!(RecencyWindow::from_menu_choice("7"), RecencyWindow::All);
        assert_eq!(RecencyWindow::from_menu_choice(""), RecencyWindow::All);
        assert_eq!(RecencyWindow::from_menu_choice("ten"), RecencyWindow::All);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("all".parse::<RecencyWindow>().unwrap(), RecencyWindow::All);
        assert_eq!("25".parse::<RecencyWindow>().unwrap(), RecencyWindow::Latest(25));
        assert!("30".parse::<RecencyWindow>().is_err());
    }

    #[test]
    fn test_limit() {
        assert_eq!(RecencyWindow::All.limit(), None);
        assert_eq!(RecencyWindow::Latest(75).limit(), Some(75));
    }
}
