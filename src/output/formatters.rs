//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Symbol};
use colored::{ColoredString, Colorize};

/// Colour a single peg by its symbol
#[must_use]
pub fn colored_symbol(symbol: Symbol) -> ColoredString {
    let text = symbol.to_string();
    match symbol {
        0 => text.red().bold(),
        1 => text.green().bold(),
        2 => text.blue().bold(),
        3 => text.cyan().bold(),
        4 => text.truecolor(255, 165, 0).bold(),
        5 => text.yellow().bold(),
        6 => text.magenta().bold(),
        7 => text.white().bold(),
        _ => text.bright_black().bold(),
    }
}

/// Format a code as space-separated coloured pegs
#[must_use]
pub fn code_to_pegs(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(|&symbol| colored_symbol(symbol).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as key pegs: ● per black, ○ per white, · for the rest
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, holes: usize) -> String {
    let blacks = usize::from(feedback.blacks());
    let whites = usize::from(feedback.whites());
    let empty = holes.saturating_sub(blacks + whites);

    let mut result = String::with_capacity(holes * 3);
    result.extend(std::iter::repeat_n('●', blacks));
    result.extend(std::iter::repeat_n('○', whites));
    result.extend(std::iter::repeat_n('·', empty));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_no_match() {
        assert_eq!(feedback_to_pegs(Feedback::new(0, 0), 4), "····");
    }

    #[test]
    fn feedback_pegs_mixed() {
        assert_eq!(feedback_to_pegs(Feedback::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn feedback_pegs_perfect() {
        assert_eq!(feedback_to_pegs(Feedback::perfect(5), 5), "●●●●●");
    }

    #[test]
    fn code_pegs_keep_symbol_order() {
        colored::control::set_override(false);
        assert_eq!(code_to_pegs(&Code::new(vec![0, 1, 2, 11])), "0 1 2 11");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
