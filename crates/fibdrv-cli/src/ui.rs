//! Styled terminal messages. Styling is dropped when `NO_COLOR` is set.

use console::{style, Color};

/// Whether output may carry ANSI styling.
#[must_use]
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn tag(label: &str, color: Color) -> String {
    if use_color() {
        style(label).fg(color).bold().to_string()
    } else {
        label.to_string()
    }
}

/// Print a banner line above a result block.
pub fn print_header(text: &str) {
    let banner = format!("--- {text} ---");
    if use_color() {
        println!("{}", style(banner).cyan().bold());
    } else {
        println!("{banner}");
    }
}

/// Print a confirmation to stdout.
pub fn print_success(text: &str) {
    println!("{} {text}", tag("ok:", Color::Green));
}

/// Print an error to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("error:", Color::Red));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_keeps_label_text() {
        assert!(tag("ok:", Color::Green).contains("ok:"));
    }

    #[test]
    fn print_functions_do_not_panic() {
        print_header("F(100)");
        print_success("verified against reference");
        print_error("fibonacci is in use");
    }
}
