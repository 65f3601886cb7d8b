use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Decide whether output is colorized for the given choice
pub fn should_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        // Respect NO_COLOR standard (https://no-color.org/)
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
    }
}

pub fn init(choice: ColorChoice) {
    colored::control::set_override(should_color(choice));
}
