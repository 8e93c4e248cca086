//! Chat mode UI components.

use crate::status;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(model: &str) {
    status!(
        "{} {} - model {} (type \"exit\" to quit)",
        Style::header("chatline"),
        Style::version(format!("v{VERSION}")),
        Style::value(model)
    );
}

pub fn print_goodbye() {
    status!("{}", Style::success("Goodbye!"));
}

pub fn print_error(message: &str) {
    eprintln!("{}", Style::error(message));
}
