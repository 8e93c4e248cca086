/// Keyword that ends the session, matched case-insensitively after trimming.
pub const EXIT_KEYWORD: &str = "exit";

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    /// Anything else, untrimmed, to be sent to the model.
    Message(&'a str),
}

pub fn parse_input(line: &str) -> Input<'_> {
    if line.trim().eq_ignore_ascii_case(EXIT_KEYWORD) {
        Input::Exit
    } else {
        Input::Message(line)
    }
}
