use tictactoe_engine::games::tictactoe::PlayerKind;

pub const BAD_PARAMETERS: &str = "Bad parameters!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start { first: PlayerKind, second: PlayerKind },
    Exit,
}

/// `start <first> <second>` or `exit`; anything else is rejected with
/// [`BAD_PARAMETERS`].
pub fn parse_command(input: &str) -> Result<Command, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        ["start", first, second] => {
            let first = first.parse().map_err(|_| BAD_PARAMETERS.to_string())?;
            let second = second.parse().map_err(|_| BAD_PARAMETERS.to_string())?;
            Ok(Command::Start { first, second })
        }
        ["exit"] => Ok(Command::Exit),
        _ => Err(BAD_PARAMETERS.to_string()),
    }
}
