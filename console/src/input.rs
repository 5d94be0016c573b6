pub const NOT_NUMBERS: &str = "You should enter numbers!";

/// Two whitespace separated numbers, row then column, still 1-indexed.
/// Range and occupancy are checked by the engine when the move is applied.
pub fn parse_coordinates(input: &str) -> Result<(usize, usize), String> {
    if input
        .chars()
        .any(|c| !c.is_whitespace() && !c.is_ascii_digit())
    {
        return Err(NOT_NUMBERS.to_string());
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(NOT_NUMBERS.to_string());
    };

    // Digits only at this point, so a failed parse can only be an overflow,
    // which is out of range anyway.
    let row = row.parse().unwrap_or(usize::MAX);
    let col = col.parse().unwrap_or(usize::MAX);
    Ok((row, col))
}
