use tictactoe_engine::games::tictactoe::Board;

const BORDER: &str = "---------";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    for row in board.cells() {
        out.push_str("| ");
        for cell in row {
            match cell {
                Some(mark) => {
                    out.push(mark.to_char());
                    out.push(' ');
                }
                None => out.push_str("  "),
            }
        }
        out.push_str("|\n");
    }
    out.push_str(BORDER);
    out
}
