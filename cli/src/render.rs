use gridgames_core::chase::{self, Occupant};
use gridgames_core::sweeper::{self, Cell};

/// Column header, then one line per row ending with its index.
///
/// Mines stay hidden: unknown cells show `??`, flags `DD`.
pub fn render_minefield(board: &sweeper::Board) -> String {
    let (rows, cols) = board.size();
    let mut lines = Vec::with_capacity(usize::from(rows) + 1);

    lines.push((0..cols).map(|col| format!(" {col:2} ")).collect::<String>());
    for row in 0..rows {
        let mut line: String = (0..cols)
            .map(|col| match board.cell((row, col)) {
                Cell::Unknown | Cell::Mine => " ?? ".to_string(),
                Cell::FlaggedMine | Cell::FlaggedEmpty => " DD ".to_string(),
                Cell::Revealed(count) => format!("  {count} "),
            })
            .collect();
        line.push_str(&format!("| row={row:2}"));
        lines.push(line);
    }
    lines.join("\n")
}

pub fn render_arena(board: &chase::Board) -> String {
    let (rows, cols) = board.size();
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| match board.cell((row, col)) {
                    Occupant::Empty => ' ',
                    Occupant::Player => '@',
                    Occupant::Robot => '!',
                    Occupant::Obstacle => '#',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minefield_hides_mines() {
        use Cell::*;
        let board =
            sweeper::Board::from_rows(&[[Unknown, Mine, Revealed(1)], [FlaggedMine, FlaggedEmpty, Revealed(0)]])
                .unwrap();

        assert_eq!(
            render_minefield(&board),
            [
                "  0   1   2 ",
                " ??  ??   1 | row= 0",
                " DD  DD   0 | row= 1",
            ]
            .join("\n")
        );
    }

    #[test]
    fn minefield_header_pads_two_digits() {
        let board = sweeper::Board::new((1, 11));
        let rendered = render_minefield(&board);
        let header = rendered.lines().next().unwrap();
        assert!(header.ends_with("  9  10 "), "{header:?}");
    }

    #[test]
    fn arena_symbols() {
        let mut board = chase::Board::walled((3, 5));
        board[(1, 1)] = Occupant::Player;
        board[(1, 3)] = Occupant::Robot;

        assert_eq!(render_arena(&board), ["#####", "#@ !#", "#####"].join("\n"));
    }
}
