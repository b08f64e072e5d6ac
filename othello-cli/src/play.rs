//! The interactive turn loop.

use othello_rules::{Color, Game, GameError, Location, Status};
use std::io::{self, BufRead, Write};

/// Play a game to the end, reading moves from `input` and writing the board,
/// prompts and the result to `output`. A color with no legal move is skipped.
/// The final score and result are reported whenever the game ends, including
/// when it starts from a finished position.
/// Returns the finished game, or the game so far if `input` runs out.
pub fn play_interactive<R: BufRead, W: Write>(
    mut game: Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<Game> {
    let mut to_move = Color::default();
    if game.board().legal_moves(to_move).is_empty() {
        to_move = !to_move;
    }

    while !game.is_finished() {
        let name = game
            .player(to_move)
            .map_or_else(|| to_move.to_string(), |p| p.name().to_string());

        writeln!(output, "\n{}\n", game)?;
        writeln!(output, "Legal moves: {}", game.board().legal_moves(to_move))?;
        write!(output, "{} ({}), enter a move: ", name, to_move)?;
        output.flush()?;

        let mut input_line = String::new();
        if input.read_line(&mut input_line)? == 0 {
            writeln!(output)?;
            return Ok(game);
        }

        let mv: Location = match input_line.parse() {
            Ok(mv) => mv,
            Err(_) => {
                eprintln!("Cannot parse move {:?}.", input_line.trim());
                continue;
            }
        };

        match game.play(to_move, mv) {
            Ok(Status::InProgress) => {}
            Ok(Status::Finished { .. }) => break,
            Err(err @ GameError::IllegalMove { .. }) => {
                eprintln!("{}", err);
                continue;
            }
            Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err)),
        }

        match game.next_to_move(to_move) {
            Some(next) if next == to_move => {
                writeln!(output, "{} has no legal move and passes.", !to_move)?;
            }
            Some(next) => to_move = next,
            None => break,
        }
    }

    let result = game
        .result()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    writeln!(output, "\n{}\n", game.board())?;
    writeln!(output, "Game is ended ({})", game.board().score())?;
    writeln!(output, "{}", result)?;

    Ok(game)
}
