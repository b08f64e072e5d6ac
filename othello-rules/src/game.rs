//! Implements session-level Othello logic.
//!
//! A [`Game`] pairs a [`Board`] with the named players and only ever commits
//! legal moves. For raw access to the rules, use [`Board`] or [`crate::rules`].

use crate::board::{Board, Color, Score};
use crate::location::{Location, LocationList};
use crate::rules::GameResult;
use derive_more::{Display, Error};
use std::fmt;

/// A named participant playing one color.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum GameError {
    #[display(fmt = "invalid move {} for {}; legal moves: {}", location, color, legal)]
    IllegalMove {
        color: Color,
        location: Location,
        legal: LocationList,
    },
    #[display(fmt = "no {} player has joined the game", color)]
    MissingPlayer { color: Color },
    #[display(fmt = "a {} player has already joined the game", color)]
    DuplicatePlayer { color: Color },
}

/// Where a game stands after a move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    InProgress,
    Finished { score: Score, result: GameResult },
}

/// A game session: the board plus the players taking part.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
}

impl Game {
    /// Start a session on `board`. At most one player per color.
    pub fn new(board: Board, players: Vec<Player>) -> Result<Self, GameError> {
        let mut game = Self {
            board,
            players: Vec::with_capacity(2),
        };
        for player in players {
            game.add_player(player)?;
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Register a new player for `color`.
    pub fn create_player(
        &mut self,
        name: impl Into<String>,
        color: Color,
    ) -> Result<&Player, GameError> {
        self.add_player(Player::new(name, color))
    }

    fn add_player(&mut self, player: Player) -> Result<&Player, GameError> {
        if self.player(player.color()).is_some() {
            return Err(GameError::DuplicatePlayer {
                color: player.color(),
            });
        }
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// The player of `color`, if one has joined.
    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color() == color)
    }

    /// Play `color` at `location`. Illegal moves leave the board untouched and
    /// report the moves that were available.
    pub fn play(&mut self, color: Color, location: Location) -> Result<Status, GameError> {
        let legal = self.board.legal_moves(color);
        if !legal.contains(location) {
            return Err(GameError::IllegalMove {
                color,
                location,
                legal,
            });
        }

        let mut next = self.board;
        next.apply_move_unchecked(color, location.row(), location.col());

        // Names are resolved before committing, so a failed play changes nothing.
        let status = if next.is_game_over() {
            Status::Finished {
                score: next.score(),
                result: next.winner(self.name(Color::Black)?, self.name(Color::White)?),
            }
        } else {
            Status::InProgress
        };

        self.board = next;
        Ok(status)
    }

    fn name(&self, color: Color) -> Result<&str, GameError> {
        self.player(color)
            .map(Player::name)
            .ok_or(GameError::MissingPlayer { color })
    }

    /// Who moves after `color`: the opponent if it has a legal move, otherwise
    /// `color` again if it does. None once the game is over.
    pub fn next_to_move(&self, after: Color) -> Option<Color> {
        [!after, after]
            .iter()
            .copied()
            .find(|&color| !self.board.legal_moves(color).is_empty())
    }

    pub fn is_finished(&self) -> bool {
        self.board.is_game_over()
    }

    /// The result as the board stands now, named after the registered players.
    pub fn result(&self) -> Result<GameResult, GameError> {
        Ok(self
            .board
            .winner(self.name(Color::Black)?, self.name(Color::White)?))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "({})", self.board.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    fn two_player_game() -> Game {
        let mut game = Game::default();
        game.create_player("Ann", Color::Black).unwrap();
        game.create_player("Bob", Color::White).unwrap();
        game
    }

    #[test]
    fn players_are_registered_by_color() {
        let game = two_player_game();
        assert_eq!(game.player(Color::Black).map(Player::name), Some("Ann"));
        assert_eq!(game.player(Color::White).map(Player::name), Some("Bob"));
        assert_eq!(game.players().len(), 2);
    }

    #[test]
    fn duplicate_color_is_rejected() {
        let mut game = two_player_game();
        assert_eq!(
            game.create_player("Cy", Color::White),
            Err(GameError::DuplicatePlayer {
                color: Color::White
            })
        );

        let players = vec![Player::new("A", Color::Black), Player::new("B", Color::Black)];
        assert!(Game::new(Board::new(), players).is_err());
    }

    #[test]
    fn legal_play_updates_board() {
        let mut game = two_player_game();
        assert_eq!(game.play(Color::Black, loc(3, 5)), Ok(Status::InProgress));
        assert_eq!(game.board().get(4, 5), Cell::Black);
        assert_eq!(game.board().score(), Score { black: 4, white: 1 });
    }

    #[test]
    fn illegal_play_reports_legal_moves() {
        let mut game = two_player_game();
        let before = *game.board();

        let err = game.play(Color::Black, loc(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                color: Color::Black,
                location: loc(1, 1),
                legal: before.legal_moves(Color::Black),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid move A1 for black; legal moves: [E3, F4, C5, D6]"
        );
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn finishing_move_reports_result() {
        // Black at C1 takes the only white piece; nobody can move afterwards.
        let board: Board = format!("XO{}", "-".repeat(62)).parse().unwrap();
        let mut game = Game::new(
            board,
            vec![Player::new("Ann", Color::Black), Player::new("Bob", Color::White)],
        )
        .unwrap();

        assert_eq!(
            game.play(Color::Black, loc(1, 3)),
            Ok(Status::Finished {
                score: Score { black: 3, white: 0 },
                result: GameResult::BlackWins("Ann".to_string()),
            })
        );
        assert!(game.is_finished());
    }

    #[test]
    fn finishing_move_without_opponent_leaves_board_untouched() {
        let board: Board = format!("XO{}", "-".repeat(62)).parse().unwrap();
        let mut game = Game::new(board, vec![Player::new("Ann", Color::Black)]).unwrap();

        assert_eq!(
            game.play(Color::Black, loc(1, 3)),
            Err(GameError::MissingPlayer {
                color: Color::White
            })
        );
        assert_eq!(game.board(), &board);
        assert_eq!(game.board().get(1, 2), Cell::White);
        assert_eq!(game.board().get(1, 3), Cell::Empty);
    }

    #[test]
    fn result_requires_both_players() {
        let mut game = Game::default();
        game.create_player("Ann", Color::Black).unwrap();
        assert_eq!(
            game.result(),
            Err(GameError::MissingPlayer {
                color: Color::White
            })
        );
    }

    #[test]
    fn provisional_result() {
        let game = two_player_game();
        assert_eq!(game.result(), Ok(GameResult::Tie));
    }

    #[test]
    fn turn_passes_to_opponent_or_repeats() {
        let game = two_player_game();
        assert_eq!(game.next_to_move(Color::Black), Some(Color::White));

        // White cannot move here, so black goes again.
        let board: Board = format!("XO{}", "-".repeat(62)).parse().unwrap();
        let game = Game::new(board, Vec::new()).unwrap();
        assert_eq!(game.next_to_move(Color::Black), Some(Color::Black));

        let game = Game::new(Board::empty(), Vec::new()).unwrap();
        assert_eq!(game.next_to_move(Color::White), None);
    }
}
