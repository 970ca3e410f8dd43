//! Plays a game of checkers over a text stream.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! Both players share the same input. Before each move the board is printed and the side to move
//! is prompted for four numbers: the row and column of the piece, then the row and column of its
//! destination. `-1` quits. After a capture, the same piece must keep jumping while it can, and
//! each further jump is entered as just a row and column.
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::io::{BufRead, Write};
use log::{debug, info};
use checkers::Square;
use checkers::game::{Game, GameResult};
use crate::Error;

mod input;
pub use input::{Command, Coord};

const OUT_OF_BOUNDS: &str = "Coordinates must be 0-7.";
const INVALID_MOVE: &str = "Invalid move. Try again.";
const INPUT_ENDED: &str = "Input ended.";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// How a console game ended
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The game was decided.
    Finished(GameResult),
    /// A player entered `-1`.
    Quit,
    /// The input ran out. Any capture in progress is abandoned and nobody wins.
    InputEnded,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A console game reading moves from `R` and writing the board and prompts to `W`
///
/// All input and output lines are logged at the `info` level.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    game: Game,
    dump: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console for a game from the standard starting position.
    pub fn new(input: R, output: W) -> Self {
        Console::with_game(input, output, Game::new())
    }

    /// Creates a console that continues `game`.
    pub fn with_game(input: R, output: W, game: Game) -> Self {
        Console {
            input,
            output,
            game,
            dump: false,
        }
    }

    /// Turns printing of the four bitboards below the board on or off.
    pub fn dump_bitboards(&mut self, dump: bool) -> &mut Self {
        self.dump = dump;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the console, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the welcome message and a description of the move format.
    pub fn intro(&mut self) -> Result<(), Error> {
        self.say("Welcome to BitBoard Checkers!")?;
        self.say("Move format: from_row from_col to_row to_col (0-7).")?;
        self.say("Example: 2 1 3 2 moves the piece at row 2, col 1 to row 3, col 2.")?;
        self.say("After a capture, the same piece must continue jumping if possible.")
    }

    /// Plays until the game is decided, a player quits, or the input ends.
    ///
    /// Bad input is reported and the player is prompted again.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run(&mut self) -> Result<Outcome, Error> {
        loop {
            self.show_board()?;

            if let Some(result) = self.game.begin_turn() {
                self.say(&result.to_string())?;
                return Ok(Outcome::Finished(result));
            }

            let turn = self.game.position().turn();
            self.prompt(&format!("{} move (row col row col, or JUST -1 to quit): ", turn))?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(Outcome::InputEnded),
            };

            let (from, to) = match Command::parse(&line) {
                Command::Quit => return Ok(Outcome::Quit),
                Command::Move(from, to) => (from, to),
                _ => {
                    self.say(INVALID_MOVE)?;
                    continue;
                },
            };

            let (from, to) = match (from.square(), to.square()) {
                (Ok(from), Ok(to)) => (from, to),
                _ => {
                    self.say(OUT_OF_BOUNDS)?;
                    continue;
                },
            };

            if let Err(err) = self.game.apply_move(from, to) {
                debug!("{} to {} rejected: {}", from, to, err);
                self.say(INVALID_MOVE)?;
                continue;
            }

            if let Some(outcome) = self.continue_capturing()? {
                return Ok(outcome);
            }

            self.game.end_turn()?;
        }
    }

    /// Prompts for further jumps for as long as the capturing piece has one.
    ///
    /// Returns an outcome if the game ends before the piece stops jumping.
    fn continue_capturing(&mut self) -> Result<Option<Outcome>, Error> {
        while let Some(sq) = self.game.has_forced_continuation() {
            self.show_board()?;
            self.prompt(&format!(
                "You can capture again with the same piece at {}. Enter next jump (row col): ",
                sq
            ))?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    self.say(INPUT_ENDED)?;
                    return Ok(Some(Outcome::InputEnded));
                },
            };

            let to = match Command::parse(&line) {
                Command::Quit => return Ok(Some(Outcome::Quit)),
                Command::Jump(to) => to,
                _ => {
                    self.reject_capture(sq)?;
                    continue;
                },
            };

            let to = match to.square() {
                Ok(to) => to,
                Err(_) => {
                    self.say(OUT_OF_BOUNDS)?;
                    continue;
                },
            };

            if let Err(err) = self.game.apply_move(sq, to) {
                debug!("{} to {} rejected: {}", sq, to, err);
                self.reject_capture(sq)?;
            }
        }

        Ok(None)
    }

    fn reject_capture(&mut self, sq: Square) -> Result<(), Error> {
        self.say(&format!("That is not a valid capture from {}. Try again.", sq))
    }

    fn show_board(&mut self) -> Result<(), Error> {
        let pos = self.game.position();
        writeln!(self.output, "\n{}\n", pos)?;

        if self.dump {
            writeln!(self.output, "red:       {:#018x}    black:       {:#018x}",
                pos.red(), pos.black())?;
            writeln!(self.output, "red kings: {:#018x}    black kings: {:#018x}\n",
                pos.red_kings(), pos.black_kings())?;
        }

        debug!("board:\n{}", pos);
        Ok(())
    }

    fn say(&mut self, s: &str) -> Result<(), Error> {
        writeln!(self.output, "{}", s)?;
        info!("<game>: {}", s);
        Ok(())
    }

    fn prompt(&mut self, s: &str) -> Result<(), Error> {
        write!(self.output, "{}", s)?;
        self.output.flush()?;
        info!("<game>: {}", s.trim_end());
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            info!("<player>: end of input");
            Ok(None)
        } else {
            info!("<player>: {}", line.trim_end());
            Ok(Some(line))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::convert::TryFrom;
    use checkers::{Color, Piece, PositionBuilder};
    use super::*;

    fn sq(pos: i32) -> Square {
        Square::try_from(pos).unwrap()
    }

    fn game_at(pieces: &[(Color, Piece, i32)]) -> Game {
        let mut builder = PositionBuilder::new();
        for &(color, piece, pos) in pieces {
            builder.piece(color, piece, sq(pos));
        }
        Game::starting_at(builder.validate().unwrap())
    }

    fn play(game: Game, input: &str) -> (Outcome, Game, String) {
        let mut console = Console::with_game(Cursor::new(input), Vec::new(), game);
        let outcome = console.run().unwrap();
        let game = console.game().clone();
        (outcome, game, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn quit_at_the_first_prompt() {
        let (outcome, game, output) = play(Game::new(), "-1\n");

        assert_eq!(outcome, Outcome::Quit);
        assert!(game.history().is_empty());
        assert!(output.contains("Turn: Red"));
        assert!(output.ends_with("Red move (row col row col, or JUST -1 to quit): "));
    }

    #[test]
    fn leading_minus_one_quits() {
        let (outcome, game, output) = play(Game::new(), "-1 0 0 0\n2 1 3 2\n");

        assert_eq!(outcome, Outcome::Quit);
        assert!(game.history().is_empty());
        assert!(!output.contains(OUT_OF_BOUNDS));
    }

    #[test]
    fn end_of_input() {
        let (outcome, _, output) = play(Game::new(), "");

        assert_eq!(outcome, Outcome::InputEnded);
        assert!(!output.contains(INPUT_ENDED));
    }

    #[test]
    fn intro_describes_the_move_format() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.intro().unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert!(output.starts_with("Welcome to BitBoard Checkers!\n"));
        assert!(output.contains("from_row from_col to_row to_col"));
    }

    #[test]
    fn moves_alternate_between_players() {
        let (outcome, game, output) = play(Game::new(), "2 1 3 2\n5 0 4 1\n");

        assert_eq!(outcome, Outcome::InputEnded);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.position().turn(), Color::Red);
        assert!(output.contains("Black move (row col row col, or JUST -1 to quit): "));
        assert!(!output.contains(INVALID_MOVE));
    }

    #[test]
    fn bad_input_is_reported() {
        let (_, game, output) = play(Game::new(), "8 0 3 2\n2 1 2 3\nhello\n2 1 3\n-1\n");

        assert!(game.history().is_empty());
        assert_eq!(output.matches(OUT_OF_BOUNDS).count(), 1);
        assert_eq!(output.matches(INVALID_MOVE).count(), 3);
    }

    #[test]
    fn forced_continuation() {
        let game = game_at(&[(Color::Red, Piece::Man, 17), (Color::Black, Piece::Man, 26),
                             (Color::Black, Piece::Man, 44), (Color::Black, Piece::Man, 62)]);
        let (outcome, game, output) = play(game, "2 1 4 3\n5 2\n9 9\n2 1 4 3\n6 5\n");

        assert_eq!(outcome, Outcome::InputEnded);
        assert!(output.contains(
            "You can capture again with the same piece at (4,3). Enter next jump (row col): "
        ));
        assert_eq!(output.matches("That is not a valid capture from (4,3). Try again.").count(), 2);
        assert_eq!(output.matches(OUT_OF_BOUNDS).count(), 1);
        assert_eq!(game.position().piece_count(Color::Black), 1);
        assert_eq!(game.position().turn(), Color::Black);
    }

    #[test]
    fn input_ending_mid_capture() {
        let game = game_at(&[(Color::Red, Piece::Man, 17), (Color::Black, Piece::Man, 26),
                             (Color::Black, Piece::Man, 44)]);
        let (outcome, game, output) = play(game, "2 1 4 3\n");

        assert_eq!(outcome, Outcome::InputEnded);
        assert!(output.ends_with("Input ended.\n"));
        assert_eq!(game.result(), None);
    }

    #[test]
    fn quitting_mid_capture() {
        let game = game_at(&[(Color::Red, Piece::Man, 17), (Color::Black, Piece::Man, 26),
                             (Color::Black, Piece::Man, 44)]);
        let (outcome, _, _) = play(game, "2 1 4 3\n-1\n");

        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn capturing_the_last_piece_wins() {
        let game = game_at(&[(Color::Red, Piece::Man, 17), (Color::Black, Piece::Man, 26)]);
        let (outcome, _, output) = play(game, "2 1 4 3\n");

        assert_eq!(outcome, Outcome::Finished(GameResult::Win(Color::Red)));
        assert!(output.ends_with("Turn: Black\n\nRed wins!\n"));
    }

    #[test]
    fn dumps_bitboards() {
        let mut console = Console::new(Cursor::new("-1\n"), Vec::new());
        console.dump_bitboards(true);
        console.run().unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert!(output.contains("red:       0x0000000000aa55aa"));
        assert!(output.contains("black:       0x55aa550000000000"));
        assert!(output.contains("red kings: 0x0000000000000000"));
    }
}
