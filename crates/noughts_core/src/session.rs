//! Game session: board, turn, mode and outcome detection.

use crate::contracts::{Contract, GameActive, MoveContract};
use crate::rules::{self, WinningLine};
use crate::{Board, InvalidMove, Mark, Move, OpponentPolicy, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who sits across the board from the first human.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp", serialize = "human-vs-human")]
    HumanVsHuman,
    /// A human (X) plays the computer (O).
    #[serde(rename = "pvc")]
    #[strum(to_string = "pvc", serialize = "human-vs-computer")]
    HumanVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
        }
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The first complete line in scan order.
        line: WinningLine,
    },
    /// Board full with no complete line.
    Drawn,
    /// Stopped early, with no line and empty squares left.
    Ended,
}

/// What a completed turn led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues; `next` is to move.
    Continue {
        /// The mark to move next.
        next: Mark,
    },
    /// The move completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The line it completed.
        line: WinningLine,
    },
    /// The move filled the board with no line.
    Drawn,
}

/// A played move together with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Turn {
    /// The move that was played.
    pub played: Move,
    /// What it led to.
    pub outcome: MoveOutcome,
}

/// A single game of tic-tac-toe.
///
/// The session is the only owner of the board. Every mutation goes through
/// [`GameSession::apply_move`], which rejects illegal moves without touching
/// state. Turn advancement is a separate step so callers can inspect the
/// outcome first; [`GameSession::play`] composes the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) mode: GameMode,
    pub(crate) active: bool,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            mode,
            active: true,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns false once the game has been won, drawn or ended.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The human's mark against the computer.
    pub fn human_mark(&self) -> Mark {
        Mark::X
    }

    /// The computer's mark.
    pub fn computer_mark(&self) -> Mark {
        Mark::O
    }

    /// Clears the board, gives X the move and reactivates the game.
    ///
    /// The mode is kept.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
        info!("Game reset");
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: GameMode) {
        *self = Self::new(mode);
        info!(%mode, "Mode changed");
    }

    /// Places `mark` at `index` without advancing the turn.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the index is off the
    /// board, it is not `mark`'s turn or the square is occupied. State is
    /// untouched on error.
    #[instrument(skip(self), fields(current = %self.current_player))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        let mov = Move::new(mark, index);
        MoveContract::pre(self, &mov).inspect_err(|e| warn!(error = %e, "Move rejected"))?;

        self.board
            .set(index, Square::Occupied(mark))
            .ok_or(InvalidMove::OutOfBounds(index))?;
        self.history.push(mov);
        debug!(%mov, "Move applied");
        Ok(())
    }

    /// First complete line in scan order, if any.
    pub fn check_winner(&self) -> Option<WinningLine> {
        rules::check_winner(&self.board)
    }

    /// The mark owning the first complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.check_winner()
            .and_then(|line| line.owner(&self.board))
    }

    /// Board full with no complete line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Hands the move to the other mark.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        debug!(next = %self.current_player, "Turn advanced");
    }

    /// Marks the game as ended. Idempotent.
    pub fn end_game(&mut self) {
        self.active = false;
    }

    /// Status derived from the board and the active flag.
    ///
    /// A game stopped with [`GameSession::end_game`] before any line or a
    /// full board reports [`GameStatus::Ended`].
    pub fn status(&self) -> GameStatus {
        match (self.winner(), self.check_winner()) {
            (Some(mark), Some(line)) => GameStatus::Won { mark, line },
            _ if rules::is_full(&self.board) => GameStatus::Drawn,
            _ if !self.active => GameStatus::Ended,
            _ => GameStatus::InProgress,
        }
    }

    /// Plays a full turn: place, then end the game or advance the turn.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when a precondition fails or, in debug
    /// builds, when a session invariant breaks. The session is unchanged
    /// either way.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, InvalidMove> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        self.apply_move(index, mark)?;

        let outcome = if let Some(line) = self.check_winner() {
            self.end_game();
            info!(%mark, %line, "Game won");
            MoveOutcome::Won { mark, line }
        } else if rules::is_full(&self.board) {
            self.end_game();
            info!("Game drawn");
            MoveOutcome::Drawn
        } else {
            self.advance_turn();
            MoveOutcome::Continue {
                next: self.current_player,
            }
        };

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(outcome)
    }

    /// Plays a human move at `index`.
    ///
    /// Against the computer the human always plays X, so a click while the
    /// computer is to move is rejected as [`InvalidMove::WrongPlayer`].
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<Turn, InvalidMove> {
        let mark = match self.mode {
            GameMode::HumanVsHuman => self.current_player,
            GameMode::HumanVsComputer => self.human_mark(),
        };
        let outcome = self.play(index, mark)?;
        Ok(Turn::new(Move::new(mark, index), outcome))
    }

    /// True when the computer should reply now.
    pub fn awaiting_computer(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.active
            && self.current_player == self.computer_mark()
    }

    /// Asks `policy` for the computer's move and plays it.
    ///
    /// Second phase of a computer turn; any delay before it belongs to the
    /// caller.
    ///
    /// # Errors
    ///
    /// [`InvalidMove::GameOver`] if the game ended meanwhile,
    /// [`InvalidMove::WrongPlayer`] if the computer is not to move, and
    /// [`InvalidMove::NoMoveAvailable`] if the policy finds no square.
    #[instrument(skip(self, policy), fields(policy = policy.name()))]
    pub fn apply_computer_move<P>(&mut self, policy: &mut P) -> Result<Turn, InvalidMove>
    where
        P: OpponentPolicy + ?Sized,
    {
        GameActive::check(self)?;
        let computer = self.computer_mark();
        if !self.awaiting_computer() {
            return Err(InvalidMove::WrongPlayer(computer));
        }

        let index = policy
            .select_move(&self.board, computer, computer.opponent())
            .ok_or(InvalidMove::NoMoveAvailable)?;
        let outcome = self.play(index, computer)?;
        Ok(Turn::new(Move::new(computer, index), outcome))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
