//! The trivia quiz engine: word pool, round generation, and the score/lives
//! state machine. UI-independent; rendering lives in `crate::ui`.

pub mod levels;
pub mod logic;
pub mod types;

pub use levels::{level_for_score, Level, LEVELS};
pub use logic::{advance, begin, generate_round, restart, shuffle, submit_answer};
pub use types::{
    GamePhase, GameSnapshot, InsufficientWords, ResolvedRound, Round, TriviaGame,
};
