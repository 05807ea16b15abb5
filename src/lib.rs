//! Stream and career recommendation from aptitude quizzes.
//!
//! A [`QuestionBank`] maps every option to one [`Category`]; the [`Scorer`] counts
//! the categories picked in a complete [`AnswerSet`] and resolves the most frequent
//! one, and a [`GuidanceTable`] turns the result into display text.

mod answer;
mod bank;
mod bulk;
mod error;
mod guidance;
pub mod pathway;
mod quiz;
pub mod remote;
mod score;

pub use answer::{Answer, AnswerSet};
pub use bank::{AnswerOption, Category, Question, QuestionBank};
pub use bulk::read_bulk;
pub use error::{Error, Result};
pub use guidance::{Guidance, GuidanceTable};
pub use quiz::{quiz, Alternate, Quiz, Report, QUIZZES};
pub use score::{CategoryCount, Outcome, Recommendation, Scorer, Tally, TieBreak};
