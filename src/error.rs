use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Question index past the end of the bank
    #[error("question index {index} is out of range (bank has {size} questions)")]
    OutOfRange { index: usize, size: usize },

    #[error("option '{option}' is not offered by question {index}")]
    UnknownOption { index: usize, option: String },

    /// Fewer answers than questions
    #[error("{answered} of {required} questions answered")]
    IncompleteAnswerSet { answered: usize, required: usize },

    #[error("answer index {index} is duplicated or out of range")]
    InvalidAnswerIndex { index: usize },

    #[error("question bank has no questions")]
    EmptyBank,

    #[error("question bank declares no categories")]
    NoCategories,

    #[error("category '{0}' is declared twice")]
    DuplicateCategory(String),

    #[error("question {id} needs at least two options")]
    TooFewOptions { id: u32 },

    #[error("question {id} lists option '{option}' twice")]
    DuplicateOption { id: u32, option: String },

    #[error("question {id} maps to undeclared category '{category}'")]
    UndeclaredCategory { id: u32, category: String },

    #[error("question at position {position} has id {id}")]
    QuestionOutOfOrder { position: usize, id: u32 },

    #[error("no quiz named '{0}'")]
    UnknownQuiz(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
