use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("duplicate faq id: {0}")]
    DuplicateId(String),

    #[error("faq {0}: empty question")]
    EmptyQuestion(String),

    #[error("faq {0}: empty answer")]
    EmptyAnswer(String),

    #[error("intent #{0}: trigger normalizes to nothing")]
    EmptyTrigger(usize),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
