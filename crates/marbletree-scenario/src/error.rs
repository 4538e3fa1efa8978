use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for scenario loading, validation, compilation, and builder operations.
pub enum ScenarioError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("scenario declares no items")]
    EmptyDataset,

    #[error("duplicate item id {id}")]
    DuplicateItemId { id: u32 },

    #[error("scenario declares no questions")]
    NoQuestions,

    #[error("question key must not be blank")]
    BlankQuestionKey,

    #[error("question '{key}' has a blank prompt")]
    BlankPrompt { key: String },

    #[error("duplicate question key '{key}'")]
    DuplicateQuestionKey { key: String },
}
