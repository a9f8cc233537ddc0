use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    // Configuration errors
    #[error(
        "⚠️ API Key missing! Please sign up at https://autoreleasenote.com to procure your key."
    )]
    MissingApiKey,

    #[error(
        "⚠️ Project ID missing! Create a project at https://autoreleasenote.com to obtain one."
    )]
    MissingProjectId,

    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {input}\nSupport boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBooleanInput { input: String },

    // Runner file command errors
    #[error("failed to write runner file {path}: {source}")]
    RunnerFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, ActionError>;
