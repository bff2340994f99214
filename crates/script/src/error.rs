use msxsl_traits::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Invalid scripting language '{0}'")]
    InvalidLanguage(String),

    #[error("msxsl:script requires an implements-prefix attribute")]
    MissingImplementsPrefix,

    #[error("msxsl:script implements-prefix attribute must not be empty")]
    EmptyImplementsPrefix,

    #[error("A script block can only be read from an element node")]
    NotAnElement,

    #[error("A script block is already registered for prefix '{0}'")]
    DuplicatePrefix(String),

    #[error("Script compilation error: {0}")]
    Compile(#[from] CompileError),

    #[error("XML parsing error: {0}")]
    XmlParse(#[from] roxmltree::Error),
}

impl From<msxsl_types::ParseLanguageError> for ScriptError {
    fn from(e: msxsl_types::ParseLanguageError) -> Self {
        ScriptError::InvalidLanguage(e.0)
    }
}
