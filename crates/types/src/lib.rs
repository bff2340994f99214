pub mod language;
pub mod value;

pub use language::{ParseLanguageError, ScriptLanguage};
pub use value::ScriptValue;
