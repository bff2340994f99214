//! The scripting languages an `msxsl:script` block may be written in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The scripting language of a script block.
///
/// The `language` attribute is matched case-insensitively against a fixed
/// set of six tokens; see [`ScriptLanguage::from_str`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLanguage {
    /// `jscript` / `javascript`. Used when no `language` attribute is present.
    #[default]
    #[serde(alias = "javascript")]
    JScript,
    /// `vb` / `visualbasic`.
    #[serde(alias = "vb")]
    VisualBasic,
    /// `c#` / `csharp`.
    #[serde(alias = "c#")]
    CSharp,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid scripting language '{0}'")]
pub struct ParseLanguageError(pub String);

impl ScriptLanguage {
    pub const ALL: [ScriptLanguage; 3] = [
        ScriptLanguage::JScript,
        ScriptLanguage::VisualBasic,
        ScriptLanguage::CSharp,
    ];

    /// The canonical lowercase token for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptLanguage::JScript => "jscript",
            ScriptLanguage::VisualBasic => "visualbasic",
            ScriptLanguage::CSharp => "csharp",
        }
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptLanguage {
    type Err = ParseLanguageError;

    /// Folds case with Unicode lowercasing, which does not depend on the
    /// process locale, then matches the six recognised tokens exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jscript" | "javascript" => Ok(ScriptLanguage::JScript),
            "vb" | "visualbasic" => Ok(ScriptLanguage::VisualBasic),
            "c#" | "csharp" => Ok(ScriptLanguage::CSharp),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_tokens_case_insensitively() {
        let cases = [
            ("jscript", ScriptLanguage::JScript),
            ("JScript", ScriptLanguage::JScript),
            ("JAVASCRIPT", ScriptLanguage::JScript),
            ("vb", ScriptLanguage::VisualBasic),
            ("VB", ScriptLanguage::VisualBasic),
            ("VisualBasic", ScriptLanguage::VisualBasic),
            ("c#", ScriptLanguage::CSharp),
            ("C#", ScriptLanguage::CSharp),
            ("CSharp", ScriptLanguage::CSharp),
        ];
        for (token, expected) in cases {
            assert_eq!(token.parse::<ScriptLanguage>().unwrap(), expected, "token {token}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for token in ["python", "", " jscript", "jscript ", "c", "visual basic", "js"] {
            let err = token.parse::<ScriptLanguage>().unwrap_err();
            assert_eq!(err.0, token);
        }
    }

    #[test]
    fn test_default_is_jscript() {
        assert_eq!(ScriptLanguage::default(), ScriptLanguage::JScript);
    }

    #[test]
    fn test_display_uses_canonical_tokens() {
        assert_eq!(ScriptLanguage::JScript.to_string(), "jscript");
        assert_eq!(ScriptLanguage::VisualBasic.to_string(), "visualbasic");
        assert_eq!(ScriptLanguage::CSharp.to_string(), "csharp");
        for lang in ScriptLanguage::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang));
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for lang in ScriptLanguage::ALL {
            assert_eq!(lang.to_string().parse::<ScriptLanguage>().unwrap(), lang);
        }
    }

    #[test]
    fn test_serde_uses_canonical_names_and_accepts_aliases() {
        assert_eq!(serde_json::to_string(&ScriptLanguage::CSharp).unwrap(), "\"csharp\"");
        let vb: ScriptLanguage = serde_json::from_str("\"vb\"").unwrap();
        assert_eq!(vb, ScriptLanguage::VisualBasic);
        let js: ScriptLanguage = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(js, ScriptLanguage::JScript);
    }
}
