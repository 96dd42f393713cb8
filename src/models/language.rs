//! Source language selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the snippet in the editor.
///
/// Only used for display and editor hints; the backend detects nothing from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Java,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::Cpp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }

    /// Next language in selector order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Language::Python => Language::JavaScript,
            Language::JavaScript => Language::Java,
            Language::Java => Language::Cpp,
            Language::Cpp => Language::Python,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_python() {
        assert_eq!(Language::default(), Language::Python);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut lang = Language::Python;
        for expected in Language::ALL.iter().cycle().skip(1).take(4) {
            lang = lang.next();
            assert_eq!(lang, *expected);
        }
        assert_eq!(lang, Language::Python);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("py".parse::<Language>(), Ok(Language::Python));
        assert_eq!("JS".parse::<Language>(), Ok(Language::JavaScript));
        assert_eq!("c++".parse::<Language>(), Ok(Language::Cpp));
        assert!("cobol".parse::<Language>().is_err());
    }
}
