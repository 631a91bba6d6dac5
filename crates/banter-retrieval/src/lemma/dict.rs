//! Dictionary lemmatizer: exception table first, then ordered noun suffix
//! substitutions, iterated to a fixed point so repeated application is a
//! no-op.

use std::collections::HashMap;

use banter_core::traits::ILemmatizer;

/// Noun suffix substitutions, longest suffix first. A substitution only
/// fires when the remaining stem keeps a sensible length.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("sses", "ss"),
    ("ies", "y"),
    ("men", "man"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ses", "s"),
    ("s", ""),
];

/// Irregular plurals the suffix rules cannot reach. Every value is a fixed
/// point of [`DictLemmatizer::lemmatize`].
const EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("people", "person"),
    ("dice", "die"),
    ("movies", "movie"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
];

/// Exception-dictionary lemmatizer with morphy-style suffix rules.
pub struct DictLemmatizer {
    exceptions: HashMap<String, String>,
}

impl DictLemmatizer {
    /// Build with the builtin exception table.
    pub fn builtin() -> Self {
        Self::with_exceptions(
            EXCEPTIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    /// Build with an injected exception dictionary.
    pub fn with_exceptions(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            exceptions: entries.into_iter().collect(),
        }
    }

    /// One reduction step: exception lookup, then the first applicable
    /// suffix rule. Returns `None` when the token is already a base form.
    fn step(&self, token: &str) -> Option<String> {
        if let Some(base) = self.exceptions.get(token) {
            if base != token {
                return Some(base.clone());
            }
            return None;
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = token.strip_suffix(suffix) {
                // Bare-"s" stripping is the noisiest rule; keep short words
                // and -ss/-us/-is endings intact.
                if *suffix == "s"
                    && (token.len() < 4
                        || token.ends_with("ss")
                        || token.ends_with("us")
                        || token.ends_with("is"))
                {
                    continue;
                }
                if stem.is_empty() {
                    continue;
                }
                return Some(format!("{stem}{replacement}"));
            }
        }
        None
    }
}

impl ILemmatizer for DictLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        let mut current = token.to_string();
        // Every rule either shortens the token or lands on a fixed point,
        // so this terminates; iterating to the fixed point makes repeated
        // lemmatization a no-op.
        while let Some(next) = self.step(&current) {
            current = next;
        }
        current
    }

    fn name(&self) -> &str {
        "dict"
    }
}
