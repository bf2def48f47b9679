//! Trigger-phrase lexicon
//!
//! Static tables mapping word-boundary patterns to canonical technology
//! tokens. The tables are pure data; they are compiled into regexes exactly
//! once and shared read-only across every detection run.

use crate::profile::{DatastoreId, EnvironmentId, FrameworkId, LanguageId, PlatformId};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Language trigger patterns. Framework names are deliberately included as
/// language triggers so that "a Flask app" pins the language as well.
pub const LANGUAGE_TRIGGERS: &[(LanguageId, &[&str])] = &[
    (
        LanguageId::Node,
        &[
            r"\bnode\.?js\b",
            r"\bnode\b",
            r"\bjavascript\b",
            r"\bjs\b",
            r"\btypescript\b",
            r"\bts\b",
            r"\bnpm\b",
            r"\byarn\b",
            r"\bexpress\b",
            r"\bnext\.?js\b",
            r"\bnest\.?js\b",
            r"\breact\b",
        ],
    ),
    (
        LanguageId::Python,
        &[
            r"\bpython\b",
            r"\bpy\b",
            r"\bdjango\b",
            r"\bflask\b",
            r"\bfastapi\b",
            r"\bpip\b",
            r"\bpoetry\b",
            r"\bpytest\b",
        ],
    ),
];

pub const FRAMEWORK_TRIGGERS: &[(FrameworkId, &[&str])] = &[
    (FrameworkId::Express, &[r"\bexpress(\.?js)?\b"]),
    (FrameworkId::NextJs, &[r"\bnext\.?js\b", r"\bnext\b"]),
    (FrameworkId::NestJs, &[r"\bnest\.?js\b", r"\bnest\b"]),
    (FrameworkId::Django, &[r"\bdjango\b"]),
    (FrameworkId::Flask, &[r"\bflask\b"]),
    (FrameworkId::FastApi, &[r"\bfast\s*api\b"]),
];

pub const PLATFORM_TRIGGERS: &[(PlatformId, &[&str])] = &[
    (PlatformId::Heroku, &[r"\bheroku\b"]),
    (
        PlatformId::Aws,
        &[
            r"\baws\b",
            r"\bamazon\b",
            r"\bec2\b",
            r"\becs\b",
            r"\blambda\b",
            r"\bs3\b",
        ],
    ),
    (
        PlatformId::Gcp,
        &[
            r"\bgcp\b",
            r"\bgoogle\s*cloud\b",
            r"\bcloud\s*run\b",
            r"\bgke\b",
        ],
    ),
    (
        PlatformId::Azure,
        &[r"\bazure\b", r"\bmicrosoft\b", r"\baks\b"],
    ),
];

pub const DATASTORE_TRIGGERS: &[(DatastoreId, &[&str])] = &[
    (
        DatastoreId::Postgres,
        &[r"\bpostgres(ql)?\b", r"\bpg\b"],
    ),
    (DatastoreId::Mysql, &[r"\bmysql\b", r"\bmariadb\b"]),
    (DatastoreId::Mongodb, &[r"\bmongo(db)?\b"]),
    (DatastoreId::Redis, &[r"\bredis\b"]),
];

pub const ENVIRONMENT_TRIGGERS: &[(EnvironmentId, &[&str])] = &[
    (
        EnvironmentId::Development,
        &[r"\bdev\b", r"\bdevelopment\b"],
    ),
    (
        EnvironmentId::Preview,
        &[r"\bpreview\b", r"\bpr\s*deploy"],
    ),
    (EnvironmentId::Staging, &[r"\bstaging\b", r"\bstage\b"]),
    (
        EnvironmentId::Production,
        &[r"\bprod\b", r"\bproduction\b"],
    ),
];

/// Phrases that introduce a project name.
pub const NAME_TRIGGERS: &[&str] = &[
    r#"(?:called|named)\s+["']?([a-z][\w-]*)["']?"#,
    r#"project\s+["']?([a-z][\w-]*)["']?"#,
];

/// Words never taken as a project name, mostly technology tokens that can
/// follow the trigger phrases.
pub const NAME_STOP_WORDS: &[&str] = &[
    "i", "a", "an", "the", "my", "our", "this", "that", "to", "want", "need", "have", "will",
    "would", "should", "node", "nodejs", "python", "express", "django", "flask", "fastapi",
    "heroku", "aws", "gcp", "azure", "docker", "unit", "test", "tests", "staging", "production",
    "deploy", "deployment", "with", "and", "or", "for", "using", "on",
];

/// Compiled lexicon, built once per process.
pub struct Lexicon {
    pub languages: Vec<(Regex, LanguageId)>,
    pub frameworks: Vec<(Regex, FrameworkId)>,
    pub platforms: Vec<(Regex, PlatformId)>,
    pub datastores: Vec<(Regex, DatastoreId)>,
    pub environments: Vec<(Regex, EnvironmentId)>,
    pub names: Vec<Regex>,
}

fn compile<T: Copy>(triggers: &[(T, &[&str])]) -> Vec<(Regex, T)> {
    triggers
        .iter()
        .flat_map(|(id, patterns)| {
            patterns.iter().map(move |pattern| {
                let re = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid lexicon pattern {pattern:?}: {e}"));
                (re, *id)
            })
        })
        .collect()
}

/// Returns the shared compiled lexicon.
pub fn lexicon() -> &'static Lexicon {
    static LEXICON: OnceLock<Lexicon> = OnceLock::new();
    LEXICON.get_or_init(|| Lexicon {
        languages: compile(LANGUAGE_TRIGGERS),
        frameworks: compile(FRAMEWORK_TRIGGERS),
        platforms: compile(PLATFORM_TRIGGERS),
        datastores: compile(DATASTORE_TRIGGERS),
        environments: compile(ENVIRONMENT_TRIGGERS),
        names: NAME_TRIGGERS
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid name pattern {pattern:?}: {e}"))
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let lex = lexicon();
        assert!(!lex.languages.is_empty());
        assert!(!lex.frameworks.is_empty());
        assert!(!lex.platforms.is_empty());
        assert!(!lex.datastores.is_empty());
        assert!(!lex.environments.is_empty());
        assert_eq!(lex.names.len(), NAME_TRIGGERS.len());
    }

    #[test]
    fn test_word_boundaries_hold() {
        let lex = lexicon();
        // "production" must not be caught by the bare "\bprod\b" pattern.
        let prod = lex
            .environments
            .iter()
            .find(|(re, _)| re.as_str() == r"\bprod\b")
            .unwrap();
        assert!(!prod.0.is_match("production"));
        assert!(prod.0.is_match("deploy to prod"));
    }

    #[test]
    fn test_every_framework_has_triggers() {
        for fw in FrameworkId::all_variants() {
            assert!(
                FRAMEWORK_TRIGGERS.iter().any(|(id, _)| id == fw),
                "no trigger patterns for {fw}"
            );
        }
    }
}
