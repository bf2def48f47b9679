//! Detection engine
//!
//! Scans a free-text project description against the lexicon and produces a
//! [`PartialProfile`]. Detection is purely lexical: it performs no
//! cross-field validation (the resolver owns that), and unrecognized input
//! is never an error - it simply leaves fields unset.

use super::lexicon::{lexicon, NAME_STOP_WORDS};
use crate::profile::{EnvironmentId, PartialProfile};
use regex::Regex;
use tracing::debug;

/// Extracts structured signals from a project description.
///
/// Single-valued fields use an explicit tie-break: when several candidates
/// match, the one whose match starts earliest in the input wins ("Django and
/// Flask" detects Django). Multi-valued fields accumulate every match,
/// deduplicated.
pub fn detect(text: &str) -> PartialProfile {
    if text.trim().is_empty() {
        return PartialProfile::default();
    }

    let lex = lexicon();

    let mut partial = PartialProfile {
        app_name: extract_app_name(text, &lex.names),
        language: first_match(text, &lex.languages),
        framework: first_match(text, &lex.frameworks),
        platform: first_match(text, &lex.platforms),
        datastores: lex
            .datastores
            .iter()
            .filter(|(re, _)| re.is_match(text))
            .map(|(_, id)| *id)
            .collect(),
        environments: Vec::new(),
    };

    let mut environments: Vec<EnvironmentId> = lex
        .environments
        .iter()
        .filter(|(re, _)| re.is_match(text))
        .map(|(_, id)| *id)
        .collect();
    if !environments.is_empty() {
        // Any explicit stage implies a production stage at the end of the
        // promotion chain.
        environments.push(EnvironmentId::Production);
        environments.sort();
        environments.dedup();
    }
    partial.environments = environments;

    debug!(?partial, "detection complete");
    partial
}

/// Earliest-match-position tie-break over a compiled trigger table.
/// Exact position ties fall back to table order.
fn first_match<T: Copy>(text: &str, table: &[(Regex, T)]) -> Option<T> {
    let mut best: Option<(usize, T)> = None;
    for (re, id) in table {
        if let Some(m) = re.find(text) {
            if best.map_or(true, |(start, _)| m.start() < start) {
                best = Some((m.start(), *id));
            }
        }
    }
    best.map(|(_, id)| id)
}

fn extract_app_name(text: &str, patterns: &[Regex]) -> Option<String> {
    for re in patterns {
        if let Some(caps) = re.captures(text) {
            let name = caps[1].to_lowercase();
            if name.len() > 1 && !NAME_STOP_WORDS.contains(&name.as_str()) {
                return Some(name);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DatastoreId, FrameworkId, LanguageId, PlatformId};

    #[test]
    fn test_detect_full_sentence() {
        let partial = detect(
            "Node.js Express app with PostgreSQL database, deploying to Heroku \
             with staging and production environments",
        );

        assert_eq!(partial.language, Some(LanguageId::Node));
        assert_eq!(partial.framework, Some(FrameworkId::Express));
        assert_eq!(partial.platform, Some(PlatformId::Heroku));
        assert_eq!(
            partial.datastores,
            [DatastoreId::Postgres].into_iter().collect()
        );
        assert_eq!(
            partial.environments,
            vec![EnvironmentId::Staging, EnvironmentId::Production]
        );
    }

    #[test]
    fn test_detect_empty_input_is_not_an_error() {
        assert_eq!(detect(""), PartialProfile::default());
        assert_eq!(detect("   \t\n"), PartialProfile::default());
    }

    #[test]
    fn test_detect_unrecognized_input_yields_empty_profile() {
        let partial = detect("a lovely application for cataloguing houseplants");
        assert!(partial.is_empty());
    }

    #[test]
    fn test_first_match_in_input_order_wins() {
        // Both frameworks appear; the earlier mention wins.
        let partial = detect("we use Django but are considering Flask");
        assert_eq!(partial.framework, Some(FrameworkId::Django));

        let partial = detect("we use Flask but are considering Django");
        assert_eq!(partial.framework, Some(FrameworkId::Flask));
    }

    #[test]
    fn test_datastores_accumulate_and_dedup() {
        let partial = detect("postgres for data, postgresql for analytics, redis for cache");
        assert_eq!(
            partial.datastores,
            [DatastoreId::Postgres, DatastoreId::Redis]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn test_environment_mention_implies_production() {
        let partial = detect("python api with a staging environment");
        assert_eq!(
            partial.environments,
            vec![EnvironmentId::Staging, EnvironmentId::Production]
        );
    }

    #[test]
    fn test_environments_ordered_by_promotion_rank() {
        let partial = detect("deploy to production then staging then dev");
        assert_eq!(
            partial.environments,
            vec![
                EnvironmentId::Development,
                EnvironmentId::Staging,
                EnvironmentId::Production
            ]
        );
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let partial = detect("NODE.JS, express; heroku!");
        assert_eq!(partial.language, Some(LanguageId::Node));
        assert_eq!(partial.framework, Some(FrameworkId::Express));
        assert_eq!(partial.platform, Some(PlatformId::Heroku));
    }

    #[test]
    fn test_framework_trigger_pins_language() {
        let partial = detect("a Flask service");
        assert_eq!(partial.language, Some(LanguageId::Python));
        assert_eq!(partial.framework, Some(FrameworkId::Flask));
    }

    #[test]
    fn test_app_name_extraction() {
        let partial = detect("a Node.js service called shop-api on AWS");
        assert_eq!(partial.app_name, Some("shop-api".to_string()));

        // Stop words are never taken as names.
        let partial = detect("an app called production something");
        assert_eq!(partial.app_name, None);
    }

    #[test]
    fn test_no_cross_field_validation_at_detection_time() {
        // Node + Django is contradictory, but detection reports both signals
        // verbatim; legality is the resolver's concern.
        let partial = detect("node.js app with django");
        assert_eq!(partial.language, Some(LanguageId::Node));
        assert_eq!(partial.framework, Some(FrameworkId::Django));
    }
}
