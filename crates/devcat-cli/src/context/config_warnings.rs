use devcat_config::CatalogConfig;

/// Emit warnings for likely mistyped env var keys and placeholder settings.
pub fn warn_unconfigured(config: &CatalogConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CatalogConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.source.is_configured() && has_env_prefix(&env_keys, "DEVCATALOG_SOURCE") {
        warnings.push(
            "Source config appears default while DEVCATALOG_SOURCE* env vars exist. Use double underscores (example: DEVCATALOG_SOURCE__URL)."
                .to_string(),
        );
    }

    if !config.feedback.is_configured() && has_env_prefix(&env_keys, "DEVCATALOG_FEEDBACK") {
        warnings.push(
            "Feedback config appears default while DEVCATALOG_FEEDBACK* env vars exist. Use double underscores (example: DEVCATALOG_FEEDBACK__EMAIL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use devcat_config::{CatalogConfig, FeedbackConfig, SourceConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_unconfigured_sections_with_env_prefixes() {
        let config = CatalogConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                (
                    "DEVCATALOG_SOURCE_URL".to_string(),
                    "https://example.com/apps.xlsx".to_string(),
                ),
                (
                    "DEVCATALOG_FEEDBACK_EMAIL".to_string(),
                    "dev@example.com".to_string(),
                ),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("DEVCATALOG_SOURCE__URL"));
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = CatalogConfig {
            source: SourceConfig {
                url: "https://example.com/apps.xlsx".to_string(),
                ..Default::default()
            },
            feedback: FeedbackConfig {
                email: "dev@example.com".to_string(),
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                (
                    "DEVCATALOG_SOURCE__URL".to_string(),
                    "https://example.com/apps.xlsx".to_string(),
                ),
                (
                    "DEVCATALOG_FEEDBACK__EMAIL".to_string(),
                    "dev@example.com".to_string(),
                ),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn no_env_means_no_warnings() {
        let warnings = collect_unconfigured_warnings(&CatalogConfig::default(), Vec::new());
        assert!(warnings.is_empty());
    }
}
