use devcat_config::CatalogConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`), then apply `--source`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CatalogConfig> {
    let mut config = CatalogConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut CatalogConfig, flags: &GlobalFlags) {
    if let Some(target) = flags.source.as_deref() {
        tracing::debug!(target, "source overridden from command line");
        config.source.set_target(target);
    }
}

#[cfg(test)]
mod tests {
    use devcat_config::SourceLocation;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(source: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn source_flag_replaces_configured_url() {
        let mut config = devcat_config::CatalogConfig::default();
        config.source.url = "https://example.com/apps.xlsx".to_string();

        apply_overrides(&mut config, &flags(Some("data/local.xlsx")));
        assert_eq!(config.source.location(), SourceLocation::File("data/local.xlsx"));
    }

    #[test]
    fn url_flag_selects_remote_source() {
        let mut config = devcat_config::CatalogConfig::default();
        apply_overrides(&mut config, &flags(Some("https://example.com/apps.xlsx")));
        assert_eq!(
            config.source.location(),
            SourceLocation::Url("https://example.com/apps.xlsx")
        );
    }

    #[test]
    fn no_flag_keeps_config() {
        let mut config = devcat_config::CatalogConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(
            config.source.location(),
            SourceLocation::File(devcat_config::DEFAULT_SOURCE_PATH)
        );
    }
}
