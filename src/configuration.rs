use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub scraper: ScraperSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct ScraperSettings {
    pub target_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_seconds: u64,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        // APP_SCRAPER__TIMEOUT_SECONDS=30 overrides scraper.timeout_seconds
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_file_deserializes() {
        let settings = get_configuration().expect("Failed to read configuration.");
        assert!(!settings.application.host.is_empty());
        assert!(settings.scraper.target_url.starts_with("http"));
        assert!(settings.scraper.timeout_seconds > 0);
    }

    #[test]
    fn environment_variables_override_the_base_file() {
        std::env::set_var("APP_APPLICATION__PORT", "7777");
        std::env::set_var("APP_SCRAPER__TIMEOUT_SECONDS", "30");

        let settings = get_configuration();

        std::env::remove_var("APP_APPLICATION__PORT");
        std::env::remove_var("APP_SCRAPER__TIMEOUT_SECONDS");

        let settings = settings.expect("Failed to read configuration.");
        assert_eq!(settings.application.port, 7777);
        assert_eq!(settings.scraper.timeout_seconds, 30);
    }
}
