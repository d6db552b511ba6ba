mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{CONFIG_VERSION, ChartConfig};
pub use validation::{ConfigIssue, validate_config};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = ChartConfig::default();
        assert!(config.version.is_none());
        assert!((config.bar.width - 500.0).abs() < f64::EPSILON);
        assert!((config.pie.start_angle + 90.0).abs() < f64::EPSILON);
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = ChartConfig::default();
        config.line.smooth = true;
        config.pie.hole_size = 0.3;

        let text = toml::to_string(&config).unwrap();
        let parsed: ChartConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
