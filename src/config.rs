use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    pub packages_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("OUTPUT_FORMAT").ok(),
            std::env::var("PACKAGES_PATH").ok(),
        )
    }

    fn from_vars(output: Option<String>, packages_path: Option<String>) -> Self {
        let output = output
            .as_deref()
            .and_then(OutputFormat::from_str)
            .unwrap_or(OutputFormat::Text);

        let packages_path = packages_path
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            output,
            packages_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_text_without_packages_file() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.packages_path.is_none());
    }

    #[test]
    fn unknown_output_format_falls_back_to_text() {
        let config = Config::from_vars(Some("yaml".into()), Some("  ".into()));
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.packages_path.is_none());
    }

    #[test]
    fn reads_json_output_and_path() {
        let config = Config::from_vars(Some("JSON".into()), Some("packages.json".into()));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.packages_path, Some(PathBuf::from("packages.json")));
    }
}
