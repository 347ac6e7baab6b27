//! Provider configuration
//!
//! Mirrors the `[annotation]` section of the CLI configuration file. Every
//! field has a default so partial files deserialize.

use crate::dictionary::DictionaryAnnotator;
use crate::error::{AnnotateError, Result};
use crate::retry::RetryPolicy;
use crate::web::WebAnnotator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use stopa_core::{NoAnnotation, StressAnnotator};

/// Default stress-marking page
pub const DEFAULT_ENDPOINT: &str = "https://slovnyk.ua/nagolos.php";

/// Which annotator to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Stress-marking web page
    #[default]
    Web,
    /// Offline TOML dictionary
    Dictionary,
    /// No annotation, text is analyzed as given
    None,
}

impl ProviderKind {
    /// All provider kinds
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::Web,
        ProviderKind::Dictionary,
        ProviderKind::None,
    ];

    /// Name used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Web => "web",
            ProviderKind::Dictionary => "dictionary",
            ProviderKind::None => "none",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = AnnotateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnnotateError::Config(format!("unknown annotator '{s}'")))
    }
}

/// Web annotator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Page the text is posted to
    pub endpoint: String,
    /// Form field carrying the text
    pub form_field: String,
    /// Id of the element holding the annotated text
    pub result_id: String,
    /// Attempts and delay between them
    pub retry: RetryPolicy,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            form_field: "text".to_string(),
            result_id: "emph".to_string(),
            retry: RetryPolicy::default(),
            timeout_secs: 30,
            user_agent: concat!("stopa/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl WebConfig {
    /// Check the settings for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(AnnotateError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.form_field.trim().is_empty() {
            return Err(AnnotateError::Config("form_field must not be empty".into()));
        }
        if self.result_id.trim().is_empty() {
            return Err(AnnotateError::Config("result_id must not be empty".into()));
        }
        if self.retry.attempts == 0 {
            return Err(AnnotateError::Config(
                "retry.attempts must be at least 1".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AnnotateError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Annotation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Provider to use
    pub provider: ProviderKind,
    /// Web provider settings
    pub web: WebConfig,
    /// Dictionary file for the dictionary provider
    pub dictionary: Option<PathBuf>,
}

impl AnnotationConfig {
    /// Check the settings of the selected provider
    pub fn validate(&self) -> Result<()> {
        match self.provider {
            ProviderKind::Web => self.web.validate(),
            ProviderKind::Dictionary if self.dictionary.is_none() => Err(AnnotateError::Config(
                "dictionary provider needs a dictionary file".into(),
            )),
            ProviderKind::Dictionary | ProviderKind::None => Ok(()),
        }
    }

    /// Build the selected annotator
    pub fn build(&self) -> Result<Box<dyn StressAnnotator>> {
        self.validate()?;

        let annotator: Box<dyn StressAnnotator> = match self.provider {
            ProviderKind::Web => Box::new(WebAnnotator::from_config(&self.web)?),
            ProviderKind::Dictionary => {
                let path = self.dictionary.as_ref().ok_or_else(|| {
                    AnnotateError::Config("dictionary provider needs a dictionary file".into())
                })?;
                Box::new(DictionaryAnnotator::from_file(path)?)
            }
            ProviderKind::None => Box::new(NoAnnotation),
        };

        log::debug!("using {} annotator", annotator.name());
        Ok(annotator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("web".parse::<ProviderKind>().unwrap(), ProviderKind::Web);
        assert_eq!(
            " Dictionary ".parse::<ProviderKind>().unwrap(),
            ProviderKind::Dictionary
        );
        assert_eq!("NONE".parse::<ProviderKind>().unwrap(), ProviderKind::None);
        assert!("google".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AnnotationConfig = toml::from_str(
            r#"
            provider = "web"

            [web]
            form_field = "word"

            [web.retry]
            attempts = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.web.form_field, "word");
        assert_eq!(config.web.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.web.result_id, "emph");
        assert_eq!(config.web.retry.attempts, 5);
        assert_eq!(config.web.retry.delay_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = AnnotationConfig::default();
        assert!(config.validate().is_ok());

        config.web.endpoint = "ftp://example.com".into();
        assert!(config.validate().is_err());

        config.provider = ProviderKind::Dictionary;
        assert!(config.validate().is_err());

        config.dictionary = Some(PathBuf::from("words.toml"));
        assert!(config.validate().is_ok());

        let web = WebConfig {
            retry: RetryPolicy::new(0, std::time::Duration::ZERO),
            ..WebConfig::default()
        };
        assert!(web.validate().is_err());
    }

    #[test]
    fn test_build_none() {
        let config = AnnotationConfig {
            provider: ProviderKind::None,
            ..AnnotationConfig::default()
        };
        let annotator = config.build().unwrap();
        assert_eq!(annotator.name(), "none");
        assert!(annotator.annotate("мама").is_none());
    }

    #[test]
    fn test_build_missing_dictionary_file() {
        let config = AnnotationConfig {
            provider: ProviderKind::Dictionary,
            dictionary: Some(PathBuf::from("/nonexistent/stopa/words.toml")),
            ..AnnotationConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(AnnotateError::DictionaryIo { .. })
        ));
    }
}
