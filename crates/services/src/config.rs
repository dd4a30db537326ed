use std::env;
use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;

/// Connection settings for the hosted chat model.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// SMTP settings for mailing reports to the instructor.
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub sender: String,
    pub password: String,
    pub recipient: String,
}

/// Everything the app reads from the environment at startup.
#[derive(Clone, Debug)]
pub struct TutorConfig {
    pub agent: Option<AgentConfig>,
    pub mail: Option<MailConfig>,
    pub problems_path: PathBuf,
    pub images_dir: PathBuf,
}

impl TutorConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Missing credentials disable the agent or the mailer; they are not errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL or SMTP port is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let agent = match get("TUTOR_AI_API_KEY") {
            Some(api_key) => {
                let base_url = get("TUTOR_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
                if Url::parse(&base_url).is_err() {
                    return Err(ConfigError::InvalidBaseUrl(base_url));
                }
                Some(AgentConfig {
                    base_url,
                    api_key,
                    model: get("TUTOR_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
                })
            }
            None => None,
        };

        let port = match get("TUTOR_SMTP_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_SMTP_PORT,
        };
        let mail = match (
            get("TUTOR_EMAIL_SENDER"),
            get("TUTOR_EMAIL_PASSWORD"),
            get("TUTOR_REPORT_RECIPIENT"),
        ) {
            (Some(sender), Some(password), Some(recipient)) => Some(MailConfig {
                host: get("TUTOR_SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
                port,
                sender,
                password,
                recipient,
            }),
            _ => None,
        };

        Ok(Self {
            agent,
            mail,
            problems_path: get("TUTOR_PROBLEMS_PATH")
                .map_or_else(|| PathBuf::from("problems.json"), PathBuf::from),
            images_dir: get("TUTOR_IMAGES_DIR")
                .map_or_else(|| PathBuf::from("images"), PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<TutorConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        TutorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_disables_agent_and_mail() {
        let config = config_from(&[]).unwrap();
        assert!(config.agent.is_none());
        assert!(config.mail.is_none());
        assert_eq!(config.problems_path, PathBuf::from("problems.json"));
        assert_eq!(config.images_dir, PathBuf::from("images"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = config_from(&[("TUTOR_AI_API_KEY", "   ")]).unwrap();
        assert!(config.agent.is_none());
    }

    #[test]
    fn agent_defaults_apply_when_only_key_is_set() {
        let config = config_from(&[("TUTOR_AI_API_KEY", "k")]).unwrap();
        let agent = config.agent.unwrap();
        assert_eq!(agent.base_url, DEFAULT_BASE_URL);
        assert_eq!(agent.model, DEFAULT_MODEL);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = config_from(&[("TUTOR_AI_API_KEY", "k"), ("TUTOR_AI_BASE_URL", "not a url")]);
        assert!(matches!(err, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn mail_needs_sender_password_and_recipient() {
        let partial = config_from(&[("TUTOR_EMAIL_SENDER", "tutor@example.edu")]).unwrap();
        assert!(partial.mail.is_none());

        let full = config_from(&[
            ("TUTOR_EMAIL_SENDER", "tutor@example.edu"),
            ("TUTOR_EMAIL_PASSWORD", "secret"),
            ("TUTOR_REPORT_RECIPIENT", "instructor@example.edu"),
            ("TUTOR_SMTP_PORT", "2465"),
        ])
        .unwrap();
        let mail = full.mail.unwrap();
        assert_eq!(mail.host, DEFAULT_SMTP_HOST);
        assert_eq!(mail.port, 2465);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = config_from(&[("TUTOR_SMTP_PORT", "smtp")]);
        assert!(matches!(err, Err(ConfigError::InvalidPort(_))));
    }
}
