use std::env;

/// Runtime configuration, read once at startup. A missing or empty
/// `BOT_TOKEN` is the only fatal condition.
pub struct Config {
    pub token: String,
    pub onboarding_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let token = env::var("BOT_TOKEN").unwrap_or_default();
        if token.is_empty() {
            return Err("BOT_TOKEN is missing".to_owned());
        }

        let onboarding_enabled = env::var("ONBOARDING_ENABLED")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        Ok(Self {
            token,
            onboarding_enabled,
        })
    }
}

fn parse_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_flag_parsing() {
        assert!(parse_bool("true"));
        assert!(parse_bool("1"));
        assert!(parse_bool("anything-else"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("FALSE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(" no "));
    }
}
