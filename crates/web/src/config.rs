use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PUBLIC_BASE_URL: &str = "https://blitzdotfun-three.vercel.app";
const DEFAULT_BATTLE_CARD_IMAGE_PATH: &str = "public/battle-card.png";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Public origin used in share links and page metadata, without trailing slash
    pub public_base_url: String,
    pub battle_card_image_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            public_base_url: lookup("PUBLIC_BASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            battle_card_image_path: lookup("BATTLE_CARD_IMAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BATTLE_CARD_IMAGE_PATH)),
        })
    }

    /// Database host part of the URL, safe to log
    pub fn database_host(&self) -> &str {
        self.database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("HOST", "0.0.0.0"),
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://user:secret@db:5432/blitz"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_base_url, DEFAULT_PUBLIC_BASE_URL);
        assert_eq!(
            config.battle_card_image_path,
            PathBuf::from(DEFAULT_BATTLE_CARD_IMAGE_PATH)
        );
        assert_eq!(config.database_host(), "db:5432/blitz");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PUBLIC_BASE_URL", "https://blitz.example/"));
        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.public_base_url, "https://blitz.example");
    }

    #[test]
    fn test_missing_or_bad_port() {
        let vars: Vec<_> = REQUIRED.iter().filter(|(k, _)| *k != "PORT").copied().collect();
        assert!(Config::from_lookup(lookup(&vars)).is_err());

        let mut vars = vars;
        vars.push(("PORT", "eighty"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}
