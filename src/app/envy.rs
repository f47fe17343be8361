use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub frontend_url: Option<String>,
    pub port: Option<u16>,

    pub database_url: String,
    pub database_max_connections: Option<u32>,

    pub seed_url: Option<String>,
}

pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn seed_url(&self) -> &str {
        match &self.seed_url {
            Some(url) => url,
            None => DEFAULT_SEED_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_applies_defaults() {
        let vars = vec![(
            "DATABASE_URL".to_string(),
            "postgres://localhost/transactions".to_string(),
        )];

        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.app_env, "development");
        assert_eq!(envy.port, None);
        assert_eq!(envy.seed_url(), DEFAULT_SEED_URL);
    }

    #[test]
    fn test_from_iter_requires_database_url() {
        let vars = vec![("PORT".to_string(), "3001".to_string())];

        assert!(envy::from_iter::<_, Envy>(vars).is_err());
    }
}
