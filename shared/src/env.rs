use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => parse_environment(&v).unwrap_or(default_env),
    }
}

fn parse_environment(value: &str) -> Option<Environment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "development" | "dev" => Some(Environment::Development),
        "production" | "prod" => Some(Environment::Production),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_environment_accepts_short_and_long_names() {
        assert_eq!(parse_environment("prod"), Some(Environment::Production));
        assert_eq!(
            parse_environment("Development"),
            Some(Environment::Development)
        );
        assert_eq!(parse_environment("staging"), None);
    }
}
