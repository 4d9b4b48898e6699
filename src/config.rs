use std::env;

pub struct Config;

impl Config {
    pub fn database_url() -> String {
        env::var("DATABASE_URL").expect("No DATABASE_URL environment variable found")
    }

    pub fn max_idle_connections() -> u32 {
        Self::parse_var("MAX_IDLE_CONNECTIONS", 5)
    }

    pub fn max_open_connections() -> u32 {
        Self::parse_var("MAX_OPEN_CONNECTIONS", 10)
    }

    fn parse_var(name: &str, default: u32) -> u32 {
        match env::var(name) {
            Ok(value) => value
                .parse::<u32>()
                .unwrap_or_else(|_| panic!("{} must be a number", name)),
            Err(_) => default,
        }
    }
}
