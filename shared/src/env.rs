/// The environment the server is running in. Controls the default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development";
    #[cfg(not(debug_assertions))]
    let default_env = "production";

    let env = std::env::var("ENV").unwrap_or_else(|_| default_env.into());
    match env.as_str() {
        "production" => Environment::Production,
        _ => Environment::Development,
    }
}
