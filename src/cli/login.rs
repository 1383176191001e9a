use std::io::{self, BufRead, Write};

use tracing::info;

use crate::api::{ChoreApi, HttpApi};
use crate::error::{ChoreError, Result};
use crate::storage::config::{self, Config};

/// Prompt for credentials, log in and persist the token
pub fn execute(username: Option<String>) -> Result<()> {
    let mut config = config::load_config();

    let username = match username {
        Some(name) => name,
        None => prompt_username()?,
    };
    let password = rpassword::prompt_password("Password: ")?;

    let api = HttpApi::from_config(&config);
    store_session(&api, &mut config, &username, &password)?;
    config::save_config(&config)?;

    println!("Logged in as {}", username);
    Ok(())
}

fn prompt_username() -> Result<String> {
    print!("Username: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim().to_string();
    if name.is_empty() {
        return Err(ChoreError::invalid_input("username cannot be empty"));
    }
    Ok(name)
}

/// Exchange credentials for a token and record it in `config`
pub fn store_session(
    api: &dyn ChoreApi,
    config: &mut Config,
    username: &str,
    password: &str,
) -> Result<()> {
    let token = api.login(username, password)?;
    info!(username, "logged in");
    config.session.token = Some(token);
    config.session.username = Some(username.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::FakeApi;

    #[test]
    fn test_store_session() {
        let api = FakeApi::new();
        let mut config = Config::default();
        store_session(&api, &mut config, "sam", "hunter2").unwrap();
        assert_eq!(config.session.token.as_deref(), Some("token-sam"));
        assert_eq!(config.session.username.as_deref(), Some("sam"));
    }

    #[test]
    fn test_failed_login_keeps_old_session() {
        let api = FakeApi::new();
        let mut config = Config::default();
        config.session.token = Some("old".to_string());
        assert!(store_session(&api, &mut config, "sam", "").is_err());
        assert_eq!(config.session.token.as_deref(), Some("old"));
        assert!(config.session.username.is_none());
    }
}
