use std::io::{self, Write};

use anyhow::{Result, bail};
use rpassword::prompt_password;
use shared::SessionStore;
use shared::models::Session;

use super::{Settings, describe};

pub async fn login(settings: &Settings, email: Option<String>) -> Result<()> {
    let api = settings.client()?;
    let email = match email {
        Some(email) if !email.trim().is_empty() => email.trim().to_string(),
        _ => prompt("Email: ")?,
    };
    let password = prompt_password("Password: ")?;
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let session = api.login(&email, &password).await.map_err(describe)?;
    print_session_summary(&session);
    println!("session stored at {}", api.store().path().display());
    Ok(())
}

pub fn logout(settings: &Settings) -> Result<()> {
    let api = settings.client()?;
    let path = api.store().path().to_path_buf();
    if api.store().load_raw().map_err(|err| describe(err.into()))?.is_none() {
        println!("No session found at {}", path.display());
        return Ok(());
    }
    api.logout().map_err(describe)?;
    println!("Removed session at {}", path.display());
    Ok(())
}

pub fn whoami(settings: &Settings) -> Result<()> {
    let api = settings.client()?;
    let session = api.require_auth().map_err(describe)?;
    print_session_summary(&session);
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        bail!("input must not be empty");
    }
    Ok(trimmed)
}

fn print_session_summary(session: &Session) {
    println!("Logged in as {}", session.email);
    println!("name: {}", session.display_name());
    println!("role: {}", session.role);
    println!("avatar: {}", session.avatar_url());
}
