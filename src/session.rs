//! Fake authentication session, persisted as a small JSON file.
//!
//! This stands in for the original dashboard's local-storage user object:
//! login checks two hard-coded demo credential pairs, `--remember` writes the
//! user to `~/.config/finsight/session.json`, and logout deletes the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The authenticated (fake) user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Check the fixed demo credential pairs. Returns the user identity on a
/// match, `None` otherwise.
pub fn authenticate(email: &str, password: &str) -> Option<User> {
    match (email, password) {
        ("demo@finsight.com", "password123") => Some(User {
            email: email.to_string(),
            name: Some("Demo User".to_string()),
        }),
        ("user", "123") => Some(User {
            email: email.to_string(),
            name: Some("Regular User".to_string()),
        }),
        _ => None,
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("finsight")
}

pub fn session_path() -> PathBuf {
    config_dir().join("session.json")
}

/// Load the remembered user from `path`. Missing or unreadable files yield
/// `None` rather than an error, like a cleared local storage.
pub fn load_user_from(path: &Path) -> Option<User> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn load_user() -> Option<User> {
    load_user_from(&session_path())
}

pub fn save_user_to(path: &Path, user: &User) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(user)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

pub fn save_user(user: &User) -> Result<()> {
    save_user_to(&session_path(), user)
}

pub fn clear_user_at(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

pub fn clear_user() -> Result<()> {
    clear_user_at(&session_path())
}
