use colored::Colorize;

use crate::error::{FinsightError, Result};
use crate::session;

pub fn login(email: &str, password: &str, remember: bool) -> Result<()> {
    let user = session::authenticate(email, password).ok_or(FinsightError::InvalidCredentials)?;

    let name = user.name.as_deref().unwrap_or(&user.email);
    println!("{} Welcome back, {name}!", "✓".green());

    if remember {
        session::save_user(&user)?;
        println!("Session saved to {}", session::session_path().display());
    } else {
        println!("Session not persisted (pass --remember to stay signed in).");
    }
    Ok(())
}

pub fn logout() -> Result<()> {
    session::clear_user()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami() -> Result<()> {
    match session::load_user() {
        Some(user) => match user.name {
            Some(name) => println!("{name} <{}>", user.email),
            None => println!("{}", user.email),
        },
        None => println!("Not logged in."),
    }
    Ok(())
}
