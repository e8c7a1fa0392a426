use anyhow::{Context, Result, bail};
use invoice_application::{InvoiceDesk, LoginOutcome};

pub fn login(desk: &InvoiceDesk, username: &str, password: &str) -> Result<()> {
    let outcome = desk
        .login_service()
        .login(username, password)
        .context("Failed to open session")?;

    match outcome {
        LoginOutcome::Authenticated { session, redirect } => {
            println!("✅ Logged in as '{}'. Continue at {}.", session.username, redirect.path());
            Ok(())
        }
        LoginOutcome::Rejected(errors) => {
            for message in [errors.username, errors.password].into_iter().flatten() {
                eprintln!("  - {message}");
            }
            bail!("Login form incomplete")
        }
    }
}

pub fn logout(desk: &InvoiceDesk) -> Result<()> {
    let route = desk
        .login_service()
        .logout()
        .context("Failed to clear session")?;
    println!("👋 Logged out. Draft discarded. Back at {}.", route.path());
    Ok(())
}

pub fn whoami(desk: &InvoiceDesk) {
    match desk.sessions().get_session() {
        Some(session) if session.is_authenticated => println!("{}", session.username),
        _ => println!("(not logged in)"),
    }
}
