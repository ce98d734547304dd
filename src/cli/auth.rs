//! Auth commands: sign in, register, sign out, whoami.

use clap::Subcommand;

use super::Ctx;
use crate::error::ApiError;
use crate::session::Session;

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
}

pub async fn handle(cmd: AuthCommand, ctx: &mut Ctx) -> anyhow::Result<()> {
    match cmd {
        AuthCommand::Login { email, password } => login(ctx, &email, &password).await,
        AuthCommand::Register {
            username,
            email,
            password,
        } => register(ctx, &username, &email, &password).await,
        AuthCommand::Logout => logout(ctx).await,
        AuthCommand::Whoami => whoami(ctx).await,
    }
}

async fn login(ctx: &mut Ctx, email: &str, password: &str) -> anyhow::Result<()> {
    let response = match ctx.client.login(email, password).await {
        Ok(response) => response,
        Err(ApiError::Unauthorized(_) | ApiError::BadRequest(_)) => {
            anyhow::bail!("invalid email or password")
        }
        Err(err) => return Err(err.into()),
    };

    ctx.client.set_token(Some(response.token.clone()));
    ctx.store.set(Session {
        token: response.token,
        player: response.player.clone(),
    })?;
    println!("Signed in as {}.", response.player.username);
    Ok(())
}

async fn register(
    ctx: &mut Ctx,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let response = match ctx.client.register(username, email, password).await {
        Ok(response) => response,
        Err(ApiError::BadRequest(msg)) => anyhow::bail!("registration rejected: {msg}"),
        Err(err) => return Err(err.into()),
    };

    ctx.client.set_token(Some(response.token.clone()));
    ctx.store.set(Session {
        token: response.token,
        player: response.player.clone(),
    })?;
    println!("Account created. Signed in as {}.", response.player.username);
    Ok(())
}

async fn logout(ctx: &mut Ctx) -> anyhow::Result<()> {
    if let Some(session) = ctx.store.load() {
        ctx.client.set_token(Some(session.token));
        ctx.client.logout().await;
    }
    ctx.client.set_token(None);
    ctx.store.clear();
    println!("Signed out.");
    Ok(())
}

async fn whoami(ctx: &mut Ctx) -> anyhow::Result<()> {
    let Ctx { client, store } = ctx;
    match store.restore(client).await {
        Some(session) => {
            println!(
                "{} <{}> (id {})",
                session.player.username, session.player.email, session.player.id
            );
            Ok(())
        }
        None => anyhow::bail!("you are not signed in"),
    }
}
