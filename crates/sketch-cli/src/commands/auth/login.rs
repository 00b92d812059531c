use anyhow::Context;
use serde::Serialize;
use sketch_config::SketchConfig;
use sketch_gateway::HttpGateway;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    token_source: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &SketchConfig,
) -> anyhow::Result<()> {
    let email = resolve_email(args.email.as_deref(), &config.auth.email)?;
    let password = match &args.password {
        Some(password) => password.clone(),
        None => match std::env::var("SKETCH_PASSWORD") {
            Ok(password) if !password.is_empty() => password,
            _ => prompt_password(&email).await?,
        },
    };

    let gateway = HttpGateway::new(&config.gateway)?;
    let session = with_spinner(
        "signing in",
        "signed in",
        sketch_auth::login::login(gateway.http(), gateway.base_url(), &email, &password),
    )
    .await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            email: session.email,
            token_source: sketch_auth::token_store::detect_token_source(),
        },
        flags.format,
    )
}

/// `--email` wins over `auth.email` from config.
fn resolve_email(flag: Option<&str>, configured: &str) -> anyhow::Result<String> {
    let email = flag.unwrap_or(configured).trim();
    if email.is_empty() {
        anyhow::bail!("auth login: pass --email or set SKETCH_AUTH__EMAIL");
    }
    Ok(email.to_string())
}

/// Input is echoed; set `SKETCH_PASSWORD` to avoid typing it.
async fn prompt_password(email: &str) -> anyhow::Result<String> {
    let mut stderr = tokio::io::stderr();
    stderr
        .write_all(format!("password for {email} (input is visible): ").as_bytes())
        .await?;
    stderr.flush().await?;
    read_password(BufReader::new(tokio::io::stdin())).await
}

async fn read_password<R: AsyncBufRead + Unpin>(reader: R) -> anyhow::Result<String> {
    let password = reader
        .lines()
        .next_line()
        .await
        .context("failed to read password from stdin")?
        .unwrap_or_default();
    if password.is_empty() {
        anyhow::bail!("auth login: no password given");
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::{read_password, resolve_email};

    #[test]
    fn flag_overrides_config() {
        let email = resolve_email(Some("cli@x.io"), "cfg@x.io").expect("should resolve");
        assert_eq!(email, "cli@x.io");
    }

    #[test]
    fn falls_back_to_config() {
        let email = resolve_email(None, " cfg@x.io ").expect("should resolve");
        assert_eq!(email, "cfg@x.io");
    }

    #[test]
    fn errors_without_any_email() {
        let err = resolve_email(None, "").expect_err("should fail");
        assert!(err.to_string().contains("--email"));
    }

    #[tokio::test]
    async fn password_is_first_line_without_terminator() {
        let password = read_password(&b"hunter2\r\nignored\n"[..])
            .await
            .expect("should read");
        assert_eq!(password, "hunter2");
    }

    #[tokio::test]
    async fn closed_stdin_is_an_error() {
        let err = read_password(&b""[..]).await.expect_err("no input");
        assert!(err.to_string().contains("no password"));
    }
}
