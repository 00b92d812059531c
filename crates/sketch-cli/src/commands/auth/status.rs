use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match sketch_auth::resolve_session() {
        Some(session) => AuthStatusResponse {
            authenticated: true,
            email: Some(session.email),
            token_source: sketch_auth::token_store::detect_token_source(),
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            email: None,
            token_source: None,
            note: Some("no stored session; run 'sketch auth login'".into()),
        },
    };

    output(&status, flags.format)
}
