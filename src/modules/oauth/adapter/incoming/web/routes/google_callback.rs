use actix_web::{get, http::header::ContentType, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::oauth::application::domain::profile::UserProfile;
use crate::AppState;

const AUTH_FAILED: &str = "Authentication failed";

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
}

/// JSON safe to inline inside a `<script>` element.
fn script_json(profile: &UserProfile) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(profile)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

fn success_page(user_json: &str) -> String {
    format!(
        r#"<html>
  <body>
    <script>
      if (window.opener) {{
        window.opener.postMessage({{ type: 'OAUTH_AUTH_SUCCESS', user: {user_json} }}, '*');
        window.close();
      }} else {{
        window.location.href = '/';
      }}
    </script>
    <p>Authentication successful. This window should close automatically.</p>
  </body>
</html>"#
    )
}

fn failure() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body(AUTH_FAILED)
}

/// Google OAuth redirect target
///
/// Exchanges the code, stores the profile in a freshly issued visitor
/// session and hands it to the opener window.
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    tag = "oauth",
    params(("code" = Option<String>, Query, description = "Authorization code")),
    responses(
        (status = 200, description = "Popup page posting the profile to its opener", content_type = "text/html"),
        (status = 500, description = "Authentication failed", content_type = "text/plain"),
    )
)]
#[get("/auth/google/callback")]
pub async fn google_callback_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<CallbackQuery>,
) -> impl Responder {
    let code = query.code.as_deref().unwrap_or_default();

    let profile = match data.sign_in.complete(code).await {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "Google OAuth error");
            return failure();
        }
    };

    let user_json = match script_json(&profile) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "Failed to encode profile");
            return failure();
        }
    };

    let mut session = data.sessions.load(&req).await;
    session.data.user = Some(profile);

    match data.sessions.rotate(session).await {
        Ok(cookie) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .cookie(cookie)
            .body(success_page(&user_json)),
        Err(e) => {
            error!(error = %e, "Failed to store signed-in session");
            failure()
        }
    }
}
