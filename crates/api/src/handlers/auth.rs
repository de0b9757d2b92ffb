//! Handlers for account registration, login and session checks.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use skillconnect_core::error::CoreError;
use skillconnect_core::fields::require_non_blank;
use skillconnect_core::types::DbId;
use skillconnect_db::models::usuario::Usuario;
use skillconnect_db::repositories::UsuarioRepo;

use crate::auth::jwt::generate_session_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::SessionUser;
use crate::response::ApiResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for registration and both login flavours.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email(message = "correo must be a valid email address"))]
    pub correo: Option<String>,
    pub contrasena: Option<String>,
}

impl CredentialsRequest {
    /// Both fields present and non-blank. The email is trimmed; the password
    /// is used as sent.
    fn required(&self) -> Result<(&str, &str), CoreError> {
        let correo = require_non_blank("correo", self.correo.as_deref())?;
        require_non_blank("contrasena", self.contrasena.as_deref())?;
        Ok((correo, self.contrasena.as_deref().unwrap_or_default()))
    }
}

/// Identity of a logged-in account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub usuario_id: DbId,
    pub perfil_id: DbId,
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up the account and check the password, then the active flag.
async fn authenticate(state: &AppState, input: &CredentialsRequest) -> AppResult<Usuario> {
    let (correo, contrasena) = input.required()?;

    let usuario = UsuarioRepo::find_by_correo(&state.pool, correo)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let valid = verify_password(usuario.id_usuario, contrasena, &usuario.contrasena_hash)?;
    if !valid {
        tracing::info!(usuario_id = usuario.id_usuario, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    if !usuario.activo {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is inactive. Contact an administrator.".into(),
        )));
    }

    Ok(usuario)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/registro
///
/// Creates the account and its empty persona in one transaction.
pub async fn registro(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let (correo, contrasena) = input.required()?;
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let hash = hash_password(contrasena)?;
    let registered = UsuarioRepo::register(&state.pool, correo, &hash).await?;

    tracing::info!(
        usuario_id = registered.id_usuario,
        perfil_id = registered.id_perfil,
        "Account registered"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(registered).with_message("Usuario registrado exitosamente")),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let usuario = authenticate(&state, &input).await?;
    tracing::info!(usuario_id = usuario.id_usuario, "Login succeeded");

    let info = SessionInfo {
        usuario_id: usuario.id_usuario,
        perfil_id: usuario.id_perfil,
        correo: usuario.correo,
        token: None,
    };
    Ok(Json(ApiResponse::ok(info).with_message("Inicio de sesión exitoso")))
}

/// POST /api/login-jwt
///
/// Same checks as [`login`]; the response also carries a session token.
pub async fn login_jwt(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let usuario = authenticate(&state, &input).await?;

    let token = generate_session_token(
        usuario.id_usuario,
        usuario.id_perfil,
        &usuario.correo,
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    tracing::info!(usuario_id = usuario.id_usuario, "Session token issued");

    let info = SessionInfo {
        usuario_id: usuario.id_usuario,
        perfil_id: usuario.id_perfil,
        correo: usuario.correo,
        token: Some(token),
    };
    Ok(Json(ApiResponse::ok(info).with_message("Inicio de sesión exitoso")))
}

/// GET /api/verificar-sesion
pub async fn verificar_sesion(SessionUser(claims): SessionUser) -> AppResult<impl IntoResponse> {
    let info = SessionInfo {
        usuario_id: claims.usuario_id,
        perfil_id: claims.perfil_id,
        correo: claims.correo,
        token: None,
    };
    Ok(Json(ApiResponse::ok(info).with_message("Sesión válida")))
}
