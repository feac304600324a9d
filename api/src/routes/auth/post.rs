use axum::{Json, extract::State, response::IntoResponse};
use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::error::{ApiError, TextError, TextJson};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,

    #[validate(
        required(message = "role is required"),
        length(min = 1, message = "role is required")
    )]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
}

impl From<UserModel> for LoginResponse {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            email: user.email,
        }
    }
}

/// POST /register
///
/// Creates an account. The password is stored as an argon2 digest.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "password": "hunter22",
///   "role": "student"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` (`text/plain`): `User registered successfully`
/// - `400 Bad Request` (`text/plain`): a field is missing, or `User already exists`
/// - `500 Internal Server Error` (`text/plain`)
pub async fn register(
    State(app_state): State<AppState>,
    TextJson(req): TextJson<RegisterRequest>,
) -> Result<impl IntoResponse, TextError> {
    req.validate()?;
    let db = app_state.db();

    let name = req.name.unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let role = req.role.unwrap_or_default();

    if UserModel::find_by_email(db, &email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".into()).into());
    }

    let user = UserModel::create(db, &name, &email, &password, &role).await?;
    tracing::info!(target: "api", user_id = %user.id, role = %user.role, "registered user");

    Ok("User registered successfully")
}

/// POST /login
///
/// Checks a password against the stored digest and returns the caller's identity.
/// No token is issued.
///
/// ### Request Body
/// ```json
/// { "email": "ada@example.com", "password": "hunter22" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "id": "65a1f0c2e4b0a1b2c3d4e5f6",
///   "name": "Ada Lovelace",
///   "role": "student",
///   "email": "ada@example.com"
/// }
/// ```
/// - `400 Bad Request` (`text/plain`): a field is missing
/// - `404 Not Found` (`text/plain`): `User not found`
/// - `401 Unauthorized` (`text/plain`): `Wrong password`
/// - `500 Internal Server Error` (`text/plain`)
pub async fn login(
    State(app_state): State<AppState>,
    TextJson(req): TextJson<LoginRequest>,
) -> Result<Json<LoginResponse>, TextError> {
    req.validate()?;

    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = UserModel::find_by_email(app_state.db(), &email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !user.verify_password(&password) {
        return Err(ApiError::Unauthorized("Wrong password".into()).into());
    }

    Ok(Json(user.into()))
}
