use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use thiserror::Error;

use crate::document_id::DocumentId;

/// Fixed argon2id iteration count applied to every stored password.
pub const HASH_COST: u32 = 2;

/// Represents an account in the `users` collection.
///
/// Deliberately not `Serialize`: the digest must never reach a response.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Document id (24 hex chars).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// Business key. Uniqueness is enforced by `/register`, not the schema.
    pub email: String,
    /// Argon2 PHC string.
    pub password: String,
    /// `student` or `instructor`, stored as given.
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("invalid hasher parameters: {0}")]
    Params(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl From<PasswordError> for DbErr {
    fn from(err: PasswordError) -> Self {
        DbErr::Custom(err.to_string())
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(Params::DEFAULT_M_COST, HASH_COST, Params::DEFAULT_P_COST, None)
        .map_err(|e| PasswordError::Params(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

impl Model {
    /// Inserts a new user, replacing `password` with its digest.
    pub async fn create(
        db: &DbConn,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Set(DocumentId::new().to_string()),
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            password: Set(Self::hash_password(password)?),
            role: Set(role.to_owned()),
        };

        user.insert(db).await
    }

    /// User with exactly this email.
    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    pub async fn find_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    pub fn hash_password(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::Hash(e.to_string()))
    }

    /// Checks `password` against the stored digest. An unparseable digest never matches.
    pub fn verify_password(&self, password: &str) -> bool {
        let parsed = match PasswordHash::new(&self.password) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        // Parameters are read from the PHC string, so older costs still verify.
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
