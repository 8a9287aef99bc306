//! Account service: signup, login, and profile management.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use promovote_common::{AppError, AppResult, IdGenerator, TokenService};
use promovote_db::{entities::user, repositories::UserRepository};
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::origin::OriginService;

/// Signup request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupInput {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Email address, unique per account.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Profile update payload. All fields optional; absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileInput {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub batch_number: Option<String>,
    pub batch_type: Option<String>,
    pub contact: Option<String>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub social_links: Option<serde_json::Value>,
}

/// An authenticated session: the account plus its freshly issued token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: ProfileView,
    pub token: String,
}

/// Public projection of an account.
///
/// The contact number is masked down to its last four digits unless the
/// viewer owns the profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub batch_number: Option<String>,
    pub batch_type: Option<String>,
    pub contact: Option<String>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub social_links: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl ProfileView {
    /// Build a view of an account for a given viewer.
    #[must_use]
    pub fn from_model(model: user::Model, viewer_is_owner: bool) -> Self {
        let contact = model.contact.map(|c| {
            if viewer_is_owner {
                c
            } else {
                mask_contact(&c)
            }
        });

        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            avatar_url: model.avatar_url,
            batch_number: model.batch_number,
            batch_type: model.batch_type,
            contact,
            blood_group: model.blood_group,
            address: model.address,
            social_links: model.social_links,
            created_at: model.created_at,
        }
    }
}

/// Mask a contact number to its last four digits.
fn mask_contact(contact: &str) -> String {
    let chars: Vec<char> = contact.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

/// Account service.
#[derive(Clone)]
pub struct AccountService {
    user_repo: UserRepository,
    origin_service: OriginService,
    token_service: TokenService,
    id_gen: IdGenerator,
}

impl AccountService {
    /// Create a new account service.
    #[must_use]
    pub const fn new(
        user_repo: UserRepository,
        origin_service: OriginService,
        token_service: TokenService,
    ) -> Self {
        Self {
            user_repo,
            origin_service,
            token_service,
            id_gen: IdGenerator::new(),
        }
    }

    /// Register a new account.
    ///
    /// The origin throttle is checked before anything is written. The
    /// pre-insert email lookup gives a clean error message; the unique
    /// index on email is what actually closes the race.
    pub async fn signup(
        &self,
        input: SignupInput,
        origin_key: &str,
        user_agent: &str,
    ) -> AppResult<AuthSession> {
        input.validate()?;

        self.origin_service.ensure_within_limit(origin_key).await?;

        let email = input.email.trim().to_lowercase();
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&input.password)?;

        let model = user::ActiveModel {
            id: Set(self.id_gen.generate()),
            name: Set(input.name.trim().to_string()),
            email: Set(email),
            password_hash: Set(password_hash),
            is_blocked: Set(false),
            role: Set("user".to_string()),
            avatar_url: Set(None),
            batch_number: Set(None),
            batch_type: Set(None),
            contact: Set(None),
            blood_group: Set(None),
            address: Set(None),
            social_links: Set(serde_json::json!([])),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        };

        let created = self.user_repo.create(model).await?;

        // Best-effort: the account exists either way
        self.origin_service
            .record(&created.id, origin_key, user_agent)
            .await;

        tracing::info!(
            user_id = %created.id,
            origin_key = origin_key,
            "Account created"
        );

        self.issue_session(created)
    }

    /// Authenticate an account and issue a session token.
    ///
    /// The blocked check runs before password verification, so a blocked
    /// account gets `AccountBlocked` even on a wrong password. That tells
    /// a password-less caller the account exists and is blocked; changing
    /// the order would break the support flow that depends on the
    /// distinct message, so the behavior is kept.
    pub async fn login(
        &self,
        input: LoginInput,
        origin_key: &str,
        user_agent: &str,
    ) -> AppResult<AuthSession> {
        let email = input.email.trim().to_lowercase();

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if user.is_blocked {
            tracing::info!(user_id = %user.id, "Login rejected: account blocked");
            return Err(AppError::AccountBlocked);
        }

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        self.origin_service
            .record(&user.id, origin_key, user_agent)
            .await;

        self.issue_session(user)
    }

    /// Fetch a profile as seen by an optional viewer.
    pub async fn get_profile(&self, id: &str, viewer_id: Option<&str>) -> AppResult<ProfileView> {
        let user = self.user_repo.get_by_id(id).await?;
        let is_owner = viewer_id == Some(user.id.as_str());
        Ok(ProfileView::from_model(user, is_owner))
    }

    /// Update the caller's own profile.
    pub async fn update_profile(
        &self,
        user_id: &str,
        input: UpdateProfileInput,
    ) -> AppResult<ProfileView> {
        input.validate()?;

        let existing = self.user_repo.get_by_id(user_id).await?;

        let mut active: user::ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name.trim().to_string());
        }
        if let Some(v) = input.avatar_url {
            active.avatar_url = Set(Some(v));
        }
        if let Some(v) = input.batch_number {
            active.batch_number = Set(Some(v));
        }
        if let Some(v) = input.batch_type {
            active.batch_type = Set(Some(v));
        }
        if let Some(v) = input.contact {
            active.contact = Set(Some(v));
        }
        if let Some(v) = input.blood_group {
            active.blood_group = Set(Some(v));
        }
        if let Some(v) = input.address {
            active.address = Set(Some(v));
        }
        if let Some(v) = input.social_links {
            active.social_links = Set(v);
        }
        active.updated_at = Set(Some(Utc::now().into()));
        // Never writable through this path
        active.password_hash = ActiveValue::NotSet;
        active.role = ActiveValue::NotSet;
        active.is_blocked = ActiveValue::NotSet;

        let updated = self.user_repo.update(active).await?;
        Ok(ProfileView::from_model(updated, true))
    }

    fn issue_session(&self, user: user::Model) -> AppResult<AuthSession> {
        let token = self
            .token_service
            .issue(&user.id, &user.name, &user.email, &user.role)?;

        Ok(AuthSession {
            user: ProfileView::from_model(user, true),
            token,
        })
    }
}

/// Hash a password using Argon2.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
