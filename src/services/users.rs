//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{
        ChangePassword, CreateUser, Role, UpdateUser, User, UserClaims, UserQuery,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by username/password and return a JWT token with the user
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users_get_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Invalid username or password".to_string())
            })?;

        if !self.verify_password(&user.password, password)? {
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    fn create_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.username.clone(),
            user_id: user.id,
            role: user.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn verify_password(&self, hash: &str, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Create the bootstrap administrator account when it does not exist yet
    pub async fn ensure_admin(&self) -> AppResult<()> {
        let username = self.config.admin_username.clone();
        if self.repository.users_get_by_username(&username).await?.is_some() {
            return Ok(());
        }

        let hash = self.hash_password(&self.config.admin_password)?;
        self.repository
            .users_create(&username, &hash, "Administrator", None, None, Role::Admin)
            .await?;
        tracing::warn!(
            "Created bootstrap admin account '{}'; change its password",
            username
        );
        Ok(())
    }

    /// Search users with pagination
    pub async fn search(&self, query: &UserQuery) -> AppResult<(Vec<User>, i64)> {
        self.repository.users_search(query).await
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users_get_by_id(id).await
    }

    /// Create a user account
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        data.validate()?;
        if self
            .repository
            .users_get_by_username(&data.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Username {} already exists",
                data.username
            )));
        }

        let hash = self.hash_password(&data.password)?;
        self.repository
            .users_create(
                &data.username,
                &hash,
                &data.full_name,
                data.email.as_deref(),
                data.phone.as_deref(),
                data.role.unwrap_or(Role::Staff),
            )
            .await
    }

    /// Update a user account
    pub async fn update(&self, id: i32, data: &UpdateUser) -> AppResult<User> {
        data.validate()?;
        if let Some(ref username) = data.username {
            let current = self.repository.users_get_by_id(id).await?;
            if current.username != *username
                && self.repository.users_get_by_username(username).await?.is_some()
            {
                return Err(AppError::Conflict(format!(
                    "Username {} already exists",
                    username
                )));
            }
        }
        self.repository.users_update(id, data).await
    }

    /// Delete a user account
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.users_delete(id).await
    }

    /// Change a user's password.
    ///
    /// Users change their own password by providing the current one; admins
    /// may reset any password without it.
    pub async fn change_password(
        &self,
        target_id: i32,
        data: &ChangePassword,
        actor: &UserClaims,
    ) -> AppResult<()> {
        data.validate()?;

        if actor.user_id != target_id && !actor.is_admin() {
            return Err(AppError::Authorization(
                "Cannot change another user's password".to_string(),
            ));
        }

        let user = self.repository.users_get_by_id(target_id).await?;
        if actor.user_id == target_id && !actor.is_admin() {
            let current = data.current_password.as_deref().ok_or_else(|| {
                AppError::Validation("current_password is required".to_string())
            })?;
            if !self.verify_password(&user.password, current)? {
                return Err(AppError::Authentication(
                    "Current password is incorrect".to_string(),
                ));
            }
        }

        let hash = self.hash_password(&data.new_password)?;
        self.repository.users_update_password(target_id, &hash).await
    }
}
