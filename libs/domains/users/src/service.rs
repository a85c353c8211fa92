use std::sync::Arc;
use tracing::instrument;

use crate::clock::{Clock, SystemClock};
use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;
use crate::validation::{normalize_email, normalize_name, validate_user_input};

/// Service layer for User business logic
///
/// Validates and normalizes input, then delegates to the repository. A
/// missing record is reported as `None`/`false`, never as an error.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
        }
    }

    /// List every user in insertion order
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.repository.get_all().await
    }

    /// Get a user by ID. Non-positive ids are answered without a lookup.
    #[instrument(skip(self), fields(user_id = id))]
    pub async fn get_user_by_id(&self, id: i64) -> UserResult<Option<User>> {
        if id <= 0 {
            return Ok(None);
        }

        self.repository.get_by_id(id).await
    }

    /// Create a new user with validation
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        validate_user_input(&input.name, &input.email)?;

        let user = User::new(
            normalize_name(&input.name),
            normalize_email(&input.email),
            self.clock.now(),
        );

        self.repository.create(user).await
    }

    /// Replace a user's name and email.
    ///
    /// Non-positive ids return `None` before any validation happens.
    ///
    /// The lookup and the store update take the lock separately. A delete
    /// landing between them makes the store answer [`UserError::NotFound`],
    /// which the HTTP layer reports as 500.
    ///
    /// [`UserError::NotFound`]: crate::error::UserError::NotFound
    #[instrument(skip(self, input), fields(user_id = id))]
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<Option<User>> {
        if id <= 0 {
            return Ok(None);
        }

        validate_user_input(&input.name, &input.email)?;

        let Some(mut user) = self.repository.get_by_id(id).await? else {
            return Ok(None);
        };

        user.apply_update(
            normalize_name(&input.name),
            normalize_email(&input.email),
            self.clock.now(),
        );

        self.repository.update(user).await.map(Some)
    }

    /// Delete a user, returning whether one was removed
    #[instrument(skip(self), fields(user_id = id))]
    pub async fn delete_user(&self, id: i64) -> UserResult<bool> {
        if id <= 0 {
            return Ok(false);
        }

        self.repository.delete(id).await
    }
}
