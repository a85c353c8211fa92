use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// The store owns identity assignment and timestamps; it performs no
/// business validation and trusts its caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of every user, in insertion order
    async fn get_all(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Insert a user. Any id on the candidate is ignored; the next id and
    /// `created_at` are assigned here.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Overwrite name and email of an existing user and stamp `updated_at`.
    /// Fails with [`UserError::NotFound`] if the id is unknown.
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID, returning whether anything was removed
    async fn delete(&self, id: i64) -> UserResult<bool>;

    /// Check whether a user with this ID is present
    async fn exists(&self, id: i64) -> UserResult<bool>;

    /// Number of stored users
    async fn count(&self) -> UserResult<usize>;
}

#[derive(Debug, Default)]
struct UserStore {
    users: Vec<User>,
    /// Highest id ever handed out; ids are never reused
    last_id: i64,
}

impl UserStore {
    fn insert(&mut self, mut user: User, now: DateTime<Utc>) -> User {
        self.last_id += 1;
        user.id = self.last_id;
        user.created_at = now;
        user.updated_at = None;
        self.users.push(user.clone());
        user
    }
}

/// Demo fixture: three users created 30, 15 and 7 days before `now`.
fn seed_demo_users(store: &mut UserStore, now: DateTime<Utc>) {
    let fixtures = [
        ("John Doe", "john.doe@example.com", 30),
        ("Jane Smith", "jane.smith@example.com", 15),
        ("Bob Johnson", "bob.johnson@example.com", 7),
    ];

    for (name, email, days_ago) in fixtures {
        let created_at = now - Duration::days(days_ago);
        store.insert(
            User::new(name.to_string(), email.to_string(), created_at),
            created_at,
        );
    }
}

/// Number of users [`InMemoryUserRepository::new`] starts with.
pub const SEEDED_USER_COUNT: usize = 3;

/// In-memory implementation of UserRepository
///
/// All state sits behind one `RwLock`; each call takes it exactly once for
/// its whole critical section, so id allocation and insertion are atomic
/// and a read never sees a half-applied write.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Seeded store using wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Seeded store using the given clock, for reproducible fixtures.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let mut store = UserStore::default();
        seed_demo_users(&mut store, clock.now());
        tracing::debug!(seeded = store.users.len(), "Seeded demo users");
        Self::from_store(store, clock)
    }

    /// Store with no records; the first id handed out is 1.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self::from_store(UserStore::default(), clock)
    }

    fn from_store(store: UserStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            clock,
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.clone())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let mut store = self.store.write().await;
        let created = store.insert(user, self.clock.now());

        tracing::info!(user_id = created.id, email = %created.email, "Created user");
        Ok(created)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut store = self.store.write().await;
        let now = self.clock.now();

        let existing = store
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UserError::NotFound(user.id))?;

        existing.name = user.name;
        existing.email = user.email;
        // updated_at never precedes created_at, even with a clock set backwards
        existing.updated_at = Some(now.max(existing.created_at));

        tracing::info!(user_id = existing.id, "Updated user");
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut store = self.store.write().await;

        match store.users.iter().position(|u| u.id == id) {
            Some(index) => {
                store.users.remove(index);
                tracing::info!(user_id = id, "Deleted user");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists(&self, id: i64) -> UserResult<bool> {
        let store = self.store.read().await;
        Ok(store.users.iter().any(|u| u.id == id))
    }

    async fn count(&self) -> UserResult<usize> {
        let store = self.store.read().await;
        Ok(store.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        ))
    }

    fn candidate(name: &str, email: &str) -> User {
        User::new(name.to_string(), email.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_seed_is_reproducible() {
        let clock = fixed_clock();
        let repo = InMemoryUserRepository::with_clock(clock.clone());

        let users = repo.get_all().await.unwrap();
        assert_eq!(users.len(), SEEDED_USER_COUNT);
        assert_eq!(
            users.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[0].email, "john.doe@example.com");
        assert_eq!(users[0].created_at, clock.now() - Duration::days(30));
        assert_eq!(users[2].created_at, clock.now() - Duration::days(7));
        assert!(users.iter().all(|u| u.updated_at.is_none()));
    }

    #[tokio::test]
    async fn test_create_assigns_ids_from_one_and_ignores_candidate_id() {
        let clock = fixed_clock();
        let repo = InMemoryUserRepository::empty(clock.clone());

        let mut first = candidate("A", "a@example.com");
        first.id = 999;
        let first = repo.create(first).await.unwrap();
        let second = repo.create(candidate("B", "b@example.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, clock.now());
        assert_eq!(repo.get_by_id(1).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_create_continues_after_seed() {
        let repo = InMemoryUserRepository::with_clock(fixed_clock());
        let created = repo.create(candidate("D", "d@example.com")).await.unwrap();
        assert_eq!(created.id, 4);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = InMemoryUserRepository::empty(fixed_clock());
        repo.create(candidate("A", "a@example.com")).await.unwrap();
        let b = repo.create(candidate("B", "b@example.com")).await.unwrap();

        assert!(repo.delete(b.id).await.unwrap());
        assert_eq!(repo.get_by_id(b.id).await.unwrap(), None);
        assert!(!repo.exists(b.id).await.unwrap());

        let c = repo.create(candidate("C", "c@example.com")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = InMemoryUserRepository::with_clock(fixed_clock());
        assert!(!repo.delete(42).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), SEEDED_USER_COUNT);
    }

    #[tokio::test]
    async fn test_get_all_preserves_insertion_order_after_delete() {
        let repo = InMemoryUserRepository::with_clock(fixed_clock());
        repo.create(candidate("D", "d@example.com")).await.unwrap();
        repo.delete(2).await.unwrap();

        let ids: Vec<i64> = repo.get_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_only() {
        let clock = fixed_clock();
        let repo = InMemoryUserRepository::with_clock(clock.clone());
        let original = repo.get_by_id(1).await.unwrap().unwrap();

        clock.advance(Duration::minutes(10));
        let mut changed = original.clone();
        changed.name = "Johnny".to_string();
        changed.email = "johnny@example.com".to_string();
        changed.created_at = clock.now();

        let updated = repo.update(changed).await.unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Johnny");
        assert_eq!(updated.email, "johnny@example.com");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.updated_at, Some(clock.now()));
        assert_eq!(repo.get_by_id(1).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_never_stamps_before_creation() {
        let clock = fixed_clock();
        let repo = InMemoryUserRepository::empty(clock.clone());
        let user = repo.create(candidate("A", "a@example.com")).await.unwrap();

        clock.advance(Duration::days(-1));
        let updated = repo.update(user.clone()).await.unwrap();
        assert_eq!(updated.updated_at, Some(user.created_at));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = InMemoryUserRepository::with_clock(fixed_clock());
        let mut ghost = candidate("Ghost", "ghost@example.com");
        ghost.id = 77;

        let result = repo.update(ghost).await;
        assert!(matches!(result, Err(UserError::NotFound(77))));
        assert_eq!(repo.count().await.unwrap(), SEEDED_USER_COUNT);
    }
}
