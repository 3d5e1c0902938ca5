use async_trait::async_trait;

use crate::domain::user::models::RegistrationCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for the credential lifecycle service.
///
/// Each call is independent; the service holds no state across requests
/// beyond its injected dependencies.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user: hash the plaintext password and persist.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - username is already taken
    /// * `DatabaseError` - persistence failed
    async fn register_user(&self, command: RegistrationCommand) -> Result<User, UserError>;

    /// Retrieve a live user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - no live user with this id
    /// * `DatabaseError` - lookup failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve a live user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - no live user with this username
    /// * `DatabaseError` - lookup failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Update profile or credential fields. A new password is hashed here,
    /// exactly once, before it reaches storage.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `UsernameAlreadyExists` - new username is already taken
    /// * `DatabaseError` - persistence failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Soft-delete a user by stamping its deletion timestamp.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist or is already deleted
    /// * `DatabaseError` - persistence failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
///
/// Reads exclude soft-deleted rows. Uniqueness is enforced by the store's
/// constraint system, not by application-level locking.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - unique constraint violated
    /// * `DatabaseError` - insert failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a live user by identifier, `None` if absent.
    ///
    /// # Errors
    /// * `DatabaseError` - query failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a live user by username, `None` if absent.
    ///
    /// # Errors
    /// * `DatabaseError` - query failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Update an existing live user, stamping its update timestamp.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist or is deleted
    /// * `UsernameAlreadyExists` - new username is already taken
    /// * `DatabaseError` - update failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Soft-delete: stamp `deleted_at`, keep the row.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist or is already deleted
    /// * `DatabaseError` - update failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
