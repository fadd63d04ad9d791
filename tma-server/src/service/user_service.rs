//! Get-or-create provisioning over verified Telegram identities.

use tma_auth::VerifiedIdentity;
use tma_core::{DEFAULT_LOCALE, NewUser, UserRecord};
use tma_db::{DbError, Result as DbErrorResult, UserRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

pub struct UserService {
    pool: SqlitePool,
    users: UserRepository,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Return the user for this identity, creating it on first login.
    ///
    /// Lookup path: no writes, no commit, and no refresh of mutable profile
    /// fields - repeat logins return exactly the stored values.
    ///
    /// Creation path: insert inside an explicit transaction, commit on
    /// success. When a concurrent first login wins the insert race the
    /// uniqueness constraint on telegram_id rejects ours; the transaction
    /// rolls back on drop and the lookup is retried once, returning the
    /// record the winner created.
    pub async fn get_or_create(&self, identity: &VerifiedIdentity) -> DbErrorResult<UserRecord> {
        if let Some(existing) = self.users.find_by_telegram_id(identity.telegram_id).await? {
            return Ok(existing);
        }

        self.create_or_recover(identity).await
    }

    /// Creation path of [`Self::get_or_create`]: insert, commit, and on a
    /// lost insert race recover the record the winner created.
    pub async fn create_or_recover(
        &self,
        identity: &VerifiedIdentity,
    ) -> DbErrorResult<UserRecord> {
        let mut tx = self.pool.begin().await?;

        match UserRepository::insert(&mut tx, &new_user_from_identity(identity)).await {
            Ok(created) => {
                tx.commit().await?;
                log::info!(
                    "Provisioned user {} for telegram id {}",
                    created.id,
                    created.telegram_id
                );
                Ok(created)
            }
            Err(DbError::UniqueViolation { .. }) => {
                drop(tx);
                log::debug!(
                    "Lost first-login insert race for telegram id {}, retrying as lookup",
                    identity.telegram_id
                );
                self.users
                    .find_by_telegram_id(identity.telegram_id)
                    .await?
                    .ok_or_else(|| DbError::Initialization {
                        message: format!(
                            "No user for telegram id {} after duplicate insert",
                            identity.telegram_id
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    })
            }
            Err(e) => Err(e),
        }
    }
}

fn new_user_from_identity(identity: &VerifiedIdentity) -> NewUser {
    NewUser {
        telegram_id: identity.telegram_id,
        username: identity.username.clone(),
        first_name: identity.first_name.clone(),
        last_name: identity.last_name.clone(),
        // An empty language_code counts as absent, same as a missing one
        locale: identity
            .language_code
            .clone()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        avatar_url: identity.photo_url.clone(),
    }
}
