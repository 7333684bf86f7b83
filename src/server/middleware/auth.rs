use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::account::Account,
};

/// Resolves the caller of a request from its session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in account.
    ///
    /// # Returns
    /// - `Ok(Account)` - The account stored in the session
    /// - `Err(AuthError::AccountNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::AccountNotInDatabase)` - The session points at a missing account
    pub async fn require(&self) -> Result<Account, AppError> {
        let Some(account_id) = AuthSession::new(self.session).get_account_id().await? else {
            return Err(AuthError::AccountNotInSession.into());
        };

        let Some(account) = AccountRepository::new(self.db).read(account_id).await? else {
            return Err(AuthError::AccountNotInDatabase(account_id).into());
        };

        Ok(account)
    }
}
