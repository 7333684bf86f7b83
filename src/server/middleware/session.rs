//! Type-safe session management wrappers.
//!
//! The login service writes the authenticated account id into the shared
//! session store; this module is the only place that knows the key it uses.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_ACCOUNT_ID: &str = "auth:account";

/// Authentication session management.
///
/// Stores and retrieves the id of the logged-in account.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the account id in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Account id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_account_id(&self, account_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_ACCOUNT_ID, account_id)
            .await?;
        Ok(())
    }

    /// Retrieves the account id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(account_id))` - An account is logged in
    /// - `Ok(None)` - No account in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_account_id(&self) -> Result<Option<i32>, AppError> {
        let account_id = self.session.get::<i32>(SESSION_AUTH_ACCOUNT_ID).await?;
        Ok(account_id)
    }

    /// Clears all data from the session. Used by logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
