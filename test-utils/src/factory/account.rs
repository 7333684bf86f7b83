//! Account factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts.
///
/// # Example
///
/// ```rust,ignore
/// let account = AccountFactory::new(db)
///     .nickname("Lin")
///     .google_login(true)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    nickname: String,
    is_google_login: bool,
}

impl<'a> AccountFactory<'a> {
    /// Defaults: email `player{n}@example.com`, nickname `Player {n}`, no Google login.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("player{}@example.com", id),
            nickname: format!("Player {}", id),
            is_google_login: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn google_login(mut self, is_google_login: bool) -> Self {
        self.is_google_login = is_google_login;
        self
    }

    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(self.nickname),
            is_google_login: ActiveValue::Set(self.is_google_login),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}
