use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::account::Account;

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn read(&self, account_id: i32) -> Result<Option<Account>, DbErr> {
        let account = entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?;

        Ok(account.map(Account::from_entity))
    }
}
