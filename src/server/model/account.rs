use crate::model::account::AccountDto;

/// An account as known to the reservation system.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    /// Whether the account logs in through Google and has a linked calendar.
    pub is_google_login: bool,
}

impl Account {
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            nickname: entity.nickname,
            is_google_login: entity.is_google_login,
        }
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            email: self.email,
            nickname: self.nickname,
            is_google_login: self.is_google_login,
        }
    }
}
