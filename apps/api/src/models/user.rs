use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserType {
    Student,
    Faculty,
    Visitor,
    Other,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Faculty => "Faculty",
            UserType::Visitor => "Visitor",
            UserType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub user_type: String,
    pub roll_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated user about to be looked up or inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub user_type: UserType,
    pub roll_number: Option<String>,
}
