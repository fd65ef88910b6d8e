// User administration endpoints

use crate::Error;
use crate::client::ApiClient;
use crate::types::{UserCreateUpdate, UserResponse};

#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub search: String,
    pub role: String,
    pub status: String,
}

impl ApiClient {
    /// `GET /api/users`
    pub async fn list_users(&self, filters: &UserFilters) -> Result<Vec<UserResponse>, Error> {
        self.get_with_query(
            "api/users",
            &[],
            &[
                ("search", filters.search.as_str()),
                ("role", filters.role.as_str()),
                ("status", filters.status.as_str()),
            ],
        )
        .await
    }

    /// `GET /api/users/:id`
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, Error> {
        self.get("api/users/:id", &[("id", id)]).await
    }

    /// `POST /api/users`
    pub async fn create_user(&self, body: &UserCreateUpdate) -> Result<UserResponse, Error> {
        self.post("api/users", &[], body).await
    }

    /// `PUT /api/users/:id`
    pub async fn update_user(
        &self,
        id: &str,
        body: &UserCreateUpdate,
    ) -> Result<UserResponse, Error> {
        self.put("api/users/:id", &[("id", id)], body).await
    }

    /// `DELETE /api/users/:id`
    pub async fn delete_user(&self, id: &str) -> Result<(), Error> {
        self.delete("api/users/:id", &[("id", id)]).await
    }
}
