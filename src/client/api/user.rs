use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::error::ApiError,
    },
    model::user::{CreateUserDto, UserDto},
};

impl ApiClient {
    /// Registers a user, or confirms the one registered under `user_id`.
    pub async fn create_user(&self, user_id: Option<&str>) -> Result<UserDto, ApiError> {
        let url = self.endpoint(&["api", "users"])?;
        let payload = CreateUserDto {
            user_id: user_id.map(str::to_string),
        };

        let request = self.http.post(url).json(&payload);
        let response = send_request(request).await?;
        parse_response(response).await
    }
}
