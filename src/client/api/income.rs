use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::error::ApiError,
    },
    model::income::{IncomeStreamDto, UpsertIncomeStreamDto},
};

impl ApiClient {
    pub async fn fetch_user_income_streams(
        &self,
        user_id: &str,
    ) -> Result<Vec<IncomeStreamDto>, ApiError> {
        let url = self.endpoint(&["api", "income", user_id])?;
        let response = send_request(self.http.get(url)).await?;
        parse_response(response).await
    }

    pub async fn update_income_stream(
        &self,
        user_id: &str,
        stream_type: &str,
        is_active: Option<bool>,
        monthly_revenue: Option<i32>,
    ) -> Result<IncomeStreamDto, ApiError> {
        let url = self.endpoint(&["api", "income"])?;
        let payload = UpsertIncomeStreamDto {
            user_id: user_id.to_string(),
            stream_type: stream_type.to_string(),
            is_active,
            monthly_revenue,
        };

        let response = send_request(self.http.post(url).json(&payload)).await?;
        parse_response(response).await
    }
}
