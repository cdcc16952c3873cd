use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::error::ApiError,
    },
    model::progress::{RoadmapPhase, UpsertUserProgressDto, UserProgressDto},
};

impl ApiClient {
    pub async fn fetch_user_progress(&self, user_id: &str) -> Result<Vec<UserProgressDto>, ApiError> {
        let url = self.endpoint(&["api", "progress", user_id])?;
        let response = send_request(self.http.get(url)).await?;
        parse_response(response).await
    }

    /// Records progress for one phase. `None` fields are left unchanged on the server.
    pub async fn update_user_progress(
        &self,
        user_id: &str,
        phase: RoadmapPhase,
        progress: Option<i32>,
        completed_tasks: Option<Vec<String>>,
    ) -> Result<UserProgressDto, ApiError> {
        let url = self.endpoint(&["api", "progress"])?;
        let payload = UpsertUserProgressDto {
            user_id: user_id.to_string(),
            phase: phase.number(),
            progress,
            completed_tasks,
        };

        let response = send_request(self.http.post(url).json(&payload)).await?;
        parse_response(response).await
    }
}
