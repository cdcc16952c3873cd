use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::error::ApiError,
    },
    model::skill::{SkillProgressDto, UpsertSkillProgressDto},
};

impl ApiClient {
    pub async fn fetch_user_skills(&self, user_id: &str) -> Result<Vec<SkillProgressDto>, ApiError> {
        let url = self.endpoint(&["api", "skills", user_id])?;
        let response = send_request(self.http.get(url)).await?;
        parse_response(response).await
    }

    pub async fn update_skill_progress(
        &self,
        user_id: &str,
        skill_category: &str,
        skill_name: &str,
        level: Option<i32>,
    ) -> Result<SkillProgressDto, ApiError> {
        let url = self.endpoint(&["api", "skills"])?;
        let payload = UpsertSkillProgressDto {
            user_id: user_id.to_string(),
            skill_category: skill_category.to_string(),
            skill_name: skill_name.to_string(),
            level,
        };

        let response = send_request(self.http.post(url).json(&payload)).await?;
        parse_response(response).await
    }
}
