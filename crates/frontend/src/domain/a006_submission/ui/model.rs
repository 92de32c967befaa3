use crate::shared::http;
use contracts::domain::a006_submission::aggregate::{
    ReviewRequest, SubmissionDetail, SubmissionSummary, UpdatePointsRequest,
};
use uuid::Uuid;

pub async fn fetch_all() -> Result<Vec<SubmissionSummary>, String> {
    http::get_json("/esg/all").await
}

pub async fn fetch_submission(id: Uuid) -> Result<SubmissionDetail, String> {
    http::get_json(&format!("/esg/supplier/{}", id)).await
}

pub async fn update_points(request: &UpdatePointsRequest) -> Result<(), String> {
    http::post_ack("/esg/update-points", request).await
}

pub async fn review(id: Uuid, request: &ReviewRequest) -> Result<(), String> {
    http::post_ack(&format!("/esg/review/{}", id), request).await
}
