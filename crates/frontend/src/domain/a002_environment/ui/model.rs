use crate::shared::http;
use contracts::domain::a002_environment::aggregate::EnvironmentForm;
use contracts::domain::a006_submission::aggregate::EsgData;

/// The backend returns the whole ESG record; this wizard edits its
/// environment slice.
pub async fn fetch() -> Result<Option<EnvironmentForm>, String> {
    Ok(http::get_optional::<EsgData>("/esg/data")
        .await?
        .map(|data| data.environment))
}
