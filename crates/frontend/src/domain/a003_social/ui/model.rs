use crate::shared::http;
use contracts::domain::a003_social::aggregate::SocialForm;
use contracts::domain::a006_submission::aggregate::EsgData;

pub async fn fetch() -> Result<Option<SocialForm>, String> {
    Ok(http::get_optional::<EsgData>("/esg/data")
        .await?
        .map(|data| data.social))
}
