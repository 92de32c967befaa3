use crate::shared::http;
use contracts::domain::a005_quality::aggregate::QualityForm;
use contracts::domain::a006_submission::aggregate::EsgData;

pub async fn fetch() -> Result<Option<QualityForm>, String> {
    Ok(http::get_optional::<EsgData>("/esg/data")
        .await?
        .map(|data| data.quality))
}
