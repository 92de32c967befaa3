use crate::shared::http;
use contracts::domain::a004_governance::aggregate::GovernanceForm;
use contracts::domain::a006_submission::aggregate::EsgData;

pub async fn fetch() -> Result<Option<GovernanceForm>, String> {
    Ok(http::get_optional::<EsgData>("/esg/data")
        .await?
        .map(|data| data.governance))
}
