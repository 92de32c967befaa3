use crate::shared::http;
use contracts::domain::a001_company_info::aggregate::CompanyForm;

pub async fn fetch() -> Result<Option<CompanyForm>, String> {
    http::get_optional::<CompanyForm>("/company-info").await
}
