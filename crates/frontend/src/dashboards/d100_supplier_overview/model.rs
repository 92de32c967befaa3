use crate::shared::http;
use contracts::dashboards::d100_supplier_overview::DashboardData;

pub async fn fetch() -> Result<Option<DashboardData>, String> {
    http::get_optional::<DashboardData>("/dashboard").await
}
