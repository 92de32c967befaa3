pub mod a001_company_info;
pub mod a002_environment;
pub mod a003_social;
pub mod a004_governance;
pub mod a005_quality;
pub mod a006_submission;
