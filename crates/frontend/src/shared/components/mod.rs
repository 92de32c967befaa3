pub mod certificate_upload;
pub mod rating_bar;

pub use certificate_upload::CertificateUpload;
pub use rating_bar::RatingBar;
