mod category;
mod company;
mod company_category;
mod document;
mod fixture;
mod image;
mod report;
mod table;

pub use category::CategoryRow;
pub use company::CompanyRow;
pub use company_category::CompanyCategoryRow;
pub use document::DocumentRow;
pub use fixture::FixtureSet;
pub use image::ImageRow;
pub use report::SyncReport;
pub use table::Table;
