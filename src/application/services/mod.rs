//! Business logic services for the application layer.

pub mod report_service;
pub mod slug_allocator;
pub mod url_service;

pub use report_service::ReportService;
pub use slug_allocator::SlugAllocator;
pub use url_service::UrlService;
