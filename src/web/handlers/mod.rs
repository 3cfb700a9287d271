//! Page handlers for the tenant-facing site.

pub mod page;
pub mod sitemap;

pub use page::page_handler;
pub use sitemap::sitemap_handler;
