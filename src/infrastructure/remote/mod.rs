pub mod download;
pub mod http_client;
pub mod index;
pub mod platform;

pub use http_client::HttpClient;
pub use index::{CefIndex, DistributionFile, PlatformBuilds, VersionEntry};
pub use platform::{detect_platform, PlatformId};
