pub mod cef_installer;
pub mod extract;
pub mod utils;

pub use cef_installer::{ArchiveStatus, CefInstaller, InstallOutcome, ResolvedDistribution};
pub use extract::{extract_archive, ArchiveKind};
