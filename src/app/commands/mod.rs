pub mod doctor;
pub mod ide_build;
pub mod init;
pub mod plugin_version;
pub mod release_date;
pub mod resolve;
pub mod sandbox;

pub use doctor::{DoctorOptions, DoctorOutcome};
pub use ide_build::{BuildSource, IdeBuildResolution};
pub use release_date::ReleaseDateOutcome;
pub use resolve::ResolveOutcome;
pub use sandbox::ClearLogsOutcome;
