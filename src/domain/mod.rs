pub mod contact;
pub mod project;
pub mod status;
pub mod view;

pub use contact::{ContactError, ContactMessage};
pub use project::{normalize, NormalizedItem};
pub use status::{ProjectsCoordinator, ProjectsState};
pub use view::{project, project_all, ViewItem};
