pub mod constants;
pub mod metadata;

pub use metadata::{ProjectMetadata, ProjectType};
