mod build_sections;
mod cross_section;
mod generation;
mod resolve;

pub use build_sections::{BuildSections, SectionMesh};
pub use cross_section::{CrossSection, SectionParams};
pub use generation::{Generation, ScenePublisher, Snapshot};
pub use resolve::ResolveScene;
