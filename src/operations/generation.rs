use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{Result, ScriptError};
use crate::scene::{RawScene, Scene};

use super::{BuildSections, ResolveScene, SectionMesh, SectionParams};

/// Everything the renderer needs from one successful generation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The resolved scene.
    pub scene: Scene,
    /// Section meshes, one per qualifying (solid, plane) pair.
    pub sections: Vec<SectionMesh>,
}

/// One full rebuild: resolve, cut, triangulate.
pub struct Generation {
    params: SectionParams,
}

impl Generation {
    /// Creates a new `Generation` with the given section parameters.
    #[must_use]
    pub fn new(params: SectionParams) -> Self {
        Self { params }
    }

    /// Executes the pipeline on the interpreter's output.
    ///
    /// # Errors
    ///
    /// A script failure is relayed unchanged; otherwise any resolution or
    /// triangulation error aborts the whole generation.
    pub fn execute(&self, payload: std::result::Result<RawScene, ScriptError>) -> Result<Snapshot> {
        let raw = payload?;
        let scene = ResolveScene::new(&raw).execute()?;
        let sections = BuildSections::new(self.params).execute(&scene)?;
        Ok(Snapshot { scene, sections })
    }
}

/// Holds the most recently published snapshot.
///
/// A rebuild either replaces the snapshot as a whole or leaves the previous
/// one in place; readers never see a partially built scene.
#[derive(Debug, Default)]
pub struct ScenePublisher {
    params: SectionParams,
    current: Option<Arc<Snapshot>>,
    published: u64,
}

impl ScenePublisher {
    /// Creates a publisher with nothing published yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets custom section parameters for subsequent rebuilds.
    #[must_use]
    pub fn with_params(mut self, params: SectionParams) -> Self {
        self.params = params;
        self
    }

    /// The current snapshot, if any generation has succeeded.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current.clone()
    }

    /// Number of generations published so far.
    #[must_use]
    pub fn published(&self) -> u64 {
        self.published
    }

    /// Runs a generation and publishes it on success.
    ///
    /// # Errors
    ///
    /// Returns the generation's error; the previous snapshot stays current.
    pub fn rebuild(
        &mut self,
        payload: std::result::Result<RawScene, ScriptError>,
    ) -> Result<Arc<Snapshot>> {
        match Generation::new(self.params).execute(payload) {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.current = Some(Arc::clone(&snapshot));
                self.published += 1;
                info!(
                    generation = self.published,
                    sections = snapshot.sections.len(),
                    "published scene"
                );
                Ok(snapshot)
            }
            Err(err) => {
                warn!(error = %err, "rebuild discarded; keeping previous scene");
                Err(err)
            }
        }
    }

    /// Parses a JSON payload and rebuilds from it.
    ///
    /// # Errors
    ///
    /// Returns a payload error for malformed JSON, or the generation's error.
    pub fn rebuild_from_json(&mut self, json: &str) -> Result<Arc<Snapshot>> {
        match RawScene::from_json(json) {
            Ok(raw) => self.rebuild(Ok(raw)),
            Err(err) => {
                warn!(error = %err, "payload rejected; keeping previous scene");
                Err(err)
            }
        }
    }
}
