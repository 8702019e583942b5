use fraction_resolver::fraction_resolution::domain::ResolvedArtifact;
use fraction_resolver::ports::outbound::{ResolutionRequest, ResolvedArtifactRecord};
use fraction_resolver::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ArtifactResolver that resolves each request to a jar under
/// `/resolved` and records every batch it receives
#[derive(Default, Clone)]
pub struct MockArtifactResolver {
    pub batches: Arc<Mutex<Vec<Vec<ResolutionRequest>>>>,
    pub transitive_flags: Arc<Mutex<Vec<bool>>>,
}

impl MockArtifactResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ResolutionRequest> {
        self.batches.lock().unwrap().concat()
    }
}

impl ArtifactResolver for MockArtifactResolver {
    fn resolve_batch(
        &self,
        requests: &[ResolutionRequest],
        transitive: bool,
    ) -> Result<Vec<ResolvedArtifactRecord>> {
        self.batches.lock().unwrap().push(requests.to_vec());
        self.transitive_flags.lock().unwrap().push(transitive);
        Ok(requests
            .iter()
            .map(|request| {
                let coordinates = request.coordinates();
                let file = format!("/resolved/{}-{}.jar", coordinates.name(), coordinates.version());
                ResolvedArtifactRecord::new(coordinates, ResolvedArtifact::jar(file))
            })
            .collect())
    }
}
