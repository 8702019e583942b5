use fraction_resolver::ports::outbound::FractionDescriptor;
use fraction_resolver::prelude::*;

/// Mock FractionCatalog serving a fixed list, or failing on demand
#[derive(Default)]
pub struct MockFractionCatalog {
    fractions: Vec<FractionDescriptor>,
    fail: bool,
}

impl MockFractionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fraction(mut self, group: &str, artifact: &str) -> Self {
        self.fractions.push(FractionDescriptor::new(group, artifact));
        self
    }

    pub fn failing() -> Self {
        Self {
            fractions: Vec::new(),
            fail: true,
        }
    }
}

impl FractionCatalog for MockFractionCatalog {
    fn fraction_descriptors(&self) -> Result<Vec<FractionDescriptor>> {
        if self.fail {
            anyhow::bail!("fraction catalog unavailable");
        }
        Ok(self.fractions.clone())
    }
}
