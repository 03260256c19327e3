use std::collections::HashMap;

use smol_str::SmolStr;
use snafu::{ResultExt, ensure};

use crate::{
    id::Id,
    structures::{Resource, Result, error},
    types::{Indirect, IndirectReference},
};

/// State threaded through one serialization pass.
///
/// Holds the object number allocator and the resources numbered so far,
/// keyed by category and label, so a resource used on several pages is written once.
#[derive(Debug, Default)]
pub struct Context {
    id: Id,
    registry: HashMap<(&'static str, SmolStr), (Resource, IndirectReference)>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next object number.
    pub fn next_number(&mut self) -> u32 {
        self.id.increment()
    }

    /// The number the next object would get; the trailer's `/Size`.
    pub fn value(&self) -> u32 {
        self.id.value()
    }

    /// Numbers `resource` on first use and refers back to it afterwards.
    ///
    /// Fails when the label was already taken by a different resource of
    /// the same category.
    pub fn register(&mut self, resource: &Resource) -> Result<Indirect> {
        let key = (resource.category(), SmolStr::new(resource.label()));
        if let Some((known, reference)) = self.registry.get(&key) {
            ensure!(
                known == resource,
                error::LabelConflictSnafu {
                    label: resource.label()
                }
            );
            tracing::trace!(label = resource.label(), %reference, "resource reused");
            return Ok(Indirect::Reference(*reference));
        }

        let node = resource.indirect(self)?;
        let reference = node.reference().context(error::ShapeSnafu)?;
        self.registry.insert(key, (resource.clone(), reference));

        Ok(node)
    }
}
