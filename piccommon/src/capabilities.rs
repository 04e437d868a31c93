use crate::directives::{MPASM_DIRECTIVES, MPASM_DIRECTIVES_WITH_LABELS};
use crate::DeviceFamily;
use getset::Getters;
use log::debug;
use std::collections::HashSet;
use tap::prelude::*;

/// An immutable set of lowercase keywords.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CapabilityTable(HashSet<String>);

impl CapabilityTable {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// Case-insensitive membership test. The empty token is never a member.
    pub fn contains(&self, token: &str) -> bool {
        !token.is_empty() && self.0.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CapabilityTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// The keyword tables a parser is bound to for its whole lifetime.
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct Capabilities {
    directives: CapabilityTable,
    instructions: CapabilityTable,
    /// Subset of `directives` that may share a line with a label.
    label_directives: CapabilityTable,
}

impl Capabilities {
    pub fn new(
        directives: CapabilityTable,
        instructions: CapabilityTable,
        label_directives: CapabilityTable,
    ) -> Self {
        Self {
            directives,
            instructions,
            label_directives,
        }
    }

    pub fn for_family(family: DeviceFamily) -> Self {
        Self::new(
            MPASM_DIRECTIVES.iter().collect(),
            family.instruction_set().iter().collect(),
            MPASM_DIRECTIVES_WITH_LABELS.iter().collect(),
        )
        .tap(|capabilities| {
            debug!(
                "Loaded {} directives and {} {} instructions",
                capabilities.directives.len(),
                capabilities.instructions.len(),
                family
            )
        })
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_family(DeviceFamily::default())
    }
}
