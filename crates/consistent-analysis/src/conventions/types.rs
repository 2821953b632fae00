//! Core types for the convention engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parsers::{NodeRef, Position};

/// Traversal bound for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The whole file, from the root.
    Any,
    /// Bodies of top-level functions and methods only.
    Local,
    /// Whole-package traversal. Reserved; selecting it is a fatal error.
    Package,
}

impl Scope {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Local => "local",
            Self::Package => "package",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recognizes occurrences of one idiom.
///
/// `skip` is evaluated first; when it returns true, `matches` is not called
/// and the node neither counts nor warns, but its children are still visited.
/// Implementations must be pure and must not keep the node.
pub trait Matcher: Send + Sync {
    fn skip(&self, node: NodeRef<'_>) -> bool;
    fn matches(&self, node: NodeRef<'_>) -> bool;
}

/// One concrete idiom realizing an operation.
pub struct Variant {
    name: String,
    matcher: Box<dyn Matcher>,
    count: u64,
}

impl Variant {
    pub fn new(name: impl Into<String>, matcher: impl Matcher + 'static) -> Self {
        Self {
            name: name.into(),
            matcher: Box::new(matcher),
            count: 0,
        }
    }

    /// Start from a synthetic count instead of zero.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    /// Counts only grow.
    pub fn add_occurrences(&mut self, n: u64) {
        self.count += n;
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("name", &self.name)
            .field("count", &self.count)
            .finish()
    }
}

/// A semantic purpose with several equivalent idioms.
///
/// Variant order matters: it is the only tie-break source during election.
#[derive(Debug)]
pub struct Operation {
    name: String,
    scope: Scope,
    variants: Vec<Variant>,
    convention: Option<usize>,
}

impl Operation {
    pub fn new(name: impl Into<String>, scope: Scope, variants: Vec<Variant>) -> Self {
        Self {
            name: name.into(),
            scope,
            variants,
            convention: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn variants_mut(&mut self) -> &mut [Variant] {
        &mut self.variants
    }

    /// Index of the elected variant, once election ran.
    pub fn convention_index(&self) -> Option<usize> {
        self.convention
    }

    /// The elected variant, once election ran.
    pub fn convention(&self) -> Option<&Variant> {
        self.convention.and_then(|i| self.variants.get(i))
    }

    pub(crate) fn set_convention(&mut self, index: usize) {
        debug_assert!(index < self.variants.len());
        self.convention = Some(index);
    }
}

/// Address of one variant inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantId {
    pub operation: usize,
    pub variant: usize,
}

/// A detected deviation from an operation's convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub position: Position,
    pub text: String,
    pub operation: String,
    pub convention: String,
    pub variant: String,
}

impl Warning {
    pub fn new(position: Position, operation: &Operation, convention: &Variant, found: &Variant) -> Self {
        Self {
            text: format!(
                "{}: use {} instead of {}",
                operation.name(),
                convention.name(),
                found.name()
            ),
            position,
            operation: operation.name().to_string(),
            convention: convention.name().to_string(),
            variant: found.name().to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.text)
    }
}

/// Advisory note that an election was decided by declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ambiguity {
    pub operation: String,
    pub candidate: String,
    pub elected: String,
    pub count: u64,
}

impl fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: can't decide between {} and {}",
            self.operation, self.candidate, self.elected
        )
    }
}
