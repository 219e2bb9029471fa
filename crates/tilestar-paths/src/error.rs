use std::fmt;

/// Errors reported by [`Engine::find_path`](crate::Engine::find_path) when
/// the request violates a precondition.
///
/// Failing to find a route is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The source list was empty.
    EmptySources,
    /// The target list was empty.
    EmptyTargets,
    /// A strategy restricted to single endpoints was given several.
    Cardinality {
        strategy: &'static str,
        sources: usize,
        targets: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySources => write!(f, "path search needs at least one source"),
            Self::EmptyTargets => write!(f, "path search needs at least one target"),
            Self::Cardinality {
                strategy,
                sources,
                targets,
            } => write!(
                f,
                "{strategy} requires exactly one source and one target, \
                 got {sources} source(s) and {targets} target(s)"
            ),
        }
    }
}

impl std::error::Error for PathError {}
