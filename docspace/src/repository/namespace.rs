use crate::errors::{DocspaceError, DocspaceResult, ErrorKind};
use once_cell::sync::Lazy;
use regex::Regex;

// one or more ASCII letters or digits, nothing else
static NAMESPACE_PATTERN: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$"));

/// Checks whether `name` can be used as a namespace.
pub fn is_valid_namespace(name: &str) -> bool {
    match &*NAMESPACE_PATTERN {
        Ok(pattern) => pattern.is_match(name),
        Err(e) => {
            log::error!("Namespace pattern failed to compile: {}", e);
            false
        }
    }
}

pub(crate) fn validate_namespace(name: &str) -> DocspaceResult<()> {
    if is_valid_namespace(name) {
        Ok(())
    } else {
        log::error!("Namespace {:?} is not alphanumeric", name);
        Err(DocspaceError::new(
            "The given database name is invalid",
            ErrorKind::InvalidNamespace,
        ))
    }
}
