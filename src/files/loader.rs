use std::path::Path;

use crate::error::ServeError;
use crate::files::PathClass;
use crate::site::Site;

const INDEX_FILE: &str = "index.html";

/// Reads the text behind a `File` or `Directory` path.
///
/// Every way of failing to read (missing, unreadable, a directory, not
/// UTF-8) comes back as `ResourceMissing`. Any other class is a caller bug
/// and comes back as `InternalInvariantViolation`.
pub async fn load(resolved: &str, class: PathClass, site: &Site) -> Result<String, ServeError> {
    let target = match class {
        PathClass::File => resolved.to_string(),
        PathClass::Directory => format!("{resolved}{INDEX_FILE}"),
        other => {
            return Err(ServeError::InternalInvariantViolation(format!(
                "load called with {other} for {resolved}"
            )));
        }
    };

    if site.strict_containment {
        ensure_contained(&target, site.root.as_str()).await?;
    }

    let read = tokio::fs::read_to_string(&target).await;
    read.map_err(|e| ServeError::missing_io(target, e))
}

/// Canonicalizes both paths and requires `target` to sit under `root`.
async fn ensure_contained(target: &str, root: &str) -> Result<(), ServeError> {
    let root_real = tokio::fs::canonicalize(root)
        .await
        .map_err(|e| ServeError::missing_io(root, e))?;
    let target_real = tokio::fs::canonicalize(target)
        .await
        .map_err(|e| ServeError::missing_io(target, e))?;

    if contained(&target_real, &root_real) {
        Ok(())
    } else {
        tracing::warn!(path = %target, "path resolves outside document root");
        Err(ServeError::missing(target))
    }
}

fn contained(target: &Path, root: &Path) -> bool {
    target.starts_with(root)
}
