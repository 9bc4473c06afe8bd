//! sysfs attribute access shared by the device adapters.
//!
//! Attributes hold a single ASCII integer followed by an optional newline.

use hybridctl_domain::FeatureError;
use std::io::ErrorKind;
use std::path::Path;

/// Read an integer attribute.
pub(crate) async fn read_attr(path: &Path) -> Result<u8, FeatureError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| map_io_error(path, e))?;
    raw.trim().parse::<u8>().map_err(|_| {
        FeatureError::InvalidValue(format!("{}: '{}'", path.display(), raw.trim()))
    })
}

/// Write an integer attribute.
pub(crate) async fn write_attr(path: &Path, value: u8) -> Result<(), FeatureError> {
    tokio::fs::write(path, value.to_string())
        .await
        .map_err(|e| map_io_error(path, e))
}

pub(crate) async fn attr_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

fn map_io_error(path: &Path, error: std::io::Error) -> FeatureError {
    match error.kind() {
        ErrorKind::PermissionDenied => FeatureError::PermissionDenied(path.display().to_string()),
        ErrorKind::NotFound => FeatureError::Unavailable(format!("{} does not exist", path.display())),
        _ => FeatureError::Io(format!("{}: {}", path.display(), error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_trims_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gsync");
        std::fs::write(&path, "1\n").unwrap();
        assert_eq!(read_attr(&path).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_read_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gsync");
        std::fs::write(&path, "on").unwrap();
        assert!(matches!(
            read_attr(&path).await,
            Err(FeatureError::InvalidValue(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_attribute_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");
        assert!(!attr_exists(&path).await);
        assert!(matches!(
            read_attr(&path).await,
            Err(FeatureError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("igpumode");
        std::fs::write(&path, "0").unwrap();
        write_attr(&path, 2).await.unwrap();
        assert_eq!(read_attr(&path).await.unwrap(), 2);
    }
}
