//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilemap_editor::EditorError;
    use tilemap_editor::io::error::{WithPath, invalid_parameter};

    // Tests display messages carry the relevant values
    #[test]
    fn test_display_messages() {
        let size = EditorError::InvalidSize {
            width: 0,
            height: -2,
            reason: "dimensions must be positive",
        };
        assert_eq!(
            size.to_string(),
            "Invalid grid size 0x-2: dimensions must be positive"
        );

        let bounds = EditorError::OutOfBounds {
            x: 7,
            y: -1,
            dimensions: (5, 4),
        };
        assert_eq!(bounds.to_string(), "Cell (7, -1) is outside the 5x4 grid");

        let param = invalid_parameter("size", &"abc", &"not a whole number");
        assert_eq!(
            param.to_string(),
            "Invalid parameter 'size' = 'abc': not a whole number"
        );
    }

    // Tests file system errors expose their I/O source
    // Verified by returning None from source for FileSystem
    #[test]
    fn test_file_system_source() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_path(Path::new("map.h"), "create").unwrap_err();

        assert!(err.source().is_some());
        assert!(err.to_string().contains("during create on 'map.h'"));
    }

    // Tests raw I/O errors convert with placeholder context
    #[test]
    fn test_from_io_error() {
        let err = EditorError::from(std::io::Error::other("boom"));
        match err {
            EditorError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, PathBuf::from("<unknown>"));
                assert_eq!(operation, "unknown");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }

    // Tests errors without an underlying cause
    #[test]
    fn test_no_source() {
        let err = invalid_parameter("command", &"jump", &"unknown command");
        assert!(err.source().is_none());
    }
}
