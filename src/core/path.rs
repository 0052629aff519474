//! Splits a file path into directory, file name and extension.
//!
//! Both `/` and `\` are separators so Windows paths split the same way on
//! every host, which `std::path` does not do.

use serde::{Deserialize, Serialize};

/// Components of a split path. Missing parts are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathParts {
    /// Everything before the last separator, without the separator.
    pub directory: String,
    /// The last component, extension included.
    pub file_name: String,
    /// Text after the file name's last `.`, without the dot.
    pub extension: String,
}

impl PathParts {
    /// The file name without its extension.
    pub fn stem(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(idx) if idx > 0 => &self.file_name[..idx],
            _ => &self.file_name,
        }
    }
}

/// Splits `path`. Never fails; unusual inputs produce empty parts.
///
/// # Examples
///
/// ```
/// use gallery::core::path::split_path;
///
/// let parts = split_path(r"C:\Users\me\Pictures\cat.jpeg");
/// assert_eq!(parts.directory, r"C:\Users\me\Pictures");
/// assert_eq!(parts.file_name, "cat.jpeg");
/// assert_eq!(parts.extension, "jpeg");
/// ```
pub fn split_path(path: &str) -> PathParts {
    let (directory, file_name) = match path.rfind(['/', '\\']) {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    };

    // A leading dot marks a hidden file, not an extension
    let extension = match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[idx + 1..],
        _ => "",
    };

    PathParts {
        directory: directory.to_string(),
        file_name: file_name.to_string(),
        extension: extension.to_string(),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_split_never_panics(path in "\\PC*") {
            let _ = split_path(&path);
        }

        #[test]
        fn test_parts_reassemble(
            dir in "[a-zA-Z0-9_/\\\\]{0,20}",
            name in "[a-zA-Z0-9_.]{0,12}",
        ) {
            let path = format!("{dir}/{name}");
            let parts = split_path(&path);
            prop_assert_eq!(format!("{}/{}", parts.directory, parts.file_name), path);
            prop_assert!(!parts.file_name.contains(['/', '\\']));
        }
    }
}
