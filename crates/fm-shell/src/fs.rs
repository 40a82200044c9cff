//! Filesystem File Info
//!
//! Answers file-info queries for `file:` locations from the local
//! filesystem. Other schemes are refused; the resolver handles the special
//! ones before asking.

use std::io;
use std::path::Path;

use fm_resolver::{FileInfo, FileInfoError, FileInfoService};
use smol::future::{BoxedLocal, FutureExt};
use url::Url;

/// MIME type reported for directories
pub const DIRECTORY_TYPE: &str = "x-directory/normal";

/// MIME type of a regular file, guessed from its extension
pub fn mime_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// File-info service backed by `smol::fs`
#[derive(Debug, Default)]
pub struct FsFileInfo;

impl FsFileInfo {
    pub fn new() -> Self {
        Self
    }
}

impl FileInfoService for FsFileInfo {
    fn get_file_info(&self, uri: &str) -> BoxedLocal<Result<FileInfo, FileInfoError>> {
        let uri = uri.to_string();
        async move {
            let url = Url::parse(&uri).map_err(|_| FileInfoError::InvalidUri)?;
            if url.scheme() != "file" {
                return Err(FileInfoError::UnsupportedScheme(url.scheme().to_string()));
            }
            let path = url.to_file_path().map_err(|_| FileInfoError::InvalidUri)?;

            let metadata = smol::fs::metadata(&path).await.map_err(from_io)?;
            if metadata.is_dir() {
                Ok(FileInfo::new(DIRECTORY_TYPE))
            } else {
                Ok(FileInfo::new(&mime_type_for(&path)))
            }
        }
        .boxed_local()
    }
}

fn from_io(err: io::Error) -> FileInfoError {
    match err.kind() {
        io::ErrorKind::NotFound => FileInfoError::NotFound,
        _ => FileInfoError::Other {
            code: err.raw_os_error().unwrap_or(-1),
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_from_extension() {
        assert_eq!(mime_type_for(Path::new("/a/index.HTML")), "text/html");
        assert_eq!(mime_type_for(Path::new("/a/notes.txt")), "text/plain");
        assert_eq!(mime_type_for(Path::new("/a/photo.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("/a/Makefile")), "application/octet-stream");
        assert_eq!(mime_type_for(Path::new("/a/blob.bin")), "application/octet-stream");
    }

    #[test]
    fn test_non_file_schemes_refused() {
        let service = FsFileInfo::new();
        assert_eq!(
            smol::block_on(service.get_file_info("http://example.com/")),
            Err(FileInfoError::UnsupportedScheme("http".into()))
        );
        assert_eq!(
            smol::block_on(service.get_file_info("not a uri")),
            Err(FileInfoError::InvalidUri)
        );
    }
}
