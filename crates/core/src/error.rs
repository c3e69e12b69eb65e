use std::path::PathBuf;

use thiserror::Error;

use crate::region::Region;

#[derive(Error, Debug)]
pub enum BlurError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid region {region:?} for {width}x{height} image: {reason}")]
    InvalidRegion {
        region: Region,
        width: u32,
        height: u32,
        reason: &'static str,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
