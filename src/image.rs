use std::fs;
use std::path::Path;

use crate::constants::IMAGE_MIME_TYPE;
use crate::error::{Error, Result};

pub fn encode_image(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(base64::encode(bytes))
}

pub fn image_data_url(path: &Path) -> Result<String> {
    Ok(format!(
        "data:{};base64,{}",
        IMAGE_MIME_TYPE,
        encode_image(path)?
    ))
}
