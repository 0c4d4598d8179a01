//! Gallery image fetching and downloads.
//!
//! Bytes come from the same content root as the manifests. An image only
//! counts as loaded once its header decodes, so a 404 page or a truncated
//! file ends up as a placeholder instead of a blank tile.

use crate::manifest::{Location, fetch_bytes};
use anyhow::{Context, Result, anyhow};
use image::ImageReader;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Fetch an image and confirm it is something we can draw.
pub async fn load_image(location: Location) -> Result<Vec<u8>> {
    let bytes = fetch_bytes(&location).await?;
    let (width, height) = probe_dimensions(&bytes)
        .with_context(|| format!("{location} is not a readable image"))?;
    debug!(%location, width, height, "Loaded gallery image");
    Ok(bytes)
}

pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    if reader.format().is_none() {
        return Err(anyhow!("unrecognized image format"));
    }
    Ok(reader.into_dimensions()?)
}

/// Copy the image behind `location` into `dir/file_name`.
pub async fn save_download(location: Location, dir: PathBuf, file_name: String) -> Result<PathBuf> {
    let bytes = fetch_bytes(&location).await?;
    let target = write_download(&dir, &file_name, &bytes)?;
    info!(source = %location, target = %target.display(), "Saved image download");
    Ok(target)
}

fn write_download(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    if file_name.is_empty() || file_name == "." || file_name == ".." {
        return Err(anyhow!("image path has no file name"));
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let target = dir.join(file_name);
    fs::write(&target, bytes).with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png_bytes() -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbImage::new(3, 2)
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("study-deck-images-{}-{tag}", std::process::id()))
    }

    #[test]
    fn probes_real_images() {
        assert_eq!(probe_dimensions(&png_bytes()).expect("png"), (3, 2));
    }

    #[test]
    fn html_error_pages_are_not_images() {
        assert!(probe_dimensions(b"<html><body>404 Not Found</body></html>").is_err());
    }

    #[test]
    fn missing_file_fails_to_load() {
        let location = Location::File(scratch_dir("missing").join("nope.png"));
        assert!(iced::futures::executor::block_on(load_image(location)).is_err());
    }

    #[test]
    fn download_lands_under_its_file_name() {
        let dir = scratch_dir("download");
        let source = dir.join("source");
        fs::create_dir_all(&source).expect("dir");
        let original = source.join("d.png");
        fs::write(&original, png_bytes()).expect("fixture");

        let saved = iced::futures::executor::block_on(save_download(
            Location::File(original),
            dir.join("out"),
            "d.png".to_string(),
        ))
        .expect("saved");
        assert_eq!(saved, dir.join("out").join("d.png"));
        assert_eq!(fs::read(saved).expect("read back"), png_bytes());
    }

    #[test]
    fn rejects_empty_download_name() {
        assert!(write_download(&scratch_dir("empty"), "", b"x").is_err());
    }
}
