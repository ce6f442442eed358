use anyhow::Context;
use pixelraster::{farbfeld, PNG};
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let output_dir = Path::new("benchmark");
    fs::create_dir_all(output_dir).context("Failed to create benchmark folder")?;
    let test_images = fs::read_dir("tests/png-suite/")
        .context("Failed to read png-suite folder")?
        .filter_map(|entry| entry.ok())
        .filter(|p| {
            let path = p.path();
            path.is_file()
                && path.extension() == Some(OsStr::new("png"))
                && !path
                    .file_name()
                    .and_then(|file_name| file_name.to_str())
                    .map(|file_name| file_name.starts_with('x'))
                    .unwrap_or(true)
        });
    let mut processed_images = Vec::new();
    let mut failed_images = Vec::new();

    for image in test_images {
        let image_path = image.path();
        let test_name = image_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap()
            .to_owned();
        let orig_name = PathBuf::from(format!("{test_name}-orig.png"));
        fs::copy(&image_path, output_dir.join(&orig_name)).context(format!(
            "Failed to copy from {} to {}",
            image_path.display(),
            orig_name.display(),
        ))?;
        match PNG::decode(&fs::read(&image_path)?) {
            Ok(decoded) => {
                let ff_name = PathBuf::from(format!("{test_name}.ff"));
                fs::write(output_dir.join(ff_name), farbfeld::encode(&decoded))?;
                processed_images.push(test_name);
            }
            Err(e) => {
                log::warn!("failed to decode {}: {e:#}", image_path.display());
                failed_images.push(serde_json::json!({
                    "name": test_name,
                    "error": format!("{e:#}"),
                }));
            }
        }
    }
    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
    let results = serde_json::json!({
        "date": now,
        "processed_images": processed_images,
        "failed_images": failed_images,
    });
    fs::write(output_dir.join("test_results.json"), results.to_string())?;
    Ok(())
}
