use anyhow::Context;
use pixelraster::{farbfeld, PNG};

fn main() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();
    let file_name = args
        .last()
        .context("usage: process-image [-v] <image.png>")?;
    let input = std::fs::read(file_name).context(format!("Failed to read {file_name}"))?;
    let image = PNG::decode(&input).context(format!("Failed to decode {file_name}"))?;
    let output_name = std::path::Path::new(file_name).with_extension("ff");
    std::fs::write(&output_name, farbfeld::encode(&image))?;
    log::info!(
        "wrote {}x{} pixels to {}",
        image.width(),
        image.height(),
        output_name.display()
    );
    Ok(())
}
