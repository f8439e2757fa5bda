use anyhow::Context;
use backup_icon::{write_icon, ICON_SIZES, OUTPUT_FILE};
use log::info;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("backup-icon {APP_VERSION}");
    let report = write_icon(OUTPUT_FILE, &ICON_SIZES)
        .with_context(|| format!("Could not generate {OUTPUT_FILE}"))?;

    println!("Icon saved: {}", report.path.display());
    println!("Sizes: {}", report.size_list());
    println!("All images rendered at native size (no scaling artifacts)");
    println!("Design: hard drive (top-left) -> USB stick (bottom-right) with blue arrow");
    Ok(())
}
