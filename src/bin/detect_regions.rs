use card_regions::config::detect::load_config;
use card_regions::image::io::{load_rgba_image, save_region_overlay, write_json_file};
use card_regions::RegionDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let rgba = load_rgba_image(&config.input)
        .map_err(|e| format!("Failed to load {}: {e}", config.input.display()))?;
    let detector = RegionDetector::new(config.detection);
    let report = detector
        .detect_with_report(rgba.as_view())
        .map_err(|e| e.to_string())?;

    write_json_file(&config.output.regions_json, &report).map_err(|e| e.to_string())?;
    if let Some(path) = &config.output.overlay_image {
        save_region_overlay(&rgba, &report.regions, path).map_err(|e| e.to_string())?;
        println!("Saved overlay to {}", path.display());
    }

    for region in &report.regions {
        println!(
            "{:<10} {:<6} x={:<6.0} y={:<6.0} w={:<6.0} h={:<6.0} conf={:.3}",
            region.id,
            region.kind,
            region.bounds.x,
            region.bounds.y,
            region.bounds.width,
            region.bounds.height,
            region.confidence
        );
    }
    println!(
        "Saved {} regions ({} candidates) to {} in {:.2} ms",
        report.regions.len(),
        report.trace.candidates(),
        config.output.regions_json.display(),
        report.trace.timings.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: detect_regions <config.json>".to_string()
}
