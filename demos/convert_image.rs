//! Convert a similarity image into a TSPLIB problem file
//!
//! Usage: cargo run --example convert_image -- <matrix.tif> <out.tsp> [scale offset amplitude]

use similarity_tsplib::{
    convert_to_document, FullMatrixSerializer, ImageFileSource, SerializerConfig,
    SigmoidDistanceTransform,
};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 && args.len() != 5 {
        eprintln!("usage: convert_image <matrix image> <output.tsp> [scale offset amplitude]");
        std::process::exit(2);
    }

    let (scale, offset, amplitude) = if args.len() == 5 {
        (args[2].parse()?, args[3].parse()?, args[4].parse()?)
    } else {
        (1000.0, 0.0, 1_000_000.0)
    };

    let source = ImageFileSource::new(&args[0]);
    let name = source
        .path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "similarity".to_string());
    let serializer = FullMatrixSerializer::new(SerializerConfig {
        name,
        ..SerializerConfig::default()
    });
    let transform = SigmoidDistanceTransform::new(scale, offset, amplitude);

    let start_time = Instant::now();
    let document = convert_to_document(&source, &serializer, &transform)?;
    log::info!("Conversion took {:.3}ms", start_time.elapsed().as_secs_f64() * 1e3);

    document.save_to_file(&args[1])?;
    Ok(())
}
