//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function
//--------------------------------------------------------------------

extern crate raster_loader;
extern crate shape_processor;

use std::error::Error;
use std::io::prelude::*;
use std::io;
use std::path::Path;

use shape_processor::{ContourOptions, Shape, VerticesDetectionType};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    print!("Enter address of the raster file: ");
    io::stdout().flush()?;

    let mut path = String::new();
    io::stdin().read_line(&mut path)?;
    let path = Path::new(path.trim());
    let data = std::fs::read_to_string(path)?;

    let raster = match path.extension().and_then(|e| e.to_str()) {
        Some("pgm") => raster_loader::raster_from_pgm(&data)?,
        _ => raster_loader::raster_from_ascii(&data)?
    };
    log::info!("loaded {}x{} raster from {}", raster.width(), raster.height(), path.display());

    let options = ContourOptions::default()
        .with_hole_detection(true)
        .with_multipart_detection(true)
        .with_detection_type(VerticesDetectionType::Integrated);

    let then = std::time::Instant::now();
    let polygons = shape_processor::detect_vertices(&raster, &options)?;
    let detected = std::time::Instant::now();
    let shape = Shape::from_contours(&polygons, 1.0)?;
    let now = std::time::Instant::now();

    for (i, polygon) in polygons.iter().enumerate() {
        println!("Polygon {}: {} vertices", i, polygon.vertex_count());
    }

    let mass = shape.mass();
    println!("Shape: {}", shape.name());
    println!("Area: {:.3}, centroid: {}, inertia: {:.3}", mass.area, mass.centroid, mass.inertia);
    println!("Extraction time: {:?}", detected.duration_since(then));
    println!("Shape construction time: {:?}", now.duration_since(detected));
    println!();

    Ok(())
}
