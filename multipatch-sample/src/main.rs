/// Sample multipatch dataset generator entry point
mod house;
mod writer;

use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating sample multipatch house dataset...");

    writer::write_house_dataset(Path::new("house.shp"))?;
    writer::write_projection_sidecar(Path::new("house.prj"))?;

    println!("Generation complete!");
    Ok(())
}
