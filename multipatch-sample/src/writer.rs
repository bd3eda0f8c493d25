/// Shapefile dataset and projection sidecar output.
use crate::house::{HOUSE_NAME, house_multipatch};
use shapefile::Writer;
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use std::fs;
use std::path::Path;

/// Well-known-text description of the WGS 84 geographic coordinate system,
/// written verbatim to the .prj sidecar.
pub const WGS84_WKT: &str = "GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563,AUTHORITY[\"EPSG\",\"7030\"]],AUTHORITY[\"EPSG\",\"6326\"]],PRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",\"8901\"]],UNIT[\"degree\",0.0174532925199433,AUTHORITY[\"EPSG\",\"9122\"]],AUTHORITY[\"EPSG\",\"4326\"]]";

/// Write the house as a single multipatch record with one "name" attribute.
/// Produces the .shp file plus its .shx and .dbf companions; headers are
/// finalized when the writer is dropped.
pub fn write_house_dataset(shp_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let table = TableWriterBuilder::new()
        .add_character_field(FieldName::try_from("name")?, 50);
    let mut writer = Writer::from_path(shp_path, table)?;

    let mut record = Record::default();
    record.insert(
        "name".to_string(),
        FieldValue::Character(Some(HOUSE_NAME.to_string())),
    );
    writer.write_shape_and_record(&house_multipatch(), &record)?;
    drop(writer);

    println!("Saved {} (multipatch, 1 record)", shp_path.display());
    Ok(())
}

/// Write the fixed WGS 84 descriptor next to the dataset.
pub fn write_projection_sidecar(prj_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(prj_path, WGS84_WKT)?;

    println!("Saved {}", prj_path.display());
    Ok(())
}
