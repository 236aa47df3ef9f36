use crate::closest_pair::PointPair;
use anyhow::{Context, Result};
use geo::Point;
use serde::Deserialize;
use serde_json::json;
use std::io::{Read, Write};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OutputFormat {
    GeoJSON,
    GeoJSONSeq,
}

impl OutputFormat {
    /// `.geojson` is GeoJSON, `.geojsons` is GeoJSONSeq
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".geojson") {
            Some(OutputFormat::GeoJSON)
        } else if filename.ends_with(".geojsons") {
            Some(OutputFormat::GeoJSONSeq)
        } else {
            None
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum Geometry {
    Point(Point),
    LineString(Vec<Point>),
}

impl Geometry {
    fn type_bytes(&self) -> &'static [u8] {
        match self {
            Geometry::Point(_) => b"Point",
            Geometry::LineString(_) => b"LineString",
        }
    }
}

/// One row of a points CSV file. Header must be `x,y`
#[derive(Debug, Deserialize)]
struct CsvPoint {
    x: f64,
    y: f64,
}

/// Read points from a CSV file with columns `x` & `y`
pub fn read_points_csv(rdr: impl Read) -> Result<Vec<Point>> {
    let mut rdr = csv::Reader::from_reader(rdr);
    rdr.deserialize()
        .enumerate()
        .map(|(i, row)| {
            let row: CsvPoint = row.with_context(|| format!("Reading CSV row {}", i + 1))?;
            Ok(Point::new(row.x, row.y))
        })
        .collect()
}

/// All input points, marking which are the closest, and a line between the closest pair.
pub fn closest_pair_features(points: &[Point], pair: &PointPair) -> Vec<(serde_json::Value, Geometry)> {
    let closest = pair.points();
    let mut features = Vec::with_capacity(points.len() + 1);
    features.extend(points.iter().map(|p| {
        (
            json!({"closest": closest.contains(p)}),
            Geometry::Point(*p),
        )
    }));
    features.push((
        json!({"distance": pair.distance()}),
        Geometry::LineString(closest.to_vec()),
    ));
    features
}

/// Write a geojson featurecollection, but manually construct it
pub fn write_geojson_features_directly(
    mut features: impl Iterator<Item = (serde_json::Value, Geometry)>,
    mut f: &mut impl Write,
    output_format: &OutputFormat,
) -> Result<usize> {
    let mut num_written = 0;

    if output_format == &OutputFormat::GeoJSON {
        f.write_all(b"{\"type\":\"FeatureCollection\", \"features\": [\n")?;
    }
    if let Some(feature_0) = features.next() {
        num_written += write_geojson_feature_directly(&mut f, &feature_0, output_format)?;
        for feature in features {
            if output_format == &OutputFormat::GeoJSON {
                f.write_all(b",\n")?;
            }
            num_written += write_geojson_feature_directly(&mut f, &feature, output_format)?;
        }
    }
    if output_format == &OutputFormat::GeoJSON {
        f.write_all(b"\n]}")?;
    }

    Ok(num_written)
}

fn write_geojson_feature_directly(
    mut f: &mut impl Write,
    feature: &(serde_json::Value, Geometry),
    output_format: &OutputFormat,
) -> Result<usize> {
    if output_format == &OutputFormat::GeoJSONSeq {
        f.write_all(b"\x1E")?;
    }
    f.write_all(b"{\"properties\":")?;
    serde_json::to_writer(&mut f, &feature.0)?;
    f.write_all(b", \"geometry\": {\"type\":\"")?;
    f.write_all(feature.1.type_bytes())?;
    f.write_all(b"\", \"coordinates\": ")?;
    match &feature.1 {
        Geometry::Point(p) => write_point_coords(&mut f, p)?,
        Geometry::LineString(ps) => write_linestring_coords(&mut f, ps)?,
    }
    f.write_all(b"}, \"type\": \"Feature\"}")?;
    if output_format == &OutputFormat::GeoJSONSeq {
        f.write_all(b"\x0A")?;
    }

    Ok(1)
}

fn write_point_coords(f: &mut impl Write, p: &Point) -> Result<()> {
    write!(f, "[{:.6}, {:.6}]", p.x(), p.y())?;
    Ok(())
}

fn write_linestring_coords(f: &mut impl Write, coords: &[Point]) -> Result<()> {
    f.write_all(b"[")?;
    for (j, p) in coords.iter().enumerate() {
        if j != 0 {
            f.write_all(b",")?;
        }
        write_point_coords(&mut *f, p)?;
    }
    f.write_all(b"]")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_filename() {
        assert_eq!(OutputFormat::from_filename("a.geojson"), Some(OutputFormat::GeoJSON));
        assert_eq!(OutputFormat::from_filename("a.geojsons"), Some(OutputFormat::GeoJSONSeq));
        assert_eq!(OutputFormat::from_filename("a.json"), None);
    }

    #[test]
    fn read_csv() {
        let input = "x,y\n0,0\n3,4\n-1.5,2.25\n";
        let points = read_points_csv(input.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![Point::new(0., 0.), Point::new(3., 4.), Point::new(-1.5, 2.25)]
        );
    }

    #[test]
    fn read_csv_bad_row() {
        let input = "x,y\n0,0\n3,four\n";
        assert!(read_points_csv(input.as_bytes()).is_err());
    }

    #[test]
    fn read_csv_empty() {
        let points = read_points_csv("x,y\n".as_bytes()).unwrap();
        assert!(points.is_empty());
    }

    fn sample() -> Vec<(serde_json::Value, Geometry)> {
        let points = vec![Point::new(0., 0.), Point::new(3., 4.), Point::new(1., 1.)];
        let pair = PointPair::new(points[0], points[2]);
        closest_pair_features(&points, &pair)
    }

    #[test]
    fn features() {
        let features = sample();
        assert_eq!(features.len(), 4);
        assert_eq!(features[0].0, json!({"closest": true}));
        assert_eq!(features[1].0, json!({"closest": false}));
        assert_eq!(features[2].0, json!({"closest": true}));
        let distance = features[3].0["distance"].as_f64().unwrap();
        assert!((distance - 2_f64.sqrt()).abs() < 1e-12);
        assert_eq!(
            features[3].1,
            Geometry::LineString(vec![Point::new(0., 0.), Point::new(1., 1.)])
        );
    }

    #[test]
    fn write_geojson() {
        let mut out = Vec::new();
        let num = write_geojson_features_directly(sample().into_iter(), &mut out, &OutputFormat::GeoJSON)
            .unwrap();
        assert_eq!(num, 4);

        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["type"], "FeatureCollection");
        let features = doc["features"].as_array().unwrap();
        assert_eq!(features.len(), 4);
        assert_eq!(features[1]["geometry"]["type"], "Point");
        assert_eq!(features[1]["geometry"]["coordinates"], json!([3.0, 4.0]));
        assert_eq!(features[3]["geometry"]["type"], "LineString");
        assert_eq!(
            features[3]["geometry"]["coordinates"],
            json!([[0.0, 0.0], [1.0, 1.0]])
        );
    }

    #[test]
    fn write_geojson_empty() {
        let mut out = Vec::new();
        let num =
            write_geojson_features_directly(std::iter::empty(), &mut out, &OutputFormat::GeoJSON)
                .unwrap();
        assert_eq!(num, 0);
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["features"], json!([]));
    }

    #[test]
    fn write_geojsonseq() {
        let mut out = Vec::new();
        write_geojson_features_directly(sample().into_iter(), &mut out, &OutputFormat::GeoJSONSeq)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            let line = line.strip_prefix('\x1E').unwrap();
            let feature: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(feature["type"], "Feature");
        }
    }
}
