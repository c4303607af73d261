use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::warn;

use super::{edge::EdgeRecord, NodeIndex, NodeRecord};

/// Column lookup by header name, so input files may carry extra columns or
/// order theirs freely.
struct Columns {
    headers: StringRecord,
}

impl Columns {
    fn field<'a>(&self, record: &'a StringRecord, name: &str) -> Option<&'a str> {
        let position = self.headers.iter().position(|header| header == name)?;
        record.get(position).filter(|value| !value.is_empty())
    }

    fn float(&self, record: &StringRecord, name: &str, default: f64) -> f64 {
        self.field(record, name)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    fn flag(&self, record: &StringRecord, name: &str, default: bool) -> bool {
        match self.field(record, name) {
            Some(value) => matches!(
                value.to_ascii_lowercase().as_str(),
                "true" | "1" | "yes"
            ),
            None => default,
        }
    }
}

pub fn load_nodes(path: &Path) -> csv::Result<NodeIndex> {
    read_nodes(File::open(path)?)
}

/// Reads node records from CSV with `city` (or `name`), `country`, `lat` and
/// `lon` columns. Rows without a city name are skipped with a warning.
pub fn read_nodes<R: Read>(reader: R) -> csv::Result<NodeIndex> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns {
        headers: csv_reader.headers()?.clone(),
    };

    let mut nodes = NodeIndex::new();
    for record in csv_reader.records() {
        let record = record?;
        let city = match columns
            .field(&record, "city")
            .or_else(|| columns.field(&record, "name"))
        {
            Some(city) => city.to_string(),
            None => {
                warn!("skipping node row without a city name: {:?}", record);
                continue;
            }
        };
        nodes.insert(NodeRecord {
            city,
            country: columns.field(&record, "country").map(str::to_string),
            lat: columns
                .field(&record, "lat")
                .and_then(|value| value.parse().ok()),
            lon: columns
                .field(&record, "lon")
                .and_then(|value| value.parse().ok()),
        });
    }

    Ok(nodes)
}

pub fn load_edges(path: &Path) -> csv::Result<Vec<EdgeRecord>> {
    read_edges(File::open(path)?)
}

/// Reads edge records from CSV. Rows missing either endpoint are skipped
/// with a warning; malformed magnitudes fall back to 0.0 (safety to 0.5)
/// so one bad cell never discards a whole file.
pub fn read_edges<R: Read>(reader: R) -> csv::Result<Vec<EdgeRecord>> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns {
        headers: csv_reader.headers()?.clone(),
    };

    let mut edges = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let (source, target) = match (
            columns.field(&record, "source"),
            columns.field(&record, "target"),
        ) {
            (Some(source), Some(target)) => (source.to_string(), target.to_string()),
            _ => {
                warn!("skipping edge row without endpoints: {:?}", record);
                continue;
            }
        };
        edges.push(EdgeRecord {
            source,
            target,
            mode: columns
                .field(&record, "mode")
                .unwrap_or("unknown")
                .to_string(),
            distance_km: columns.float(&record, "distance_km", 0.0),
            time_min: columns.float(&record, "time_min", 0.0),
            cost_usd: columns.float(&record, "cost_usd", 0.0),
            emission_kgco2: columns.float(&record, "emission_kgco2", 0.0),
            safety_score: columns.float(&record, "safety_score", 0.5),
            accessible: columns.flag(&record, "accessible", true),
        });
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nodes_and_tolerates_missing_coordinates() {
        let data = "city,country,lat,lon\n\
                    Berlin,Germany,52.52,13.405\n\
                    Atlantis,,,\n";
        let nodes = read_nodes(data.as_bytes()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes.get("Berlin").unwrap().lat, Some(52.52));
        assert_eq!(nodes.get("Atlantis").unwrap().lat, None);
    }

    #[test]
    fn accepts_name_as_city_column() {
        let data = "name,lat,lon\nParis,48.85,2.35\n";
        let nodes = read_nodes(data.as_bytes()).unwrap();
        assert!(nodes.get("Paris").is_some());
    }

    #[test]
    fn skips_edge_rows_without_endpoints() {
        let data = "source,target,mode,distance_km\n\
                    Berlin,Paris,train,1054\n\
                    ,Paris,bus,900\n";
        let edges = read_edges(data.as_bytes()).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source, "Berlin");
    }

    #[test]
    fn defaults_malformed_magnitudes() {
        let data = "source,target,distance_km,safety_score,accessible\n\
                    Berlin,Paris,not-a-number,,no\n";
        let edges = read_edges(data.as_bytes()).unwrap();
        assert_eq!(edges[0].distance_km, 0.0);
        assert_eq!(edges[0].safety_score, 0.5);
        assert_eq!(edges[0].mode, "unknown");
        assert!(!edges[0].accessible);
    }
}
