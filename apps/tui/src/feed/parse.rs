use crate::domain::Earthquake;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Why a single feature was left out of the result
#[derive(Debug, Error, PartialEq, Eq)]
enum EntryError {
    #[error("missing `{0}`")]
    Missing(&'static str),
    #[error("`{0}` has the wrong type")]
    WrongType(&'static str),
}

/// Maps a GeoJSON feed document to earthquakes in source order.
///
/// A document that is not JSON, or has no `features` array, yields an empty
/// list. Features missing `mag`, `place` or `time` (or carrying the wrong
/// type) are skipped one by one; the rest of the batch is kept.
pub fn parse_feed(document: &str) -> Vec<Earthquake> {
    let root: Value = match serde_json::from_str(document) {
        Ok(root) => root,
        Err(e) => {
            debug!(error = %e, "feed document is not valid JSON");
            return Vec::new();
        }
    };

    let Some(features) = root.get("features").and_then(Value::as_array) else {
        debug!("feed document has no `features` array");
        return Vec::new();
    };

    features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| match parse_feature(feature) {
            Ok(quake) => Some(quake),
            Err(reason) => {
                debug!(index, %reason, "skipping feed entry");
                None
            }
        })
        .collect()
}

/// Same as [`parse_feed`] for raw bytes; invalid UTF-8 yields an empty list.
pub fn parse_feed_bytes(document: &[u8]) -> Vec<Earthquake> {
    std::str::from_utf8(document).map_or_else(
        |e| {
            debug!(error = %e, "feed document is not valid UTF-8");
            Vec::new()
        },
        parse_feed,
    )
}

fn parse_feature(feature: &Value) -> Result<Earthquake, EntryError> {
    let properties = required(feature, "properties")?;
    if !properties.is_object() {
        return Err(EntryError::WrongType("properties"));
    }

    let magnitude = required(properties, "mag")?
        .as_f64()
        .ok_or(EntryError::WrongType("mag"))?;
    let place = required(properties, "place")?
        .as_str()
        .ok_or(EntryError::WrongType("place"))?;
    let time = required(properties, "time")?
        .as_i64()
        .ok_or(EntryError::WrongType("time"))?;
    let url = match properties.get("url") {
        None | Some(Value::Null) => "",
        Some(value) => value.as_str().ok_or(EntryError::WrongType("url"))?,
    };

    Ok(Earthquake::new(magnitude, place, time, url))
}

fn required<'a>(object: &'a Value, key: &'static str) -> Result<&'a Value, EntryError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(EntryError::Missing(key)),
        Some(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(mag: f64, place: &str, time: i64, url: &str) -> Value {
        json!({
            "type": "Feature",
            "properties": { "mag": mag, "place": place, "time": time, "url": url },
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0, 10.0] }
        })
    }

    fn document(features: Vec<Value>) -> String {
        json!({ "type": "FeatureCollection", "features": features }).to_string()
    }

    #[test]
    fn test_well_formed_features_keep_source_order() {
        let doc = document(vec![
            feature(7.1, "12km S of Alpha", 3000, "http://a"),
            feature(6.0, "Beta Region", 2000, "http://b"),
            feature(6.4, "3km E of Gamma", 1000, "http://c"),
        ]);

        let quakes = parse_feed(&doc);

        let places: Vec<&str> = quakes.iter().map(Earthquake::location).collect();
        assert_eq!(places, vec!["12km S of Alpha", "Beta Region", "3km E of Gamma"]);
        assert_eq!(quakes[1], Earthquake::new(6.0, "Beta Region", 2000, "http://b"));
    }

    #[test]
    fn test_entry_missing_a_required_field_is_skipped() {
        for missing in ["mag", "place", "time"] {
            let mut broken = feature(5.5, "Middle", 2000, "http://m");
            if let Some(properties) = broken["properties"].as_object_mut() {
                properties.remove(missing);
            }
            let doc = document(vec![
                feature(6.1, "First", 3000, "http://f"),
                broken,
                feature(6.2, "Last", 1000, "http://l"),
            ]);

            let quakes = parse_feed(&doc);

            assert_eq!(quakes.len(), 2, "dropping `{missing}`");
            assert_eq!(quakes[0].location(), "First");
            assert_eq!(quakes[1].location(), "Last");
        }
    }

    #[test]
    fn test_null_and_mistyped_fields_skip_only_that_entry() {
        let doc = document(vec![
            json!({ "properties": { "mag": null, "place": "Null mag", "time": 1 } }),
            json!({ "properties": { "mag": "6.0", "place": "String mag", "time": 1 } }),
            json!({ "properties": { "mag": 6.0, "place": 12, "time": 1 } }),
            json!({ "properties": { "mag": 6.0, "place": "Float time", "time": 1.5 } }),
            json!({ "properties": { "mag": 6.0, "place": "Number url", "time": 1, "url": 9 } }),
            json!({ "properties": "not an object" }),
            json!("not a feature"),
            json!({ "properties": { "mag": 6, "place": "Kept", "time": 5 } }),
        ]);

        let quakes = parse_feed(&doc);

        assert_eq!(quakes, vec![Earthquake::new(6.0, "Kept", 5, "")]);
    }

    #[test]
    fn test_absent_url_defaults_to_empty_string() {
        let doc = document(vec![json!({
            "properties": { "mag": 6.3, "place": "No link", "time": 77 }
        })]);

        let quakes = parse_feed(&doc);

        assert_eq!(quakes, vec![Earthquake::new(6.3, "No link", 77, "")]);
    }

    #[test]
    fn test_non_json_or_empty_input_yields_nothing() {
        assert!(parse_feed("").is_empty());
        assert!(parse_feed("<html>503</html>").is_empty());
        assert!(parse_feed(r#"{"features": [ {"#).is_empty());
        assert!(parse_feed_bytes(&[0xff, 0xfe, 0x00]).is_empty());
    }

    #[test]
    fn test_document_without_feature_array_yields_nothing() {
        assert!(parse_feed("{}").is_empty());
        assert!(parse_feed(r#"{"features": {"mag": 6}}"#).is_empty());
        assert!(parse_feed("[1, 2, 3]").is_empty());
    }

    #[test]
    fn test_two_feature_scenario_keeps_the_complete_one() {
        let doc = r#"{
            "features": [
                { "properties": { "mag": 6.2, "place": "5km NW of Smithville", "time": 1000, "url": "http://x" } },
                { "properties": { "place": "Somewhere", "time": 2000, "url": "http://y" } }
            ]
        }"#;

        let quakes = parse_feed_bytes(doc.as_bytes());

        assert_eq!(
            quakes,
            vec![Earthquake::new(6.2, "5km NW of Smithville", 1000, "http://x")]
        );
    }
}
