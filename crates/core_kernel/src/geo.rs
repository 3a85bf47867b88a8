//! Field geometry value object
//!
//! The workbench treats field boundaries as opaque GeoJSON: the UI draws
//! them, the scoring service consumes them, and this core only checks the
//! envelope shape before passing the value through. Coordinate content is
//! never interpreted here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// An opaque GeoJSON Polygon Feature describing one insured field
///
/// The inner value is stored and persisted verbatim. Construction validates
/// only the GeoJSON envelope: the value must be a `Feature` whose geometry
/// is of type `Polygon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPolygon(Value);

impl FieldPolygon {
    /// Wraps a GeoJSON value after checking the Feature/Polygon envelope
    pub fn new(value: Value) -> Result<Self, CoreError> {
        let feature_type = value.get("type").and_then(Value::as_str);
        if feature_type != Some("Feature") {
            return Err(CoreError::invalid_geometry(
                "expected a GeoJSON Feature".to_string(),
            ));
        }

        let geometry_type = value
            .get("geometry")
            .and_then(|g| g.get("type"))
            .and_then(Value::as_str);
        if geometry_type != Some("Polygon") {
            return Err(CoreError::invalid_geometry(
                "expected a Polygon geometry".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the raw GeoJSON value for pass-through
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the wrapper, returning the raw GeoJSON value
    pub fn into_value(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square_feature() -> Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]
                ]]
            }
        })
    }

    #[test]
    fn test_accepts_polygon_feature() {
        let polygon = FieldPolygon::new(square_feature()).unwrap();
        assert_eq!(
            polygon.as_value()["geometry"]["type"],
            Value::String("Polygon".to_string())
        );
    }

    #[test]
    fn test_rejects_non_feature() {
        let result = FieldPolygon::new(json!({"type": "FeatureCollection"}));
        assert!(matches!(result, Err(CoreError::InvalidGeometry(_))));
    }

    #[test]
    fn test_rejects_non_polygon_geometry() {
        let result = FieldPolygon::new(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
        }));
        assert!(matches!(result, Err(CoreError::InvalidGeometry(_))));
    }

    #[test]
    fn test_serde_is_transparent() {
        let polygon = FieldPolygon::new(square_feature()).unwrap();
        let json = serde_json::to_value(&polygon).unwrap();
        assert_eq!(json, square_feature());
    }
}
