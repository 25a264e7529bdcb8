//! Path resolution tests

use device_schema_sdk::{
    ConversionError, DesiredProperty, DesiredPropertyCallbacks, Metadata, ModelId, PathLeaf,
    PathTarget, SchemaRegistry,
};
use std::any::Any;

fn ignore_value(_: &serde_json::Value, _: &mut dyn Any) -> Result<(), ConversionError> {
    Ok(())
}

fn ignore(_: &mut dyn Any) {}

fn callbacks() -> DesiredPropertyCallbacks {
    DesiredPropertyCallbacks {
        from_agent_value: ignore_value,
        initialize: ignore,
        deinitialize: ignore,
    }
}

/// Truck -> engine (Engine) -> sensor (Sensor), each level with twin members
fn fleet() -> (SchemaRegistry, ModelId, ModelId, ModelId) {
    let mut registry = SchemaRegistry::new();
    let id = registry.create_schema("Fleet", Metadata::new(())).unwrap();
    let truck = registry.create_model(id, "Truck").unwrap();
    let engine = registry.create_model(id, "Engine").unwrap();
    let sensor = registry.create_model(id, "Sensor").unwrap();

    let model = registry.model_mut(truck).unwrap();
    model.add_property("speed", "int").unwrap();
    model.add_reported_property("mileage", "int").unwrap();

    let model = registry.model_mut(engine).unwrap();
    model
        .add_desired_property(DesiredProperty::new("maxRpm", "int", 4, callbacks()))
        .unwrap();

    let model = registry.model_mut(sensor).unwrap();
    model.add_property("reading", "double").unwrap();
    model.add_reported_property("status", "int").unwrap();
    model
        .add_desired_property(DesiredProperty::new("interval", "int", 8, callbacks()))
        .unwrap();

    registry
        .add_model_reference(truck, "engine", engine, 100, None)
        .unwrap();
    registry
        .add_model_reference(engine, "sensor", sensor, 20, None)
        .unwrap();

    (registry, truck, engine, sensor)
}

mod property_path_tests {
    use super::*;

    #[test]
    fn test_direct_and_nested_properties() {
        let (registry, truck, _, _) = fleet();
        assert!(registry.model_property_by_path_exists(truck, "speed"));
        assert!(registry.model_property_by_path_exists(truck, "/speed"));
        assert!(registry.model_property_by_path_exists(truck, "engine/sensor/reading"));
        assert!(!registry.model_property_by_path_exists(truck, "engine/reading"));
        assert!(!registry.model_property_by_path_exists(truck, "mileage"));
    }

    #[test]
    fn test_nested_model_is_a_valid_target() {
        let (registry, truck, _, sensor) = fleet();
        assert!(registry.model_property_by_path_exists(truck, "engine"));
        assert!(registry.model_property_by_path_exists(truck, "engine/sensor"));

        let target = registry
            .resolve_path(truck, "engine/sensor", PathLeaf::Property)
            .unwrap();
        assert_eq!(target, PathTarget::Model { model: sensor, offset: 120 });
    }

    #[test]
    fn test_partial_segment_names_fail() {
        let (registry, truck, _, _) = fleet();
        assert!(!registry.model_property_by_path_exists(truck, "eng/sensor/reading"));
        assert!(!registry.model_property_by_path_exists(truck, "engine/sensorX/reading"));
        assert!(!registry.model_property_by_path_exists(truck, "spee"));
    }

    #[test]
    fn test_malformed_paths_fail() {
        let (registry, truck, _, _) = fleet();
        for path in ["", "/", "//", "engine/", "/engine/", "engine//sensor", "speed/"] {
            assert!(
                !registry.model_property_by_path_exists(truck, path),
                "path {path:?} should not exist"
            );
        }
    }
}

mod twin_path_tests {
    use super::*;

    #[test]
    fn test_reported_paths() {
        let (registry, truck, _, _) = fleet();
        assert!(registry.model_reported_property_by_path_exists(truck, "mileage"));
        assert!(registry.model_reported_property_by_path_exists(truck, "engine/sensor/status"));
        assert!(registry.model_reported_property_by_path_exists(truck, "engine"));
        assert!(!registry.model_reported_property_by_path_exists(truck, "speed"));
        assert!(!registry.model_reported_property_by_path_exists(truck, "engine/sensor/"));
    }

    #[test]
    fn test_desired_paths_accumulate_offsets() {
        let (registry, truck, engine, sensor) = fleet();
        assert!(registry.model_desired_property_by_path_exists(truck, "engine/maxRpm"));
        assert!(!registry.model_desired_property_by_path_exists(truck, "maxRpm"));

        let target = registry
            .resolve_path(truck, "engine/maxRpm", PathLeaf::DesiredProperty)
            .unwrap();
        assert_eq!(target.model(), engine);
        assert_eq!(target.offset(), 104);

        let target = registry
            .resolve_path(truck, "/engine/sensor/interval", PathLeaf::DesiredProperty)
            .unwrap();
        assert_eq!(
            target,
            PathTarget::Leaf {
                model: sensor,
                leaf: PathLeaf::DesiredProperty,
                name: "interval".into(),
                offset: 128,
            }
        );
    }

    #[test]
    fn test_paths_start_at_the_given_model() {
        let (registry, _, engine, _) = fleet();
        assert!(registry.model_property_by_path_exists(engine, "sensor/reading"));
        assert!(!registry.model_property_by_path_exists(engine, "engine/sensor/reading"));
    }
}
