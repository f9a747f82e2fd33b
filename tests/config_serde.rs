#![cfg(feature = "serde")]

use lattice_sculpt::{Simulation, SimulationConfig, Vec2};

#[test]
fn config_round_trips_through_json() {
    let config: SimulationConfig<f64> = SimulationConfig::new()
        .with_resolution(16)
        .with_size(3.0, 1.5)
        .with_prune_threshold(0.2)
        .with_bounds(Vec2::new(-3.0, -3.0), Vec2::new(3.0, 3.0));
    let json = serde_json::to_string(&config).unwrap();
    let back: SimulationConfig<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn preset_loads_from_json() {
    let json = r#"{
        "mesh": { "resolution": 6, "width": 2.0, "height": 1.0, "stiffness": 1.0, "gravity": 9.81 },
        "timestep": 0.02,
        "relaxation_iterations": 5,
        "prune_threshold": 0.1,
        "prune_interval": 10,
        "bounds": { "min": { "x": -2.0, "y": -2.0 }, "max": { "x": 2.0, "y": 2.0 } }
    }"#;
    let config: SimulationConfig<f32> = serde_json::from_str(json).unwrap();
    let sim = Simulation::new(&config).unwrap();
    assert_eq!(sim.solver().relaxation_iterations(), 5);
    assert_eq!(sim.solver().total_count(), 5 * 2 * 6);
}
