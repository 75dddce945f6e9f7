extern crate orbiters;
extern crate serde_json;
#[macro_use]
extern crate assert_approx_eq;

mod common;
use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;
use orbiters::output::{self, Trajectory};
use orbiters::simulation;
use orbiters::{Case, IntegratorType, SimulationError, Vector2, Yoshida8};

fn short_run() -> (orbiters::Universe, Trajectory) {
    let mut universe = common::circular_universe(2.);
    universe.orbiters.push(orbiters::Orbiter::with_dropoff(Vector2::new(-2., 0.), Vector2::new(0., -0.6), 2.5));
    let initial_universe = universe.clone();
    let trajectory = simulation::run(&mut universe, &Yoshida8::new(), 1., 0.25, true).unwrap();
    (initial_universe, trajectory)
}

fn temporary_path(filename: &str) -> PathBuf {
    std::env::temp_dir().join(format!("orbiters-{}-{}", std::process::id(), filename))
}

#[test]
fn orbiter_path_follows_one_orbiter() {
    let (_universe, trajectory) = short_run();
    assert_eq!(trajectory.len(), 5);
    assert_eq!(trajectory.n_orbiters(), 2);
    let path = trajectory.orbiter_path(1);
    assert_eq!(path.len(), 5);
    assert_eq!(path[0], Vector2::new(-2., 0.));
    for (position, snapshot) in path.iter().zip(trajectory.snapshots.iter()) {
        assert_eq!(*position, snapshot[1]);
    }
    assert_eq!(trajectory.last().unwrap()[1], path[4]);
}

#[test]
fn trajectory_csv() {
    let (universe, trajectory) = short_run();
    let mut buffer: Vec<u8> = Vec::new();
    output::write_trajectory_csv(&mut buffer, &universe.orbiters, 0.25, &trajectory).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "iteration,time,orbiter,dropoff,x,y");
    assert_eq!(lines.len(), 1 + trajectory.len() * trajectory.n_orbiters());
    assert_eq!(lines[1], "0,0.0,0,2.0,1.0,0.0");
    assert_eq!(lines[2], "0,0.0,1,2.5,-2.0,0.0");
    assert!(lines[3].starts_with("1,0.25,0,2.0,"));
}

#[test]
fn trajectory_history() {
    let (_universe, trajectory) = short_run();
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut writer = BufWriter::new(&mut buffer);
        output::write_trajectory_history(&mut writer, 0.25, &trajectory).unwrap();
    }
    let expected_n_bytes = output::n_bytes_per_orbiter_in_history() * (trajectory.len() * trajectory.n_orbiters()) as u64;
    assert_eq!(buffer.len() as u64, expected_n_bytes);

    let restored_trajectory = output::read_trajectory_history(&buffer[..], trajectory.n_orbiters()).unwrap();
    assert_eq!(restored_trajectory, trajectory);
}

#[test]
fn truncated_history_is_rejected() {
    let (_universe, trajectory) = short_run();
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut writer = BufWriter::new(&mut buffer);
        output::write_trajectory_history(&mut writer, 0.25, &trajectory).unwrap();
    }
    let n_orbiters = trajectory.n_orbiters();
    let n_bytes_per_orbiter = output::n_bytes_per_orbiter_in_history() as usize;

    // Cut inside the last record
    let result = output::read_trajectory_history(&buffer[..buffer.len()-10], n_orbiters);
    assert!(matches!(result, Err(SimulationError::Io(_))));

    // Cut on a record boundary but inside the last snapshot
    let result = output::read_trajectory_history(&buffer[..buffer.len()-n_bytes_per_orbiter], n_orbiters);
    assert!(matches!(result, Err(SimulationError::Io(_))));

    // Cut on a snapshot boundary
    let shorter_trajectory = output::read_trajectory_history(&buffer[..buffer.len()-n_orbiters*n_bytes_per_orbiter], n_orbiters).unwrap();
    assert_eq!(shorter_trajectory.len(), trajectory.len() - 1);
    assert_eq!(shorter_trajectory.snapshots[..], trajectory.snapshots[..trajectory.len()-1]);

    let empty_trajectory = output::read_trajectory_history(&buffer[..0], n_orbiters).unwrap();
    assert!(empty_trajectory.is_empty());
}

#[test]
fn trajectory_files_are_not_overwritten() {
    let (universe, trajectory) = short_run();
    let csv_path = temporary_path("trajectory.csv");
    let binary_path = temporary_path("trajectory.bin");
    let _ = fs::remove_file(&csv_path);
    let _ = fs::remove_file(&binary_path);

    output::write_trajectory(&csv_path, &universe.orbiters, 0.25, &trajectory).unwrap();
    output::write_trajectory(&binary_path, &universe.orbiters, 0.25, &trajectory).unwrap();
    assert!(fs::read_to_string(&csv_path).unwrap().starts_with("iteration,"));
    let restored_trajectory = output::read_trajectory_history(fs::File::open(&binary_path).unwrap(), 2).unwrap();
    assert_eq!(restored_trajectory, trajectory);

    let result = output::write_trajectory(&csv_path, &universe.orbiters, 0.25, &trajectory);
    assert!(matches!(result, Err(SimulationError::FileExists(_))));

    let _ = fs::remove_file(&csv_path);
    let _ = fs::remove_file(&binary_path);
}

////////////////////////////////////////////////////////////////////////////////
// Cases

#[test]
fn case_from_json() {
    let json = r#"{
        "gravitational_constant": 1.0,
        "time_limit": 2.0,
        "time_step": 0.5,
        "integrator": "SymplecticEuler",
        "body": {"mass": 1.0, "radius": 0.1},
        "orbiters": [
            {"position": {"x": 1.0, "y": 0.0}, "velocity": {"x": 0.0, "y": 1.0}},
            {"position": {"x": 0.0, "y": 2.0}, "velocity": {"x": -0.5, "y": 0.0}, "dropoff": 1.5}
        ]
    }"#;
    let case: Case = serde_json::from_str(json).unwrap();
    assert_eq!(case.integrator, IntegratorType::SymplecticEuler);
    assert_eq!(case.body.position, Vector2::zero());
    assert_eq!(case.orbiters[0].dropoff, 2.);
    assert_eq!(case.orbiters[1].dropoff, 1.5);

    let trajectory = case.run(true).unwrap();
    assert_eq!(trajectory.len(), 5);
    assert_eq!(trajectory.first().unwrap()[1], Vector2::new(0., 2.));
}

#[test]
fn cygnus_x1_case() {
    let case = Case::cygnus_x1();
    assert_eq!(case.gravitational_constant, 6.67408e-11);
    assert_eq!(case.body.mass, 21.2 * 2e30);
    assert_eq!(case.body.radius, 21. * 7e8);
    assert_eq!(case.integrator, IntegratorType::Yoshida8);
    assert_eq!(case.orbiters.len(), 3);
    assert_eq!(case.orbiters.iter().map(|orbiter| orbiter.dropoff).collect::<Vec<f64>>(), vec![2., 2.3, 1.98]);
    assert!(case.universe().validate().is_ok());

    let case_path = temporary_path("cygnus_x1.json");
    let _ = fs::remove_file(&case_path);
    case.write_json_file(&case_path).unwrap();
    let restored_case = Case::from_json_file(&case_path).unwrap();
    assert_eq!(restored_case.integrator, case.integrator);
    assert_approx_eq!(restored_case.body.mass / case.body.mass, 1., 1e-15);
    assert_approx_eq!(restored_case.time_limit / case.time_limit, 1., 1e-15);
    for (restored_orbiter, orbiter) in restored_case.orbiters.iter().zip(case.orbiters.iter()) {
        assert_approx_eq!(restored_orbiter.position.x / orbiter.position.x, 1., 1e-15);
        assert_approx_eq!(restored_orbiter.velocity.y / orbiter.velocity.y, 1., 1e-15);
        assert_approx_eq!(restored_orbiter.dropoff, orbiter.dropoff, 1e-15);
    }
    assert!(matches!(case.write_json_file(&case_path), Err(SimulationError::FileExists(_))));
    let _ = fs::remove_file(&case_path);
}
