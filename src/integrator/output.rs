use std::fs::File;
use std::io::{self, Write, BufWriter};
use std::io::{Read, BufRead, BufReader};
use std::path::Path;
use super::super::error::{SimulationError, SimulationResult};
use super::super::particles::{Orbiter, Snapshot, Vector2};


////////////////////////////////////////////////////////////////////////////////
//- Trajectory recording
////////////////////////////////////////////////////////////////////////////////

/// Positions of all orbiters, one snapshot per time step.
///
/// Append-only. Every snapshot holds one entry per orbiter and orbiter `i` is
/// always at index `i`, so following index `i` through the snapshots gives the
/// path of a single orbiter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub snapshots: Vec<Snapshot>,
}

impl Trajectory {
    pub fn new() -> Trajectory {
        Trajectory { snapshots: Vec::new() }
    }

    pub fn with_capacity(n_snapshots: usize) -> Trajectory {
        Trajectory { snapshots: Vec::with_capacity(n_snapshots) }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn n_orbiters(&self) -> usize {
        self.snapshots.first().map_or(0, |snapshot| snapshot.len())
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Every recorded position of orbiter `i`, in time order
    pub fn orbiter_path(&self, i: usize) -> Vec<Vector2> {
        self.snapshots.iter().map(|snapshot| snapshot[i]).collect()
    }
}


////////////////////////////////////////////////////////////////////////////////
//- Export functions
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize)]
struct TrajectoryRow {
    iteration: usize,
    time: f64,
    orbiter: usize,
    dropoff: f64,
    x: f64,
    y: f64,
}

/// Tabular export, one row per orbiter per time step
pub fn write_trajectory_csv<W: Write>(writer: W, orbiters: &[Orbiter], time_step: f64, trajectory: &Trajectory) -> SimulationResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (iteration, snapshot) in trajectory.snapshots.iter().enumerate() {
        let time = iteration as f64 * time_step;
        for (i, (position, orbiter)) in snapshot.iter().zip(orbiters.iter()).enumerate() {
            csv_writer.serialize(TrajectoryRow {
                iteration: iteration,
                time: time,
                orbiter: i,
                dropoff: orbiter.dropoff,
                x: position.x,
                y: position.y,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn n_bytes_per_orbiter_in_history() -> u64 {
    8+4+8+8
}

/// Binary export: a (time, orbiter index, x, y) record per orbiter per time step
pub fn write_trajectory_history<W: Write>(writer: &mut BufWriter<W>, time_step: f64, trajectory: &Trajectory) -> SimulationResult<()> {
    // It can be excessively inefficient to work directly with something that implements Write.
    // A BufWriter keeps an in-memory buffer of data and writes it to the underlying writer
    // in large, infrequent batches.
    for (iteration, snapshot) in trajectory.snapshots.iter().enumerate() {
        let current_time = iteration as f64 * time_step;
        for (i, position) in snapshot.iter().enumerate() {
            let output = (
                            current_time,
                            (i as i32),
                            position.x,
                            position.y,
                        );
            bincode::serialize_into(&mut *writer, &output)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write the trajectory to `path` as csv (`.csv` extension) or binary history.
/// Existing files are never overwritten.
pub fn write_trajectory(path: &Path, orbiters: &[Orbiter], time_step: f64, trajectory: &Trajectory) -> SimulationResult<()> {
    if path.exists() {
        return Err(SimulationError::FileExists(path.display().to_string()));
    }
    let file = File::create(path)?;
    let is_csv = path.extension().map_or(false, |extension| extension == "csv");
    if is_csv {
        write_trajectory_csv(BufWriter::new(file), orbiters, time_step, trajectory)
    } else {
        write_trajectory_history(&mut BufWriter::new(file), time_step, trajectory)
    }
}


////////////////////////////////////////////////////////////////////////////////
//- Restore functions
////////////////////////////////////////////////////////////////////////////////

/// Rebuild a trajectory from a binary history written by `write_trajectory_history`.
/// A history cut in the middle of a record or of a snapshot is an error.
pub fn read_trajectory_history<R: Read>(reader: R, n_orbiters: usize) -> SimulationResult<Trajectory> {
    let mut reader = BufReader::new(reader);
    let mut trajectory = Trajectory::new();
    if n_orbiters == 0 {
        return Ok(trajectory);
    }
    let mut record_bytes = vec![0u8; n_bytes_per_orbiter_in_history() as usize];
    let mut snapshot = Vec::with_capacity(n_orbiters);
    loop {
        if reader.fill_buf()?.is_empty() {
            break;
        }
        reader.read_exact(&mut record_bytes)?;
        let (_current_time, _i, x, y): (f64, i32, f64, f64) = bincode::deserialize(&record_bytes)?;
        snapshot.push(Vector2::new(x, y));
        if snapshot.len() == n_orbiters {
            trajectory.push(snapshot);
            snapshot = Vec::with_capacity(n_orbiters);
        }
    }
    if !snapshot.is_empty() {
        return Err(SimulationError::Io(io::Error::new(io::ErrorKind::UnexpectedEof,
            format!("history ends after {} of {} orbiters of a snapshot", snapshot.len(), n_orbiters))));
    }
    Ok(trajectory)
}
