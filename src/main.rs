extern crate orbiters;
extern crate time;
extern crate clap;
use clap::{Arg, ArgAction, ArgMatches, Command};
use orbiters::tools::utc_timestamp;
use orbiters::{Case, SimulationResult};
use std::path::Path;
use std::process;
use time::OffsetDateTime;

fn main() {
    let matches = Command::new("Orbiters")
                            .version(env!("CARGO_PKG_VERSION"))
                            .about("Point masses orbiting a fixed central body under a power-law attraction, integrated with symplectic methods.")
                            .subcommand(Command::new("start")
                                    .about("Start a simulation")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON case description"))
                                    .arg(Arg::new("trajectory_filename")
                                        .required(true)
                                        .index(2)
                                        .help("Trajectory output filename (.csv for text, binary otherwise)"))
                                    .arg(Arg::new("silent")
                                        .short('s')
                                        .long("silent")
                                        .action(ArgAction::SetTrue)
                                        .help("Only print INFO/WARNING/ERROR messages"))
                                     )
                            .subcommand(Command::new("example")
                                    .about("Write the Cygnus X-1 example case")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON case description to be created"))
                                    )
                            .subcommand_required(true)
                            .arg_required_else_help(true)
                          .get_matches();

    let result = match matches.subcommand() {
        Some(("start", start_matches)) => start(start_matches),
        Some(("example", example_matches)) => example(example_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("[ERROR {} UTC] {}", utc_timestamp(), e);
        process::exit(1);
    }
}

fn start(start_matches: &ArgMatches) -> SimulationResult<()> {
    let t1 = OffsetDateTime::now_utc();
    let case_filename = start_matches.get_one::<String>("case_filename").expect("required argument");
    let trajectory_filename = start_matches.get_one::<String>("trajectory_filename").expect("required argument");
    let silent_mode = start_matches.get_flag("silent");

    let trajectory_path = Path::new(trajectory_filename);
    if trajectory_path.exists() {
        return Err(orbiters::SimulationError::FileExists(trajectory_filename.clone()));
    }

    let case = Case::from_json_file(Path::new(case_filename))?;
    println!("[INFO {} UTC] Created new simulation based on '{}'.", utc_timestamp(), case_filename);

    let trajectory = case.run(silent_mode)?;
    orbiters::output::write_trajectory(trajectory_path, &case.orbiters, case.time_step, &trajectory)?;
    println!("[INFO {} UTC] Trajectory with {} snapshots written to '{}'.", utc_timestamp(), trajectory.len(), trajectory_filename);

    let d = (OffsetDateTime::now_utc() - t1).as_seconds_f64();
    println!("[INFO {} UTC] Execution time: {} seconds", utc_timestamp(), d);
    Ok(())
}

fn example(example_matches: &ArgMatches) -> SimulationResult<()> {
    let case_filename = example_matches.get_one::<String>("case_filename").expect("required argument");
    Case::cygnus_x1().write_json_file(Path::new(case_filename))?;
    println!("[INFO {} UTC] Example case written to '{}'.", utc_timestamp(), case_filename);
    Ok(())
}
