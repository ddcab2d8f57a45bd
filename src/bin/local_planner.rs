// Local planning demo for an Ackermann vehicle.
//
// Refines a global path around polygonal obstacles and plots the result.
//
// usage: local_planner [scenario.toml]
use std::fs::{create_dir_all, read_to_string};

use log::{error, info};
use serde::Deserialize;

use ackermann_local_planner::common::{Hull, Path2D, PathPlanner, Point2D, RoboticsResult};
use ackermann_local_planner::path_planning::{LocalPlanner, LocalPlannerConfig};
use ackermann_local_planner::utils::plot_route;
use ackermann_local_planner::vehicle::DEFAULT_VEHICLE_LENGTH;

const SHOW_ANIMATION: bool = true;
const DEFAULT_SCENARIO: &str = include_str!("../../params/corridor.toml");

#[derive(Debug, Deserialize)]
struct Scenario {
    waypoints: Vec<Point2D>,
    #[serde(default)]
    hulls: Vec<Hull>,
    #[serde(default = "default_vehicle_length")]
    vehicle_length: f64,
    #[serde(default)]
    planner: LocalPlannerConfig,
}

fn default_vehicle_length() -> f64 {
    DEFAULT_VEHICLE_LENGTH
}

fn load_scenario(path: Option<String>) -> RoboticsResult<Scenario> {
    let text = match path {
        Some(path) => {
            info!("Loading scenario {}", path);
            read_to_string(path)?
        }
        None => DEFAULT_SCENARIO.to_string(),
    };
    let scenario: Scenario = toml::from_str(&text)?;
    scenario.planner.validate()?;
    Ok(scenario)
}

fn run() -> RoboticsResult<()> {
    let scenario = load_scenario(std::env::args().nth(1))?;
    let global_path = Path2D::from_points(scenario.waypoints);
    let hulls = scenario.hulls;

    let mut planner = LocalPlanner::with_vehicle_length(
        global_path.clone(),
        hulls.clone(),
        scenario.vehicle_length,
        scenario.planner,
    )?;
    let poses = planner.plan()?;

    println!("Refined {} waypoints into {} poses", global_path.len(), poses.len());
    println!("Path length: {:.2} m", Path2D::from_poses(&poses).total_length());
    if let Some(last) = poses.last() {
        println!("Final pose: {}", last);
    }

    if SHOW_ANIMATION {
        let mut vis = plot_route(&hulls, planner.global_path(), &poses, "Ackermann Local Planner");
        create_dir_all("img")?;
        let output_path = "img/local_planner_result.png";
        match vis.save_png(output_path, 800, 600) {
            Ok(()) => println!("Plot saved to: {}", output_path),
            Err(e) => error!("Failed to save PNG: {}", e),
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Local planner start!!");
    if let Err(e) = run() {
        error!("Planning failed: {}", e);
        std::process::exit(1);
    }
    println!("Local planner finish!!");
}
