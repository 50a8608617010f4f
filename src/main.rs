// Indoor Wayfinder - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/wayfinder --floor 3 --room R305
// ```
//
// Or against an authoritative grid file:
//
// ```console
// $ ./target/release/wayfinder --floor 3 --room 5 --grid-file floors.json --verbose
// ```

use clap::Parser;
use std::process;
use tracing::{error, info, warn};
use wayfinder::error::WayfinderResult;
use wayfinder::grid::FloorGrid;
use wayfinder::logging::LoggingConfig;
use wayfinder::routing::{assemble, nearest_route_anchor, RouteError};
use wayfinder::source::{GridFileSource, GridSource, SynthesizedSource};
use wayfinder::types::{CliArgs, OutputFormat, WayfinderConfig};
use wayfinder::{directory, render};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match WayfinderConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::init_quiet()
    };
    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    // Load configuration from CLI arguments and optional config file
    let config = match WayfinderConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }
    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no route will be computed.");
        print_configuration_summary(&config);
        return;
    }

    if args.list_floors {
        for floor in directory::floor_numbers(config.floors) {
            println!("Floor {}", floor);
        }
        return;
    }

    if let Err(e) = run(&args, &config) {
        error!("Wayfinding failed: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Resolve the floor, build its grid, and route to the requested room
fn run(args: &CliArgs, config: &WayfinderConfig) -> WayfinderResult<()> {
    let Some(floor) = args.floor else {
        eprintln!("Select a floor with --floor (use --list-floors to see them).");
        process::exit(2);
    };
    if floor == 0 || floor > config.floors {
        eprintln!("Floor {} is outside the building (1..={}).", floor, config.floors);
        process::exit(2);
    }

    let grid = resolve_floor_grid(config, floor);

    let Some(room_input) = &args.room else {
        print_room_directory(&grid, floor, config);
        return Ok(());
    };
    if args.list_rooms {
        print_room_directory(&grid, floor, config);
    }

    let Some(room) = directory::normalize_room_query(room_input, floor) else {
        eprintln!("'{}' is not a valid room (try R{}05 or just 5).", room_input, floor);
        process::exit(2);
    };
    let destination = grid
        .find_room(room)
        .ok_or(RouteError::UnknownDestination(room))?;

    let route = match nearest_route_anchor(&grid, destination) {
        Ok(route) => route,
        Err(e @ RouteError::FacilityNotFound { .. }) => {
            // Expected outcome on a degenerate grid; surface it, don't crash.
            eprintln!("No route found: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    info!(floor, room = %room, steps = route.steps(), "route computed");

    let labeled = assemble(route, &grid);
    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&labeled)?),
        OutputFormat::Text => {
            println!("Floor {} - route to {} ({} steps)", floor, room, labeled.steps());
            println!();
            print!("{}", render::render_grid(&grid, Some(&labeled.path)));
            println!();
            print!("{}", render::render_steps(&labeled));
        }
    }
    Ok(())
}

/// Build the grid for a floor: authoritative file first, local synthesis
/// as the deterministic fallback
fn resolve_floor_grid(config: &WayfinderConfig, floor: u32) -> FloorGrid {
    if let Some(path) = &config.grid_file {
        match GridFileSource::new(path).floor_grid(floor) {
            Ok(grid) => match grid.validate() {
                Ok(()) => {
                    info!(floor, path = %path, "using authoritative floor grid");
                    return grid;
                }
                Err(e) => warn!(floor, path = %path, "grid file failed validation: {}", e),
            },
            Err(e) => warn!(floor, path = %path, "grid file unavailable: {}", e),
        }
        eprintln!("Grid file unusable for floor {}; synthesizing locally.", floor);
    }
    SynthesizedSource::new(config).synthesize(floor)
}

/// Print the rooms available on a floor
fn print_room_directory(grid: &FloorGrid, floor: u32, config: &WayfinderConfig) {
    let mut rooms = directory::rooms_in(grid);
    if rooms.is_empty() {
        // Fall back to the synthetic directory when the grid carries none.
        rooms = directory::room_directory(floor, config.rooms_per_floor);
    }
    for room in rooms {
        println!("{}", room);
    }
}

/// Print configuration summary
fn print_configuration_summary(config: &WayfinderConfig) {
    eprintln!("Configuration:");
    eprintln!("  Floors: {}", config.floors);
    eprintln!("  Rooms per Floor: {}", config.rooms_per_floor);
    eprintln!("  Layout: {}", config.layout);
    match &config.grid_file {
        Some(path) => eprintln!("  Grid File: {}", path),
        None => eprintln!("  Grid File: (local synthesis)"),
    }
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!();
}
