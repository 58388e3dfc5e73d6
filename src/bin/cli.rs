//! puttlink CLI
//!
//! Command-line interface for poking a course controller.

use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use puttlink::network::Transport;
use puttlink::printer::{format_error_codes, format_response, format_stats, response_json, to_json};
use puttlink::protocol::{
    BallDispensingMode, CourseState, Mode, Response, Settings, GRID_COLS, GRID_ROWS,
    NUM_ACTUATORS,
};
use puttlink::{Config, DeviceClient, DeviceError, Result};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_ECHO_TEXT: &str = "Hello World this is a testing string";

/// puttlink CLI
#[derive(Parser, Debug)]
#[command(name = "puttlink")]
#[command(about = "Talk to a putting-course controller over HTTP")]
#[command(version)]
struct Args {
    /// Device address (host, host:port or http://host)
    #[arg(short, long, env = "PUTTLINK_DEVICE", default_value = puttlink::config::DEFAULT_BASE_ADDRESS)]
    device: String,

    /// Request timeout in milliseconds (0 waits forever)
    #[arg(short, long, default_value_t = puttlink::config::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Print replies as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Echo text through the device
    Echo {
        /// Text to send
        #[arg(default_value = DEFAULT_ECHO_TEXT)]
        text: String,
    },

    /// Fetch the device debug log
    DebugMsg,

    /// Push a course state built from actuator heights
    CourseState {
        /// static, ball-return, wave, tsunami (or 0-3)
        #[arg(short, long, default_value = "static")]
        mode: Mode,

        /// Same height for every actuator
        #[arg(short, long, conflicts_with = "positions")]
        fill: Option<u8>,

        /// 45 comma-separated heights, top row first
        #[arg(short, long)]
        positions: Option<String>,

        /// Send heights as given, without easing the first two rows in
        #[arg(long)]
        max: bool,
    },

    /// Push 46 raw comma-separated course state bytes
    CourseRaw {
        bytes: String,
    },

    /// Reset hit/hole counters
    ResetStats,

    /// Clear the queued motion sequence
    ClearSequence,

    /// Update device settings
    Settings {
        /// manual or automatic
        #[arg(short, long, default_value = "manual")]
        dispensing: BallDispensingMode,
    },

    /// Dispense balls
    Dispense {
        /// Number of balls (0-10)
        count: u8,
    },

    /// List pending error codes
    ErrorCodes,

    /// Read hit/hole counters
    Stats,

    /// Check the device answers at all
    Ping,

    /// Echo then fetch the debug log
    Smoke,

    /// Manual dispensing and a flat static course
    Defaults,

    /// Poll stats and error codes
    Watch {
        /// Delay between polls in milliseconds
        #[arg(short, long, default_value_t = 1000)]
        interval_ms: u64,

        /// Stop after this many polls
        #[arg(short, long)]
        count: Option<u64>,

        /// Also fetch the debug log on every poll
        #[arg(long)]
        debug: bool,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,puttlink=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .base_address(&args.device)
        .timeout_ms(args.timeout_ms)
        .build();

    tracing::info!("puttlink v{} -> {}", puttlink::VERSION, args.device);

    let client = match DeviceClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    // Failures are reported, never turned into an exit code
    if let Err(e) = run(&client, args.command, args.json) {
        println!("{}", e);
    }
}

fn run<T: Transport>(client: &DeviceClient<T>, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Echo { text } => print_response("POST /echo", &client.echo(&text)?, json),
        Commands::DebugMsg => print_response("GET /debug_msg", &client.debug_msg()?, json),
        Commands::CourseState {
            mode,
            fill,
            positions,
            max,
        } => {
            let grid = match positions {
                Some(list) => grid_from_list(&list)?,
                None => [[fill.unwrap_or(0); GRID_COLS]; GRID_ROWS],
            };
            let state = CourseState::from_grid(mode, &grid, !max)?;
            print_response("POST /course_state", &client.course_state(&state)?, json)
        }
        Commands::CourseRaw { bytes } => {
            let bytes = parse_byte_list(&bytes)?;
            print_response("POST /course_state", &client.course_state_raw(&bytes)?, json)
        }
        Commands::ResetStats => print_response("POST /reset_stats", &client.reset_stats()?, json),
        Commands::ClearSequence => {
            print_response("POST /clear_sequence", &client.clear_sequence()?, json)
        }
        Commands::Settings { dispensing } => print_response(
            "POST /settings",
            &client.settings(Settings::new(dispensing))?,
            json,
        ),
        Commands::Dispense { count } => {
            print_response("POST /dispense_ball", &client.dispense_ball(count)?, json)
        }
        Commands::ErrorCodes => {
            let codes = client.error_codes()?;
            if json {
                println!("{}", to_json(&codes)?);
            } else {
                println!("{}", format_error_codes(&codes));
            }
            Ok(())
        }
        Commands::Stats => {
            let stats = client.stats()?;
            if json {
                println!("{}", to_json(&stats)?);
            } else {
                println!("{}", format_stats(&stats));
            }
            Ok(())
        }
        Commands::Ping => {
            let status = client.ping()?;
            println!("Device reachable (HTTP {})", status);
            Ok(())
        }
        Commands::Smoke => {
            // Keep going after a failed echo so the debug log still prints
            match client.echo(DEFAULT_ECHO_TEXT) {
                Ok(response) => print_response("POST /echo", &response, json)?,
                Err(e) => println!("{}", e),
            }
            print_response("GET /debug_msg", &client.debug_msg()?, json)
        }
        Commands::Defaults => {
            print_response(
                "POST /settings",
                &client.settings(Settings::default())?,
                json,
            )?;
            let flat = CourseState::from_grid(Mode::Static, &[[0; GRID_COLS]; GRID_ROWS], true)?;
            print_response("POST /course_state", &client.course_state(&flat)?, json)
        }
        Commands::Watch {
            interval_ms,
            count,
            debug,
        } => watch(client, interval_ms, count, debug, json),
    }
}

fn watch<T: Transport>(
    client: &DeviceClient<T>,
    interval_ms: u64,
    count: Option<u64>,
    debug: bool,
    json: bool,
) -> Result<()> {
    let mut polls = 0u64;
    loop {
        if count.is_some_and(|limit| polls >= limit) {
            return Ok(());
        }
        if polls > 0 {
            thread::sleep(Duration::from_millis(interval_ms));
        }

        match client.stats() {
            Ok(stats) if json => println!("{}", to_json(&stats)?),
            Ok(stats) => println!("{}", format_stats(&stats)),
            Err(e) => println!("{}", e),
        }
        match client.error_codes() {
            Ok(codes) if json => println!("{}", to_json(&codes)?),
            Ok(codes) => println!("{}", format_error_codes(&codes)),
            Err(e) => println!("{}", e),
        }
        if debug {
            match client.debug_msg() {
                Ok(response) => print_response("GET /debug_msg", &response, json)?,
                Err(e) => println!("{}", e),
            }
        }

        polls += 1;
    }
}

fn print_response(label: &str, response: &Response, json: bool) -> Result<()> {
    if json {
        println!("{}", response_json(response)?);
    } else {
        println!("{}", format_response(label, response));
    }
    Ok(())
}

fn parse_byte_list(list: &str) -> Result<Vec<u8>> {
    list.split(',')
        .map(str::trim)
        .map(|item| {
            if item.is_empty() {
                return Err(DeviceError::InvalidPayload(format!(
                    "empty value in byte list {:?}",
                    list
                )));
            }
            item.parse::<u8>().map_err(|_| {
                DeviceError::InvalidPayload(format!("not a byte value: {:?}", item))
            })
        })
        .collect()
}

fn grid_from_list(list: &str) -> Result<[[u8; GRID_COLS]; GRID_ROWS]> {
    let values = parse_byte_list(list)?;
    if values.len() != NUM_ACTUATORS {
        return Err(DeviceError::InvalidPayload(format!(
            "expected {} heights, got {}",
            NUM_ACTUATORS,
            values.len()
        )));
    }

    let mut grid = [[0u8; GRID_COLS]; GRID_ROWS];
    for (row, chunk) in grid.iter_mut().zip(values.chunks(GRID_COLS)) {
        row.copy_from_slice(chunk);
    }
    Ok(grid)
}
