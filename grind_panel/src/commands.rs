use std::str::FromStr;

use clap::{Parser, Subcommand};
use motor_control::{Axis, CommandOutcome, MotorControlClient, SurfaceGrinderCutParams};
use tracing::{info, warn};

use crate::config::PanelConfig;

#[derive(Debug, Parser)]
#[command(name = "grind_panel", about = "Control panel for the surface grinder backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: PanelCommand,
}

#[derive(Debug, Subcommand)]
pub enum PanelCommand {
    /// Move an axis by a relative distance.
    Move {
        #[arg(long, value_parser = parse_axis)]
        axis: Axis,
        /// Distance in inches; one configured jog step when omitted.
        #[arg(long, allow_negative_numbers = true)]
        distance: Option<f64>,
        /// Speed in inches per second; backend default when omitted.
        #[arg(long)]
        speed: Option<f64>,
    },
    /// Switch spindle power on or off.
    Spindle {
        #[arg(value_parser = parse_switch, action = clap::ArgAction::Set)]
        power: bool,
    },
    /// Start a multi-pass surface grinder cut.
    Cut {
        /// Z depth of each pass, in inches.
        #[arg(long)]
        depth_of_cut: f64,
        /// Y feed between passes, in inches.
        #[arg(long)]
        feed_per_pass: f64,
        /// Stroke speed in inches per second.
        #[arg(long)]
        stroke_speed: f64,
        #[arg(long)]
        total_depth: f64,
    },
    /// Stop all movement.
    Stop,
    /// Start the homing sequence.
    Home,
}

fn parse_axis(s: &str) -> Result<Axis, String> {
    Axis::from_str(s)
}

fn parse_switch(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("Expected 'on' or 'off', got '{}'", other)),
    }
}

/// Jog distance and speed for a `move` subcommand.
///
/// An explicit distance is sent as-is, with a speed only when one was given.
/// With no distance the move is an implicit jog: one configured step at the
/// configured jog speed.
fn move_parameters(
    config: &PanelConfig,
    distance: Option<f64>,
    speed: Option<f64>,
) -> (f64, Option<f64>) {
    match distance {
        Some(distance) => (distance, speed),
        None => (config.step_size, Some(speed.unwrap_or(config.jog_speed))),
    }
}

/// Dispatch one command and report its outcome. Each subcommand maps to
/// exactly one client operation.
pub async fn run(client: &MotorControlClient, config: &PanelConfig, command: PanelCommand) {
    let outcome = match command {
        PanelCommand::Move {
            axis,
            distance,
            speed,
        } => {
            let (distance, speed) = move_parameters(config, distance, speed);
            match speed {
                Some(speed) => client.move_axis_rel_at_speed(axis, distance, speed).await,
                None => client.move_axis_rel(axis, distance).await,
            }
        }
        PanelCommand::Spindle { power } => client.set_spindle_power(power).await,
        PanelCommand::Cut {
            depth_of_cut,
            feed_per_pass,
            stroke_speed,
            total_depth,
        } => {
            let params = SurfaceGrinderCutParams {
                depth_of_cut,
                feed_per_pass,
                stroke_speed,
                total_depth,
            };
            client.start_surface_grinder_cut(&params).await
        }
        PanelCommand::Stop => client.stop().await,
        PanelCommand::Home => client.start_homing().await,
    };

    match outcome {
        CommandOutcome::Completed(_) => info!("command acknowledged"),
        CommandOutcome::Failed => warn!("command was not acknowledged"),
    }
}
