use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::common::Axis;
use crate::error::CommandError;
use crate::messages::{MoveAxisRelMsg, SurfaceGrinderCutParams};

const MOVE_AXIS_REL_PATH: &str = "api/moveAxisRel";
const SPINDLE_POWER_PATH: &str = "api/spindlePower";
const START_HOMING_PATH: &str = "api/startHoming";
const START_SURFACE_GRINDER_CUT_PATH: &str = "api/startSurfaceGrinderCut";
const STOP_PATH: &str = "api/stop";

/// Result of a dispatched command.
///
/// A dispatch always resolves: failures are logged at the dispatch boundary
/// and surface here only as `Failed`, so a caller can ignore the outcome
/// without unwinding.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum CommandOutcome {
    /// The backend acknowledged the command; the payload carries whatever
    /// body it returned (`Null` when the body was empty or not JSON).
    Completed(Value),
    /// The command did not reach the backend or was rejected. Details are
    /// already in the log.
    Failed,
}

impl CommandOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CommandOutcome::Completed(_))
    }
}

/// Dispatches machine commands to the grinder backend over HTTP.
///
/// Holds one shared [`Client`]; cloning is cheap and clones reuse the same
/// connection pool. Every operation is a single stateless round trip with no
/// ordering guarantee between concurrent dispatches.
#[derive(Clone)]
pub struct MotorControlClient {
    http: Client,
    base_url: String,
}

impl MotorControlClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { http, base_url }
    }

    /// Move `axis` by `distance` inches at the backend's default speed.
    pub async fn move_axis_rel(&self, axis: Axis, distance: f64) -> CommandOutcome {
        let msg = MoveAxisRelMsg::new(axis, distance);

        recover(
            "move_axis_rel",
            self.post_json(MOVE_AXIS_REL_PATH, &msg).await,
        )
    }

    /// Move `axis` by `distance` inches at `speed` inches per second.
    pub async fn move_axis_rel_at_speed(
        &self,
        axis: Axis,
        distance: f64,
        speed: f64,
    ) -> CommandOutcome {
        let msg = MoveAxisRelMsg::new(axis, distance).with_speed(speed);

        recover(
            "move_axis_rel_at_speed",
            self.post_json(MOVE_AXIS_REL_PATH, &msg).await,
        )
    }

    /// Switch spindle power. The wire body is the bare JSON boolean.
    pub async fn set_spindle_power(&self, on: bool) -> CommandOutcome {
        recover(
            "set_spindle_power",
            self.post_json(SPINDLE_POWER_PATH, &on).await,
        )
    }

    pub async fn start_surface_grinder_cut(
        &self,
        params: &SurfaceGrinderCutParams,
    ) -> CommandOutcome {
        recover(
            "start_surface_grinder_cut",
            self.post_json(START_SURFACE_GRINDER_CUT_PATH, params).await,
        )
    }

    /// Stop all movement. Posts an empty body.
    pub async fn stop(&self) -> CommandOutcome {
        recover("stop", self.post_empty(STOP_PATH).await)
    }

    /// Start the homing sequence. Posts an empty body.
    pub async fn start_homing(&self) -> CommandOutcome {
        recover("start_homing", self.post_empty(START_HOMING_PATH).await)
    }

    async fn post_json<B>(&self, path: &'static str, body: &B) -> Result<Value, CommandError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.url_for(path))
            .json(body)
            .send()
            .await
            .map_err(|source| CommandError::Transport { path, source })?;

        read_payload(path, response).await
    }

    async fn post_empty(&self, path: &'static str) -> Result<Value, CommandError> {
        let response = self
            .http
            .post(self.url_for(path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| CommandError::Transport { path, source })?;

        read_payload(path, response).await
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

async fn read_payload(path: &'static str, response: Response) -> Result<Value, CommandError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CommandError::Status { path, status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| CommandError::Transport { path, source })?;

    // The backend's response shape is not part of the contract; anything
    // that is not JSON counts as an empty acknowledgement.
    Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
}

fn recover(operation: &'static str, result: Result<Value, CommandError>) -> CommandOutcome {
    match result {
        Ok(payload) => CommandOutcome::Completed(payload),
        Err(err) => {
            error!(error = %err, "{} failed", operation);
            CommandOutcome::Failed
        }
    }
}
