//! Launch outcome models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use ts_rs::TS;
use uuid::Uuid;

/// Summary of a launch handed back to the front end.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct LaunchReport {
    /// Unique identifier for this launch.
    #[ts(type = "string")]
    pub id: Uuid,

    /// When the pipeline started.
    #[ts(type = "string")]
    pub started_at: DateTime<Utc>,

    /// Name of the launched DPU.
    pub dpu_name: String,

    /// Absolute path of the generated `application.conf`.
    #[ts(type = "string")]
    pub config_path: PathBuf,

    /// False when writing the configuration failed. The launch still went
    /// ahead; the launched process reports the missing file itself.
    pub config_written: bool,

    /// Augmented VM argument string passed to the launcher.
    pub vm_arguments: String,
}
