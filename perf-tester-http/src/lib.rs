//! Request model and common types for the perf-tester HTTP endpoint.

use anyhow::Error as AnyError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::io::Error as StdIoError;
use std::{env, fmt};

/// The harness always listens here; the port is part of the test topology and
/// deliberately not configurable.
pub const HTTP_PORT: u16 = 3001;

pub const ENV_NAME_LOAD_GENERATOR_BIN: &str = "LOAD_GENERATOR_BIN";
pub const DEFAULT_LOAD_GENERATOR_BIN: &str = "fortio";

/// Name of the load generator executable, resolved via `PATH` at spawn time.
pub fn load_generator_bin() -> String {
    env::var(ENV_NAME_LOAD_GENERATOR_BIN)
        .unwrap_or_else(|_| DEFAULT_LOAD_GENERATOR_BIN.to_string())
}

/// Describes a single load test run.
///
/// Fields missing from the request body decode to their defaults; only a
/// malformed body is rejected.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TestParameters {
    pub qps: i64,
    pub client_connections: i64,
    pub target_endpoint: String,
    pub test_duration: String,
    #[serde(rename = "payloadSizeKB")]
    pub payload_size_kb: i64,
    pub payload: String,
    pub std_client: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenericError {
    pub error_code: u16,
    pub message: String,
    #[serde(flatten)]
    pub data: HashMap<String, String>,
}

impl GenericError {
    pub fn internal_500(msg: &str) -> GenericError {
        GenericError {
            error_code: 500,
            message: msg.to_string(),
            ..Default::default()
        }
    }

    pub fn new(msg: &str, code: u16) -> Self {
        Self {
            error_code: code,
            message: msg.to_string(),
            ..Default::default()
        }
    }

    pub fn from_error<E: StdError>(code: u16, err: E) -> GenericError {
        Self::new(&err.to_string(), code)
    }
}

macro_rules! from_error {
    ($t:ty) => {
        impl From<$t> for GenericError {
            fn from(e: $t) -> Self {
                GenericError {
                    error_code: 500,
                    message: e.to_string(),
                    ..Default::default()
                }
            }
        }
    };
}

from_error!(AnyError);
from_error!(serde_json::Error);
from_error!(StdIoError);

impl Default for GenericError {
    fn default() -> Self {
        GenericError {
            error_code: u16::MAX,
            message: String::new(),
            data: HashMap::new(),
        }
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.error_code,
            self.message,
            self.data.len()
        )
    }
}

impl StdError for GenericError {}
