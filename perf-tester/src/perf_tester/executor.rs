//! Runs the external load generator and collects its result file.

use crate::fortio;
use log::{info, warn};
use perf_tester_http::{load_generator_bin, GenericError, TestParameters};
use std::process::Stdio;
use tokio::process::Command;
use uuid::Uuid;

/// Executes a single load test: builds the argument vector, spawns the load
/// generator and returns the raw bytes of its JSON report.
///
/// The report file name is unique per request so overlapping test runs can't
/// clobber each other's results. The generator inherits stdout/stderr, its
/// progress output belongs in the harness logs.
pub async fn run_test(params: TestParameters) -> Result<Vec<u8>, GenericError> {
    let result_file = format!("result-{}.json", Uuid::new_v4());
    let args = fortio::build_load_args(&params, &result_file)?;
    let bin = load_generator_bin();
    info!("running test: {} {}", &bin, args.join(" "));

    let status = Command::new(&bin)
        .args(&args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| {
            GenericError::internal_500(&format!("error launching load generator {}: {}", bin, e))
        })?;
    if !status.success() {
        return Err(GenericError::internal_500(&format!(
            "load generator failed: {}",
            status
        )));
    }

    let results = tokio::fs::read(&result_file).await.map_err(|e| {
        GenericError::internal_500(&format!("error reading result file {}: {}", result_file, e))
    })?;
    if let Err(e) = tokio::fs::remove_file(&result_file).await {
        warn!("could not remove result file {}: {}", result_file, e);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perf_tester_http::ENV_NAME_LOAD_GENERATOR_BIN;

    fn params() -> TestParameters {
        TestParameters {
            qps: 10,
            client_connections: 2,
            target_endpoint: "testapp:3000".to_string(),
            test_duration: "1s".to_string(),
            payload_size_kb: 1,
            payload: String::new(),
            std_client: false,
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn launch_failure_is_a_500() {
        std::env::set_var(ENV_NAME_LOAD_GENERATOR_BIN, "no-such-load-generator");
        let err = run_test(params()).await.unwrap_err();
        std::env::remove_var(ENV_NAME_LOAD_GENERATOR_BIN);
        assert_eq!(err.error_code, 500);
        assert!(err.message.contains("error launching load generator"));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn missing_result_file_is_a_500() {
        // "true" exits cleanly without producing a report
        std::env::set_var(ENV_NAME_LOAD_GENERATOR_BIN, "true");
        let err = run_test(params()).await.unwrap_err();
        std::env::remove_var(ENV_NAME_LOAD_GENERATOR_BIN);
        assert_eq!(err.error_code, 500);
        assert!(err.message.contains("error reading result file"));
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn non_zero_exit_is_a_500() {
        std::env::set_var(ENV_NAME_LOAD_GENERATOR_BIN, "false");
        let err = run_test(params()).await.unwrap_err();
        std::env::remove_var(ENV_NAME_LOAD_GENERATOR_BIN);
        assert_eq!(err.error_code, 500);
        assert!(err.message.contains("load generator failed"));
    }

    #[tokio::test]
    async fn builder_errors_propagate_before_spawn() {
        let bad = TestParameters {
            target_endpoint: "http://[:::1]/grpc/dapr?a=1".to_string(),
            ..params()
        };
        let err = run_test(bad).await.unwrap_err();
        assert_eq!(err.error_code, 400);
    }
}
