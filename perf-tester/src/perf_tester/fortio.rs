//! Translates [`TestParameters`] into the argument vector for a Fortio-style
//! load generator.

use perf_tester_http::{GenericError, TestParameters};
use url::Url;

/// Builds the ordered `load` subcommand arguments. The generator is told to
/// write its JSON report to `result_file`; the caller picks that name.
///
/// A non-empty literal `payload` wins over `payloadSizeKB`. Numeric fields are
/// passed through as-is, the generator decides what zero or negative values
/// mean.
pub fn build_load_args(
    params: &TestParameters,
    result_file: &str,
) -> Result<Vec<String>, GenericError> {
    let mut args = if !params.payload.is_empty() {
        vec![
            "load".to_string(),
            "-json".to_string(),
            result_file.to_string(),
            "-content-type".to_string(),
            "application/json".to_string(),
            "-qps".to_string(),
            params.qps.to_string(),
            "-c".to_string(),
            params.client_connections.to_string(),
            "-t".to_string(),
            params.test_duration.clone(),
            "-payload".to_string(),
            params.payload.clone(),
        ]
    } else {
        vec![
            "load".to_string(),
            "-json".to_string(),
            result_file.to_string(),
            "-qps".to_string(),
            params.qps.to_string(),
            "-c".to_string(),
            params.client_connections.to_string(),
            "-t".to_string(),
            params.test_duration.clone(),
            "-payload-size".to_string(),
            params.payload_size_kb.to_string(),
        ]
    };

    if params.std_client {
        args.push("-stdclient".to_string());
    }

    let mut endpoint = params.target_endpoint.clone();
    if params.target_endpoint.contains("/grpc") {
        args.push("-grpc".to_string());
        // dapr parameters only apply on top of grpc mode
        if params.target_endpoint.contains("/dapr") {
            let (host, dapr_params) = parse_dapr_parameters(&params.target_endpoint)?;
            args.push("-dapr".to_string());
            args.push(dapr_params);
            endpoint = host;
        }
    }

    args.push(endpoint);
    Ok(args)
}

/// Splits a dapr-annotated endpoint into its authority (`host[:port]`) and the
/// query string with `&` separators replaced by `,`, the shape the generator's
/// `-dapr` flag expects.
///
/// A malformed endpoint is a request error, not a silent empty result.
///
/// Scheme-less endpoints keep whatever port they carry. For a scheme-full
/// endpoint the url crate normalizes away the scheme's default port, so
/// `http://host:80/grpc/dapr` yields `host`, not `host:80`.
pub fn parse_dapr_parameters(endpoint: &str) -> Result<(String, String), GenericError> {
    // Endpoints usually arrive scheme-less ("host:1234/grpc/dapr?k=v"); the
    // url crate would treat those as opaque and lose the authority, so prefix
    // a placeholder scheme before parsing.
    let with_scheme;
    let target = if endpoint.contains("://") {
        endpoint
    } else {
        with_scheme = format!("endpoint://{}", endpoint);
        &with_scheme
    };
    let url = Url::parse(target).map_err(|e| {
        GenericError::new(&format!("invalid target endpoint {}: {}", endpoint, e), 400)
    })?;
    let host = url.host_str().ok_or_else(|| {
        GenericError::new(&format!("target endpoint {} has no host", endpoint), 400)
    })?;
    let host = match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    let dapr_params = url.query().unwrap_or("").replace('&', ",");
    Ok((host, dapr_params))
}
