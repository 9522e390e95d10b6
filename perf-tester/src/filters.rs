use crate::filters_common;
use bytes::Bytes;
use http::StatusCode;
use log::{info, trace};
use perf_tester_http::{GenericError, TestParameters};
use std::convert::Infallible;
use warp::{Filter, Reply};

pub fn get_routes() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let test_req = test_req();
    let liveness = liveness();
    test_req.or(liveness)
}

/// Liveness probe, any method on `/`.
///
/// Only the exact root path answers; other unmatched paths 404 instead of
/// being swallowed by a catch-all.
pub fn liveness() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path::end().map(|| StatusCode::OK)
}

pub fn test_req() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path("test").and(warp::path::end()))
        .and(warp::body::content_length_limit(1024 * 1024))
        .and(warp::body::bytes())
        .and_then(|body: Bytes| async move { execute(body).await })
}

/// Decoded by hand rather than with `warp::body::json` so a bad body comes
/// back as a plain-text 400 embedding the decode error.
pub async fn execute(body: Bytes) -> Result<impl Reply, Infallible> {
    info!("test execution request received");
    let params = match serde_json::from_slice::<TestParameters>(&body) {
        Ok(params) => params,
        Err(e) => {
            let err = GenericError::from_error(400, e);
            trace!("resp: execute: {:?}", &err);
            return Ok(filters_common::error_response(err));
        }
    };
    trace!("req: execute: {:?}", &params);

    info!("executing test");
    match perf_tester::executor::run_test(params).await {
        Ok(results) => {
            info!("test finished");
            Ok(filters_common::result_response(results))
        }
        Err(e) => {
            trace!("resp: execute: {:?}", &e);
            Ok(filters_common::error_response(e))
        }
    }
}
