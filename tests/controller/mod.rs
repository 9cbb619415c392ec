//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the response status and JSON body
//! are checked.

mod bot;
mod war;

use axum::{body::to_bytes, response::Response};
use bastion_test_utils::prelude::*;
use serde_json::Value;

use crate::util::TestContextExt;

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
