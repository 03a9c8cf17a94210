// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON extractor whose rejections use the API error envelope.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// Like [`axum::Json`], but malformed bodies become a 400 envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
