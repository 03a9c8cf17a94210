// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/contact` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use courier_booking::input::parse_contact_status;
use courier_booking::NewContact;
use courier_core::{ContactMessage, CourierError};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::server::GatewayState;

#[derive(Debug, Serialize)]
pub struct ContactSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub success: bool,
    pub message: &'static str,
    pub contact: ContactSummary,
}

#[derive(Debug, Serialize)]
pub struct ContactList {
    pub success: bool,
    pub count: usize,
    pub contacts: Vec<ContactMessage>,
}

#[derive(Debug, Serialize)]
pub struct ContactDetail {
    pub success: bool,
    pub contact: ContactMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactUpdated {
    pub success: bool,
    pub message: &'static str,
    pub contact: ContactMessage,
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<NewContact>,
) -> Result<(StatusCode, Json<ContactCreated>), ApiError> {
    let contact = state
        .contacts
        .submit(body)
        .await
        .map_err(ApiError::during("Error sending message"))?;
    Ok((
        StatusCode::CREATED,
        Json(ContactCreated {
            success: true,
            message: "Message sent successfully",
            contact: ContactSummary {
                id: contact.id,
                name: contact.name,
                email: contact.email,
            },
        }),
    ))
}

/// GET /contact
pub async fn list_contacts(
    State(state): State<GatewayState>,
) -> Result<Json<ContactList>, ApiError> {
    let contacts = state
        .contacts
        .list()
        .await
        .map_err(ApiError::during("Error fetching contacts"))?;
    Ok(Json(ContactList {
        success: true,
        count: contacts.len(),
        contacts,
    }))
}

/// GET /contact/{id}
pub async fn get_contact(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<ContactDetail>, ApiError> {
    let contact = state
        .contacts
        .get(&id)
        .await
        .map_err(ApiError::during("Error fetching contact"))?;
    Ok(Json(ContactDetail {
        success: true,
        contact,
    }))
}

/// PUT /contact/{id}/status
pub async fn update_contact_status(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<ContactStatusRequest>,
) -> Result<Json<ContactUpdated>, ApiError> {
    const ACTION: &str = "Error updating status";

    let raw = body.status.ok_or_else(|| {
        ApiError::new(CourierError::validation(vec!["status".to_string()]), ACTION)
    })?;
    let status = parse_contact_status(&raw).map_err(ApiError::during(ACTION))?;
    let contact = state
        .contacts
        .update_status(&id, status)
        .await
        .map_err(ApiError::during(ACTION))?;
    Ok(Json(ContactUpdated {
        success: true,
        message: "Status updated successfully",
        contact,
    }))
}
