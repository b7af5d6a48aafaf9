use actix_web::{http::StatusCode, HttpResponse};
use tracing::error;

use crate::modules::admin::application::{
    domain::draft::DraftError, ports::incoming::use_cases::DraftWorkspaceError,
};
use crate::shared::api::ApiResponse;

pub(super) fn draft_error_response(err: &DraftWorkspaceError) -> HttpResponse {
    let message = err.to_string();
    match err {
        DraftWorkspaceError::Draft(DraftError::Path(_)) => {
            ApiResponse::unprocessable("INVALID_PATH", &message)
        }
        DraftWorkspaceError::Draft(DraftError::InvalidValue(_)) => {
            ApiResponse::unprocessable("INVALID_VALUE", &message)
        }
        DraftWorkspaceError::Draft(DraftError::UnknownCollection(_)) => {
            ApiResponse::not_found("UNKNOWN_COLLECTION", &message)
        }
        DraftWorkspaceError::Draft(DraftError::UnknownService(_)) => {
            ApiResponse::not_found("UNKNOWN_SERVICE", &message)
        }
        DraftWorkspaceError::Draft(DraftError::NotAnItemList(_)) => {
            ApiResponse::unprocessable("NOT_AN_ITEM_LIST", &message)
        }
        DraftWorkspaceError::Draft(DraftError::ItemIndexOutOfRange { .. }) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", &message)
        }
        DraftWorkspaceError::NoOpenDraft => {
            ApiResponse::error(StatusCode::CONFLICT, "NO_OPEN_DRAFT", &message)
        }
        DraftWorkspaceError::Commit(e) => {
            error!(error = %e, "Draft commit failed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "LOCAL_WRITE_FAILED",
                &message,
            )
        }
    }
}
