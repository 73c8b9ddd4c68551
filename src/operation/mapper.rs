use serde_json::Value;
use tracing::debug;

use crate::{
    error::OperationError,
    models::{context::OperationContext, request::OperationRequest},
    operation::{OperationClients, describer, resolver},
};

/// Maps the untyped payload into a typed request, validates it, and
/// orchestrates entity resolution and difference description into a fully
/// resolved operation context.
pub async fn map(
    payload: &Value,
    clients: &OperationClients,
) -> Result<OperationContext, OperationError> {
    let request = OperationRequest::from_raw(payload)?;

    validate_reseller(&request, clients).await?;
    validate_notification_type(&request)?;

    debug!(
        reseller_id = request.reseller_id,
        notification_type = request.notification_type,
        complaint_id = request.complaint_id,
        "Request mapped and validated"
    );

    let contractors = resolver::resolve_contractors(&request, &clients.directory).await?;
    let differences =
        describer::describe(&request, &clients.directory, &clients.localization).await?;

    Ok(OperationContext {
        request,
        contractors,
        differences,
    })
}

async fn validate_reseller(
    request: &OperationRequest,
    clients: &OperationClients,
) -> Result<(), OperationError> {
    if request.reseller_id == 0 {
        return Err(OperationError::InvalidPayload("Empty resellerId".to_string()));
    }

    match clients.directory.get_seller(request.reseller_id).await? {
        Some(_) => Ok(()),
        None => Err(OperationError::SellerNotFound(request.reseller_id)),
    }
}

fn validate_notification_type(request: &OperationRequest) -> Result<(), OperationError> {
    // Only emptiness is checked here; an unknown code is rejected by the
    // describer, after the differences themselves have been validated.
    if request.notification_type == 0 {
        return Err(OperationError::InvalidNotificationType(0));
    }
    Ok(())
}
