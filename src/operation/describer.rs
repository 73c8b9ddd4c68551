use std::collections::HashMap;

use crate::{
    clients::{directory::DirectoryClient, localization::LocalizationClient},
    error::OperationError,
    models::request::{NotificationKind, OperationRequest},
};

const NEW_POSITION_ADDED: &str = "NewPositionAdded";
const POSITION_STATUS_CHANGED: &str = "PositionStatusHasChanged";

/// Turns the reported event into a localized human-readable description.
/// A "new" event renders a fixed message; a status change resolves both
/// status codes to display names and substitutes FROM/TO.
pub async fn describe(
    request: &OperationRequest,
    directory: &DirectoryClient,
    localization: &LocalizationClient,
) -> Result<String, OperationError> {
    if request.notification_type == NotificationKind::NEW_CODE {
        let description = localization
            .localize(NEW_POSITION_ADDED, None, request.reseller_id)
            .await?;
        return Ok(description);
    }

    let Some(difference) = &request.differences else {
        return Err(OperationError::MissingDifference);
    };

    // Non-new, so anything but a known change code is rejected here.
    request.kind()?;

    let from_name = directory.get_status_name(difference.from).await?;
    let to_name = directory.get_status_name(difference.to).await?;

    let substitutions = HashMap::from([
        ("FROM".to_string(), from_name),
        ("TO".to_string(), to_name),
    ]);

    let description = localization
        .localize(POSITION_STATUS_CHANGED, Some(&substitutions), request.reseller_id)
        .await?;

    Ok(description)
}
