use tracing::debug;

use crate::{
    clients::directory::DirectoryClient,
    error::OperationError,
    models::{context::OperationContext, template::NotifyTemplateData},
};

/// Assembles the notification template data and the reseller's sender
/// address. Emptiness is validated on the raw values, then markup is
/// stripped from every string field.
pub async fn build(
    context: &OperationContext,
    directory: &DirectoryClient,
) -> Result<(NotifyTemplateData, String), OperationError> {
    let request = &context.request;
    let contractors = &context.contractors;

    let mut data = NotifyTemplateData {
        complaint_id: request.complaint_id,
        complaint_number: request.complaint_number.clone(),
        creator_id: request.creator_id,
        creator_name: contractors.creator.full_name.clone().unwrap_or_default(),
        expert_id: request.expert_id,
        expert_name: contractors.expert.full_name.clone().unwrap_or_default(),
        client_id: request.client_id,
        client_name: contractors.client.display_name().to_string(),
        consumption_id: request.consumption_id,
        consumption_number: request.consumption_number.clone(),
        agreement_number: request.agreement_number.clone(),
        date: request.date.clone(),
        differences: context.differences.clone(),
    };

    data.validate()?;
    data.strip_markup();

    let email_from = directory.get_reseller_email_from(request.reseller_id).await?;

    debug!(
        reseller_id = request.reseller_id,
        email_from = %email_from,
        "Template data assembled"
    );

    Ok((data, email_from))
}
