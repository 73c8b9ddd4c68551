use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::{
    models::{
        context::OperationContext,
        event::{GOODS_RETURN_EVENT, NotificationEvent},
        messaging::EmailMessage,
        request::{NotificationKind, OperationRequest},
        result::{DispatchResult, MessengerOutcome},
        template::NotifyTemplateData,
    },
    operation::OperationClients,
};

const EMPLOYEE_EMAIL_SUBJECT: &str = "complaintEmployeeEmailSubject";
const EMPLOYEE_EMAIL_BODY: &str = "complaintEmployeeEmailBody";
const CLIENT_EMAIL_SUBJECT: &str = "complaintClientEmailSubject";
const CLIENT_EMAIL_BODY: &str = "complaintClientEmailBody";

/// Runs the three channels and aggregates their outcomes. Never fails:
/// every channel degrades to its default outcome on error. The channels
/// are mutually independent, so they run concurrently.
pub async fn dispatch(
    context: &OperationContext,
    template_data: &NotifyTemplateData,
    email_from: &str,
    clients: &OperationClients,
) -> DispatchResult {
    let (employee_email, client_email, client_sms) = tokio::join!(
        notify_employees(context, template_data, email_from, clients),
        notify_client_by_email(context, template_data, email_from, clients),
        notify_client_by_messenger(context, template_data, clients),
    );

    DispatchResult {
        notification_employee_by_email: employee_email,
        notification_client_by_email: client_email,
        notification_client_by_sms: client_sms,
    }
}

/// The client channels only fire for a status change that actually reports
/// a target status.
pub fn can_notify_client(request: &OperationRequest) -> bool {
    request
        .kind()
        .is_ok_and(|kind| kind == NotificationKind::Change)
        && request.differences.as_ref().is_some_and(|d| d.to != 0)
}

/// Broadcasts one email per permitted employee. Missing sender address or
/// an empty recipient list is a non-event, not an error. The channel
/// reports the attempt: per-recipient send failures are logged but do not
/// change the outcome.
pub async fn notify_employees(
    context: &OperationContext,
    template_data: &NotifyTemplateData,
    email_from: &str,
    clients: &OperationClients,
) -> bool {
    if email_from.is_empty() {
        return false;
    }

    let reseller_id = context.request.reseller_id;

    let emails = match clients
        .directory
        .get_emails_by_permit(reseller_id, GOODS_RETURN_EVENT)
        .await
    {
        Ok(emails) => emails,
        Err(e) => {
            warn!(reseller_id, error = %e, "Employee recipient lookup failed");
            return false;
        }
    };

    if emails.is_empty() {
        debug!(reseller_id, "No permitted employee recipients");
        return false;
    }

    let substitutions = template_data.substitutions();

    let subject = match clients
        .localization
        .localize(EMPLOYEE_EMAIL_SUBJECT, Some(&substitutions), reseller_id)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!(reseller_id, error = %e, "Employee email subject rendering failed");
            return false;
        }
    };
    let body = match clients
        .localization
        .localize(EMPLOYEE_EMAIL_BODY, Some(&substitutions), reseller_id)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!(reseller_id, error = %e, "Employee email body rendering failed");
            return false;
        }
    };

    let recipient_count = emails.len();

    let sends = emails.into_iter().map(|email_to| {
        let message = EmailMessage {
            email_from: email_from.to_string(),
            email_to,
            subject: subject.clone(),
            message: body.clone(),
        };

        async move {
            if let Err(e) = clients
                .messages
                .send_message(
                    std::slice::from_ref(&message),
                    reseller_id,
                    NotificationEvent::ChangeReturnStatus,
                    None,
                    None,
                )
                .await
            {
                warn!(
                    reseller_id,
                    email_to = %message.email_to,
                    error = %e,
                    "Employee email send failed"
                );
            }
        }
    });

    join_all(sends).await;

    debug!(reseller_id, recipient_count, "Employee broadcast attempted");

    true
}

/// One email to the client, gated by the change predicate plus sender and
/// recipient addresses. True only when the gateway accepted the send.
pub async fn notify_client_by_email(
    context: &OperationContext,
    template_data: &NotifyTemplateData,
    email_from: &str,
    clients: &OperationClients,
) -> bool {
    if !can_notify_client(&context.request) {
        return false;
    }

    let client = &context.contractors.client;

    let Some(email_to) = client.email.as_deref().filter(|email| !email.is_empty()) else {
        return false;
    };
    if email_from.is_empty() {
        return false;
    }

    let reseller_id = context.request.reseller_id;
    let status_to = context.request.differences.as_ref().map(|d| d.to);
    let substitutions = template_data.substitutions();

    let subject = match clients
        .localization
        .localize(CLIENT_EMAIL_SUBJECT, Some(&substitutions), reseller_id)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!(reseller_id, error = %e, "Client email subject rendering failed");
            return false;
        }
    };
    let body = match clients
        .localization
        .localize(CLIENT_EMAIL_BODY, Some(&substitutions), reseller_id)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!(reseller_id, error = %e, "Client email body rendering failed");
            return false;
        }
    };

    let message = EmailMessage {
        email_from: email_from.to_string(),
        email_to: email_to.to_string(),
        subject,
        message: body,
    };

    match clients
        .messages
        .send_message(
            std::slice::from_ref(&message),
            reseller_id,
            NotificationEvent::ChangeReturnStatus,
            Some(client.id),
            status_to,
        )
        .await
    {
        Ok(()) => {
            debug!(reseller_id, client_id = client.id, "Client email sent");
            true
        }
        Err(e) => {
            warn!(reseller_id, client_id = client.id, error = %e, "Client email send failed");
            false
        }
    }
}

/// One messenger notification to the client. Sent iff the gateway reports
/// success with no error; whatever error text comes back is appended to
/// the outcome message on its own line.
pub async fn notify_client_by_messenger(
    context: &OperationContext,
    template_data: &NotifyTemplateData,
    clients: &OperationClients,
) -> MessengerOutcome {
    let mut outcome = MessengerOutcome::default();

    if !can_notify_client(&context.request) {
        return outcome;
    }

    let client = &context.contractors.client;

    if client.mobile.as_deref().is_none_or(str::is_empty) {
        return outcome;
    }

    let reseller_id = context.request.reseller_id;
    let status_to = context
        .request
        .differences
        .as_ref()
        .map(|d| d.to)
        .unwrap_or_default();

    match clients
        .messenger
        .send(reseller_id, client.id, status_to, template_data)
        .await
    {
        Ok(response) => {
            outcome.is_sent = response.success && response.error.is_empty();
            outcome.message.push_str(&response.error);
        }
        Err(e) => {
            warn!(reseller_id, client_id = client.id, error = %e, "Client messenger send failed");
            outcome.message.push_str(&e.to_string());
        }
    }

    outcome.message.push('\n');
    outcome
}
