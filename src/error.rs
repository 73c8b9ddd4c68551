use axum::http::StatusCode;

/// Failures raised by the validation-to-dispatch pipeline before the
/// dispatch stage. The orchestrator folds these into the operation result;
/// they never cross the service boundary as errors.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    /// The raw payload is not a keyed structure, or a required scalar
    /// field is empty after mapping.
    #[error("{0}")]
    InvalidPayload(String),

    #[error("Seller {0} not found")]
    SellerNotFound(i64),

    #[error("Invalid notificationType: {0}")]
    InvalidNotificationType(i64),

    #[error("Client {0} not found")]
    ClientNotFound(i64),

    #[error("Client {0} is not a customer")]
    InvalidClientType(i64),

    #[error("Client {client_id} does not belong to reseller {reseller_id}")]
    ClientSellerMismatch { client_id: i64, reseller_id: i64 },

    #[error("Creator {0} not found")]
    CreatorNotFound(i64),

    #[error("Expert {0} not found")]
    ExpertNotFound(i64),

    #[error("Differences are required for a status-change notification")]
    MissingDifference,

    #[error("Notify template data ({0}) is empty")]
    EmptyTemplateField(&'static str),

    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl OperationError {
    /// Request-validation failures are the caller's fault; an incomplete
    /// template or a collaborator failure is ours.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyTemplateField(_) | Self::External(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
