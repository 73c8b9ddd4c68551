use crate::models::{contractor::ResolvedContractors, request::OperationRequest};

/// The fully resolved unit handed to the template and dispatch stages.
/// Built once per invocation and not mutated afterwards.
#[derive(Debug, Clone)]
pub struct OperationContext {
    pub request: OperationRequest,
    pub contractors: ResolvedContractors,
    pub differences: String,
}
