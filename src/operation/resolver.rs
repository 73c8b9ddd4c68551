use crate::{
    clients::directory::DirectoryClient,
    error::OperationError,
    models::{
        contractor::{Contractor, ContractorType, ResolvedContractors},
        request::OperationRequest,
    },
};

pub async fn resolve_contractors(
    request: &OperationRequest,
    directory: &DirectoryClient,
) -> Result<ResolvedContractors, OperationError> {
    let client = resolve_client(request.client_id, request.reseller_id, directory).await?;
    let creator = resolve_creator(request.creator_id, directory).await?;
    let expert = resolve_expert(request.expert_id, directory).await?;

    Ok(ResolvedContractors {
        client,
        creator,
        expert,
    })
}

/// The client must exist, be a customer, and belong to the requesting
/// reseller. The ownership check is tenant isolation, not a null check.
pub async fn resolve_client(
    client_id: i64,
    reseller_id: i64,
    directory: &DirectoryClient,
) -> Result<Contractor, OperationError> {
    let client = directory
        .get_contractor(client_id)
        .await?
        .ok_or(OperationError::ClientNotFound(client_id))?;

    if client.contractor_type != ContractorType::Customer {
        return Err(OperationError::InvalidClientType(client_id));
    }
    if client.seller_id != reseller_id {
        return Err(OperationError::ClientSellerMismatch {
            client_id,
            reseller_id,
        });
    }

    Ok(client)
}

pub async fn resolve_creator(
    creator_id: i64,
    directory: &DirectoryClient,
) -> Result<Contractor, OperationError> {
    directory
        .get_employee(creator_id)
        .await?
        .ok_or(OperationError::CreatorNotFound(creator_id))
}

pub async fn resolve_expert(
    expert_id: i64,
    directory: &DirectoryClient,
) -> Result<Contractor, OperationError> {
    directory
        .get_employee(expert_id)
        .await?
        .ok_or(OperationError::ExpertNotFound(expert_id))
}
