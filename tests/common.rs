#![allow(dead_code)]

use return_notify_service::{
    config::Config,
    models::{
        context::OperationContext,
        contractor::{Contractor, ContractorType, ResolvedContractors},
        request::{OperationRequest, StatusDifference},
        template::NotifyTemplateData,
    },
    operation::OperationClients,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const RESELLER_ID: i64 = 5;
pub const CLIENT_ID: i64 = 21;
pub const CREATOR_ID: i64 = 31;
pub const EXPERT_ID: i64 = 41;

/// One mock server per external collaborator, plus clients wired to them.
pub struct TestBackend {
    pub directory: MockServer,
    pub localization: MockServer,
    pub messages: MockServer,
    pub messenger: MockServer,
    pub clients: OperationClients,
    config: Config,
}

impl TestBackend {
    pub async fn start() -> Self {
        let directory = MockServer::start().await;
        let localization = MockServer::start().await;
        let messages = MockServer::start().await;
        let messenger = MockServer::start().await;

        let config = test_config(
            &directory.uri(),
            &localization.uri(),
            &messages.uri(),
            &messenger.uri(),
        );
        let clients = OperationClients::new(&config).expect("failed to build clients");

        Self {
            directory,
            localization,
            messages,
            messenger,
            clients,
            config,
        }
    }

    pub fn config(&self) -> Config {
        self.config.clone()
    }

    pub async fn mount_seller(&self, id: i64) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/sellers/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": id, "name": format!("Seller {id}") })),
            )
            .mount(&self.directory)
            .await;
    }

    pub async fn mount_contractor(&self, record: Value) {
        let id = record["id"].as_i64().unwrap();
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/contractors/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(record))
            .mount(&self.directory)
            .await;
    }

    pub async fn mount_employee(&self, record: Value) {
        let id = record["id"].as_i64().unwrap();
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/employees/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(record))
            .mount(&self.directory)
            .await;
    }

    pub async fn mount_status(&self, code: i64, name: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/statuses/{code}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "code": code, "name": name })),
            )
            .mount(&self.directory)
            .await;
    }

    pub async fn mount_permitted_emails(&self, reseller_id: i64, emails: &[&str]) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/resellers/{reseller_id}/permitted-emails")))
            .and(query_param("event", "tsGoodsReturn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "emails": emails })))
            .mount(&self.directory)
            .await;
    }

    pub async fn mount_email_from(&self, reseller_id: i64, email_from: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/resellers/{reseller_id}/email-from")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "email_from": email_from })),
            )
            .mount(&self.directory)
            .await;
    }

    pub async fn mount_render(&self, key: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/api/v1/messages/{key}/render")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": text })))
            .mount(&self.localization)
            .await;
    }

    pub async fn mount_messages_gateway(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/api/v1/messages"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({})))
            .mount(&self.messages)
            .await;
    }

    pub async fn mount_messenger_response(&self, success: bool, error: &str) {
        Mock::given(method("POST"))
            .and(path("/api/v1/notifications"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": success, "error": error })),
            )
            .mount(&self.messenger)
            .await;
    }

    /// Everything a valid CHANGE payload needs to dispatch on all three
    /// channels.
    pub async fn mount_happy_path(&self) {
        self.mount_seller(RESELLER_ID).await;
        self.mount_contractor(customer_record(CLIENT_ID, RESELLER_ID)).await;
        self.mount_employee(employee_record(CREATOR_ID, "Carol")).await;
        self.mount_employee(employee_record(EXPERT_ID, "Edgar")).await;
        self.mount_status(1, "Pending").await;
        self.mount_status(2, "Approved").await;
        self.mount_permitted_emails(RESELLER_ID, &["ops1@reseller.example", "ops2@reseller.example"])
            .await;
        self.mount_email_from(RESELLER_ID, "noreply@reseller.example").await;
        self.mount_render("PositionStatusHasChanged", "Status changed from Pending to Approved")
            .await;
        self.mount_render("NewPositionAdded", "A new position was added").await;
        self.mount_render("complaintEmployeeEmailSubject", "Employee subject").await;
        self.mount_render("complaintEmployeeEmailBody", "Employee body").await;
        self.mount_render("complaintClientEmailSubject", "Client subject").await;
        self.mount_render("complaintClientEmailBody", "Client body").await;
        self.mount_messages_gateway(200).await;
        self.mount_messenger_response(true, "").await;
    }
}

pub fn test_config(
    directory_url: &str,
    localization_url: &str,
    messages_url: &str,
    messenger_url: &str,
) -> Config {
    Config {
        directory_service_url: directory_url.to_string(),
        localization_service_url: localization_url.to_string(),
        messages_service_url: messages_url.to_string(),
        messenger_service_url: messenger_url.to_string(),
        http_timeout_seconds: 5,
        max_retry_attempts: 1,
        initial_retry_delay_ms: 1,
        max_retry_delay_ms: 10,
        retry_backoff_multiplier: 2,
        server_port: 0,
    }
}

pub fn customer_record(id: i64, seller_id: i64) -> Value {
    json!({
        "id": id,
        "type": "customer",
        "name": "Client",
        "full_name": "Client Full",
        "email": "client@example.com",
        "mobile": "+15550001",
        "seller_id": seller_id,
    })
}

pub fn employee_record(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "type": "employee",
        "name": name,
        "full_name": format!("{name} Full"),
        "seller_id": 0,
    })
}

pub fn change_payload(reseller_id: i64) -> Value {
    json!({
        "resellerId": reseller_id,
        "notificationType": 2,
        "clientId": CLIENT_ID,
        "creatorId": CREATOR_ID,
        "expertId": EXPERT_ID,
        "complaintId": 51,
        "complaintNumber": "C-51",
        "consumptionId": 61,
        "consumptionNumber": "K-61",
        "agreementNumber": "A-71",
        "date": "2026-08-23",
        "differences": { "from": 1, "to": 2 },
    })
}

pub fn new_payload(reseller_id: i64) -> Value {
    let mut payload = change_payload(reseller_id);
    payload["notificationType"] = json!(1);
    payload.as_object_mut().unwrap().remove("differences");
    payload
}

pub fn client_contractor() -> Contractor {
    Contractor {
        id: CLIENT_ID,
        contractor_type: ContractorType::Customer,
        name: "Client".to_string(),
        full_name: Some("Client Full".to_string()),
        email: Some("client@example.com".to_string()),
        mobile: Some("+15550001".to_string()),
        seller_id: RESELLER_ID,
    }
}

pub fn employee_contractor(id: i64, name: &str) -> Contractor {
    Contractor {
        id,
        contractor_type: ContractorType::Employee,
        name: name.to_string(),
        full_name: Some(format!("{name} Full")),
        email: None,
        mobile: None,
        seller_id: 0,
    }
}

pub fn change_request() -> OperationRequest {
    OperationRequest {
        reseller_id: RESELLER_ID,
        notification_type: 2,
        client_id: CLIENT_ID,
        creator_id: CREATOR_ID,
        expert_id: EXPERT_ID,
        complaint_id: 51,
        complaint_number: "C-51".to_string(),
        consumption_id: 61,
        consumption_number: "K-61".to_string(),
        agreement_number: "A-71".to_string(),
        date: "2026-08-23".to_string(),
        differences: Some(StatusDifference { from: 1, to: 2 }),
    }
}

pub fn change_context() -> OperationContext {
    OperationContext {
        request: change_request(),
        contractors: ResolvedContractors {
            client: client_contractor(),
            creator: employee_contractor(CREATOR_ID, "Carol"),
            expert: employee_contractor(EXPERT_ID, "Edgar"),
        },
        differences: "Status changed from Pending to Approved".to_string(),
    }
}

pub fn template_data() -> NotifyTemplateData {
    NotifyTemplateData {
        complaint_id: 51,
        complaint_number: "C-51".to_string(),
        creator_id: CREATOR_ID,
        creator_name: "Carol Full".to_string(),
        expert_id: EXPERT_ID,
        expert_name: "Edgar Full".to_string(),
        client_id: CLIENT_ID,
        client_name: "Client Full".to_string(),
        consumption_id: 61,
        consumption_number: "K-61".to_string(),
        agreement_number: "A-71".to_string(),
        date: "2026-08-23".to_string(),
        differences: "Status changed from Pending to Approved".to_string(),
    }
}
