use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use elasticroute_core::{
    Config, Depot, Plan, Result, RouteError, Solver, SolverBuilder, Stop, Transport,
    TransportRequest, TransportResponse, Vehicle,
};
use serde_json::Value;

/// Transport double that replays queued responses and records requests.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<TransportResponse>>>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn respond(&self, status: u16, body: Value) {
        self.responses.lock().unwrap().push_back(TransportResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| RouteError::transport("connection refused"))
    }
}

/// Helper function to create a solver backed by a mock transport
pub fn create_test_solver() -> (MockTransport, Solver) {
    let transport = MockTransport::default();
    let solver = SolverBuilder::new()
        .with_config(Config::default().with_api_key(Some("test-key".to_string())))
        .with_transport(transport.clone())
        .build()
        .expect("Failed to create solver");
    (transport, solver)
}

/// The smallest plan the service accepts: one depot, one vehicle, two stops.
#[allow(dead_code)]
pub fn create_test_plan() -> Plan {
    let mut plan = Plan::new("TestPlan_1234567890");
    plan.depots.push(
        Depot::with_address(
            "Main Warehouse",
            "61 Kaki Bukit Ave 1 #04-34, Shun Li Ind Park Singapore 417943",
        )
        .unwrap(),
    );
    plan.vehicles.push(Vehicle::new("Van 1").unwrap());
    plan.stops.push(
        Stop::with_address(
            "Customer 1",
            "80 Marine Parade Rd, #01-08, Singapore 449269",
        )
        .unwrap(),
    );
    plan.stops.push(
        Stop::with_address("Customer 2", "2 Changi Business Park Ave 1, Singapore 486015")
            .unwrap(),
    );
    plan
}
