//! The recorded product catalog contract.

use std::collections::HashMap;

use serde_json::json;

use crate::contract::{Contract, ContractMetadata, Interaction, Participant, Request, Response};

/// Header value recorded at capture time.
///
/// Stale by construction; the replay harness swaps in a freshly issued
/// token whenever an interaction carries an `Authorization` header.
pub const RECORDED_TOKEN: &str = "Bearer 2024-01-01T10:00";

fn auth_headers() -> HashMap<String, String> {
    HashMap::from([("Authorization".to_string(), RECORDED_TOKEN.to_string())])
}

fn json_headers() -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

fn get(path: &str, headers: HashMap<String, String>) -> Request {
    Request {
        method: "GET".to_string(),
        path: path.to_string(),
        headers,
        body: None,
    }
}

/// The recorded interactions between the frontend consumer and the
/// product catalog provider.
#[must_use]
pub fn product_catalog_contract() -> Contract {
    Contract {
        consumer: Participant::new("frontend-application"),
        provider: Participant::new("product-service"),
        interactions: vec![
            Interaction {
                description: "get all products".to_string(),
                provider_state: Some("products exist".to_string()),
                request: get("/products", auth_headers()),
                response: Response {
                    status: 200,
                    headers: json_headers(),
                    body: Some(json!([
                        {"id": "09", "type": "CREDIT_CARD", "name": "Gem Visa", "version": "v1"},
                        {"id": "10", "type": "CREDIT_CARD", "name": "28 Degrees", "version": "v1"},
                    ])),
                },
            },
            Interaction {
                description: "get all products when none exist".to_string(),
                provider_state: Some("no products exist".to_string()),
                request: get("/products", auth_headers()),
                response: Response {
                    status: 200,
                    headers: json_headers(),
                    body: Some(json!([])),
                },
            },
            Interaction {
                description: "get product with ID 10".to_string(),
                provider_state: Some("product with ID 10 exists".to_string()),
                request: get("/product/10", auth_headers()),
                response: Response {
                    status: 200,
                    headers: json_headers(),
                    body: Some(json!(
                        {"id": "10", "type": "CREDIT_CARD", "name": "28 Degrees", "version": "v1"}
                    )),
                },
            },
            Interaction {
                description: "get product with ID 11".to_string(),
                provider_state: Some("product with ID 11 does not exist".to_string()),
                request: get("/product/11", auth_headers()),
                response: Response {
                    status: 404,
                    headers: HashMap::new(),
                    body: None,
                },
            },
            Interaction {
                description: "get all products with no auth token".to_string(),
                provider_state: Some("products exist".to_string()),
                request: get("/products", HashMap::new()),
                response: Response {
                    status: 401,
                    headers: HashMap::new(),
                    body: None,
                },
            },
        ],
        metadata: ContractMetadata::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::ProviderState;

    #[test]
    fn test_every_recorded_state_has_a_seed() {
        for interaction in product_catalog_contract().interactions {
            let state = interaction.provider_state.as_deref().unwrap();
            assert!(
                ProviderState::parse(state).is_ok(),
                "no seed for recorded state {state:?} ({})",
                interaction.description
            );
        }
    }

    #[test]
    fn test_not_found_and_unauthorized_stay_distinct() {
        let contract = product_catalog_contract();
        let statuses: Vec<u16> = contract
            .interactions
            .iter()
            .map(|i| i.response.status)
            .collect();

        assert!(statuses.contains(&404));
        assert!(statuses.contains(&401));
    }

    #[test]
    fn test_contract_round_trips_through_json() {
        let contract = product_catalog_contract();
        let json = serde_json::to_string_pretty(&contract).unwrap();
        let restored: Contract = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, contract);
    }
}
