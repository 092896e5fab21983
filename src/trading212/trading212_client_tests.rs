//! Tests for the pagination loop, driven by a canned page source.

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::trading212::trading212_client::{collect_pages, FetchError, PageSource};

    const BASE: &str = "https://live.trading212.com/api/v0";
    const ENDPOINT: &str = "/equity/history/orders";

    struct StubSource {
        responses: Mutex<VecDeque<Result<String, FetchError>>>,
        requests: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn new(responses: Vec<Result<String, FetchError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for StubSource {
        async fn get_body(&self, url: &str) -> Result<String, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("more requests than canned responses")
        }
    }

    fn items(fetch: &crate::trading212::PagedFetch<Value>) -> Vec<i64> {
        fetch
            .items
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_single_page_without_marker_terminates() {
        let stub = StubSource::new(vec![Ok(r#"{"items":[1,2]}"#.to_string())]);

        let fetch = collect_pages::<Value, _>(&stub, BASE, ENDPOINT).await;

        assert!(fetch.is_complete());
        assert_eq!(items(&fetch), vec![1, 2]);
        assert_eq!(
            stub.requests(),
            vec![format!("{}{}?limit=50", BASE, ENDPOINT)]
        );
    }

    #[tokio::test]
    async fn test_bounded_chain_terminates_after_each_page() {
        let stub = StubSource::new(vec![
            Ok(r#"{"items":[1,2],"next":"c1"}"#.to_string()),
            Ok(r#"{"items":[3],"nextPagePath":"?limit=50&cursor=c2"}"#.to_string()),
            Ok(r#"{"items":[4,5]}"#.to_string()),
        ]);

        let fetch = collect_pages::<Value, _>(&stub, BASE, ENDPOINT).await;

        assert!(fetch.is_complete());
        assert_eq!(items(&fetch), vec![1, 2, 3, 4, 5]);

        let requests = stub.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0], format!("{}{}?limit=50", BASE, ENDPOINT));
        assert_eq!(
            requests[1],
            format!("{}{}?limit=50&cursor=c1", BASE, ENDPOINT)
        );
        assert_eq!(
            requests[2],
            format!("{}{}?limit=50&cursor=c2", BASE, ENDPOINT)
        );
    }

    #[tokio::test]
    async fn test_empty_continuation_token_stops_the_loop() {
        let stub = StubSource::new(vec![Ok(r#"{"items":[1],"next":""}"#.to_string())]);

        let fetch = collect_pages::<Value, _>(&stub, BASE, ENDPOINT).await;

        assert!(fetch.is_complete());
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_http_error_yields_partial_items() {
        let stub = StubSource::new(vec![
            Ok(r#"{"items":[1],"next":"c1"}"#.to_string()),
            Err(FetchError::Status {
                status: 429,
                body: "too many requests".to_string(),
            }),
        ]);

        let fetch = collect_pages::<Value, _>(&stub, BASE, ENDPOINT).await;

        assert!(!fetch.is_complete());
        assert_eq!(items(&fetch), vec![1]);
        assert!(matches!(
            fetch.failure,
            Some(FetchError::Status { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_error_yields_empty_partial() {
        let stub = StubSource::new(vec![Err(FetchError::Transport(
            "connection refused".to_string(),
        ))]);

        let fetch = collect_pages::<Value, _>(&stub, BASE, ENDPOINT).await;

        assert!(!fetch.is_complete());
        assert!(fetch.items.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_yields_partial_items() {
        let stub = StubSource::new(vec![
            Ok(r#"{"items":[1,2],"next":"c1"}"#.to_string()),
            Ok("<html>maintenance</html>".to_string()),
        ]);

        let fetch = collect_pages::<Value, _>(&stub, BASE, ENDPOINT).await;

        assert_eq!(items(&fetch), vec![1, 2]);
        assert!(matches!(fetch.failure, Some(FetchError::InvalidResponse(_))));
    }
}
