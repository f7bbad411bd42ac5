use serde_json::json;

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Board;

impl<T: Transport> CannyClient<T> {
    /// Retrieves the details of an existing board, specified by its id.
    ///
    /// Reference: <https://developers.canny.io/api-reference#retrieve_board>
    pub async fn retrieve_board(&self, id: &str) -> Result<Board> {
        self.request("/boards/retrieve", &json!({ "id": id })).await
    }

    /// Returns all boards associated with your company, in no particular
    /// order.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_all_boards>
    pub async fn list_all_boards(&self) -> Result<Vec<Board>> {
        self.request("/boards/list", &()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::ApiConfig;
    use crate::http::mock::MockTransport;
    use crate::CannyClient;

    const BOARD_JSON: &str = r#"{
        "id": "b1",
        "created": "2024-01-01T00:00:00.000Z",
        "isPrivate": false,
        "name": "Feature Requests",
        "postCount": 12,
        "privateComments": false,
        "url": "https://x"
    }"#;

    fn client(mock: MockTransport) -> CannyClient<MockTransport> {
        let config = Arc::new(ApiConfig::default());
        config.set_key("k");
        CannyClient::with_transport(config, mock)
    }

    #[tokio::test]
    async fn retrieve_board_sends_id_and_parses_board() {
        let mock = MockTransport::new().on_post(
            "https://canny.io/api/v1/boards/retrieve",
            200,
            BOARD_JSON,
        );
        let client = client(mock.clone());

        let board = client.retrieve_board("b1").await.unwrap();

        assert_eq!(board.name, "Feature Requests");
        assert_eq!(mock.requests()[0].payload["id"], "b1");
    }

    #[tokio::test]
    async fn list_all_boards_parses_array() {
        let mock = MockTransport::new().on_post(
            "https://canny.io/api/v1/boards/list",
            200,
            format!("[{BOARD_JSON}]"),
        );
        let client = client(mock);

        let boards = client.list_all_boards().await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].post_count, 12);
    }
}
