// src/client.rs
//! The public entry point: typed retrieval of pages, databases and blocks.

use crate::api::parser::{
    parse_block_item, parse_block_response, parse_database_response, parse_page_item,
    parse_page_response,
};
use crate::api::{ApiRequest, CursorPlacement, NotionHttpClient, Paginator, RequestExecutor};
use crate::config::ClientConfig;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::Result;
use crate::model::{Block, Database, Page};
use crate::types::{validate_path_segment, ApiKey, CredentialProvider};
use serde_json::Value;

/// Lazy stream of database rows.
pub type PageStream<'a, E> = Paginator<'a, E, Page>;

/// Lazy stream of child blocks.
pub type BlockStream<'a, E> = Paginator<'a, E, Block>;

/// Parameters of a database query.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseQuery {
    /// Filter object, sent as-is.
    pub filter: Option<Value>,
    /// Sorts array, sent as-is.
    pub sorts: Option<Value>,
    pub page_size: u32,
}

impl Default for DatabaseQuery {
    fn default() -> Self {
        Self {
            filter: None,
            sorts: None,
            page_size: NOTION_API_PAGE_SIZE,
        }
    }
}

impl DatabaseQuery {
    pub fn with_filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sorts(mut self, sorts: Value) -> Self {
        self.sorts = Some(sorts);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Static body fields. Paging fields are appended by the paginator.
    fn body(&self) -> Value {
        let mut body = serde_json::Map::new();
        if let Some(filter) = &self.filter {
            body.insert("filter".to_string(), filter.clone());
        }
        if let Some(sorts) = &self.sorts {
            body.insert("sorts".to_string(), sorts.clone());
        }
        Value::Object(body)
    }
}

/// Blocking client for the Notion API.
///
/// Every call is independent: no caching, no retries, and a fresh object on
/// every retrieval.
pub struct NotionClient<E: RequestExecutor = NotionHttpClient> {
    executor: E,
}

impl NotionClient<NotionHttpClient> {
    /// Builds a client from an explicit token or `NOTION_API_TOKEN`, with
    /// the rest of the configuration read from the environment.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let api_key = ApiKey::resolve(token)?;
        let config = ClientConfig::from_env()?;
        Self::with_config(api_key, config)
    }

    pub fn with_config(
        credentials: impl CredentialProvider + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        Ok(Self::from_executor(NotionHttpClient::new(credentials, config)?))
    }
}

impl<E: RequestExecutor> NotionClient<E> {
    pub fn from_executor(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// `GET /v1/pages/{id}`
    pub fn retrieve_page(&self, page_id: &str) -> Result<Page> {
        let id = validate_path_segment(page_id)?;
        let data = self
            .executor
            .execute(&ApiRequest::get(format!("/v1/pages/{}", id)))?;
        let page = parse_page_response(data, id)?;
        log::info!("Retrieved {}", page);
        Ok(page)
    }

    /// `GET /v1/databases/{id}`
    pub fn retrieve_database(&self, database_id: &str) -> Result<Database> {
        let id = validate_path_segment(database_id)?;
        let data = self
            .executor
            .execute(&ApiRequest::get(format!("/v1/databases/{}", id)))?;
        let database = parse_database_response(data, id)?;
        log::info!("Retrieved {}", database);
        Ok(database)
    }

    /// `GET /v1/blocks/{id}`, through the block factory.
    pub fn retrieve_block(&self, block_id: &str) -> Result<Block> {
        let id = validate_path_segment(block_id)?;
        let data = self
            .executor
            .execute(&ApiRequest::get(format!("/v1/blocks/{}", id)))?;
        let block = parse_block_response(data, id)?;
        log::info!("Retrieved {}", block);
        Ok(block)
    }

    /// Streams the rows of a database (`POST /v1/databases/{id}/query`).
    ///
    /// Nothing is sent until the first row is pulled. Rows that fail
    /// validation are skipped with a warning.
    pub fn query_database(
        &self,
        database_id: &str,
        query: DatabaseQuery,
    ) -> Result<PageStream<'_, E>> {
        let id = validate_path_segment(database_id)?;
        let request =
            ApiRequest::post(format!("/v1/databases/{}/query", id)).with_body(query.body());
        Ok(Paginator::new(
            &self.executor,
            request,
            CursorPlacement::Body,
            query.page_size,
            parse_page_item,
        ))
    }

    /// Streams the children of a block or page (`GET /v1/blocks/{id}/children`).
    pub fn retrieve_block_children(
        &self,
        block_id: &str,
        page_size: u32,
    ) -> Result<BlockStream<'_, E>> {
        let id = validate_path_segment(block_id)?;
        Ok(Paginator::new(
            &self.executor,
            ApiRequest::get(format!("/v1/blocks/{}/children", id)),
            CursorPlacement::Query,
            page_size,
            parse_block_item,
        ))
    }
}

impl From<NotionHttpClient> for NotionClient<NotionHttpClient> {
    fn from(executor: NotionHttpClient) -> Self {
        Self::from_executor(executor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{list_page, ScriptedExecutor};
    use crate::error::{ErrorKind, NotionError, NotionErrorCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> crate::api::JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    fn page_json(id: &str) -> Value {
        json!({
            "object": "page",
            "id": id,
            "created_time": "2023-01-10T11:00:00.000Z",
            "last_edited_time": "2023-01-11T12:30:00.000Z",
            "parent": {"type": "workspace", "workspace": true},
            "properties": {}
        })
    }

    fn block_json(id: &str, block_type: &str) -> Value {
        let mut value = json!({
            "object": "block",
            "id": id,
            "created_time": "2023-01-10T11:00:00.000Z",
            "last_edited_time": "2023-01-11T12:30:00.000Z",
            "parent": {"type": "page_id", "page_id": "p1"},
            "has_children": false,
            "type": block_type
        });
        value[block_type] = json!({"rich_text": []});
        value
    }

    #[test]
    fn test_retrieve_page_builds_get_request() {
        let executor = ScriptedExecutor::new(vec![Ok(object(page_json("p1")))]);
        let client = NotionClient::from_executor(&executor);
        let page = client.retrieve_page("p1").unwrap();
        assert_eq!(page.id(), "p1");
        assert_eq!(executor.requests(), vec![ApiRequest::get("/v1/pages/p1")]);
    }

    #[test]
    fn test_invalid_ids_fail_before_any_request() {
        let executor = ScriptedExecutor::new(vec![]);
        let client = NotionClient::from_executor(&executor);
        for bad in ["", "a/b", "a?b", "a#b", "a b"] {
            let err = client.retrieve_page(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::LocalFailure, "id {:?}", bad);
        }
        assert!(client.retrieve_block_children("x/y", 10).is_err());
        assert!(client
            .query_database("", DatabaseQuery::default())
            .is_err());
        assert!(executor.requests().is_empty());
    }

    #[test]
    fn test_rejection_passes_through_unchanged() {
        let executor = ScriptedExecutor::new(vec![Err(NotionError::Api {
            status: 404,
            code: NotionErrorCode::ObjectNotFound,
            message: "Could not find database.".to_string(),
            request_id: None,
        })]);
        let client = NotionClient::from_executor(&executor);
        let err = client.retrieve_database("d1").unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.error_code(), Some(&NotionErrorCode::ObjectNotFound));
        assert!(err.error_code().unwrap().is_not_found());
        assert!(!err.error_code().unwrap().is_retryable());
    }

    #[test]
    fn test_wrong_object_for_page_is_local_failure_with_id() {
        let mut value = page_json("p1");
        value["object"] = json!("database");
        let executor = ScriptedExecutor::new(vec![Ok(object(value))]);
        let client = NotionClient::from_executor(&executor);
        let err = client.retrieve_page("p1").unwrap_err();
        assert!(err.is_validation_failure());
        assert!(err.to_string().contains("(ID: p1)"));
    }

    #[test]
    fn test_retrieve_block_unknown_type_is_generic() {
        let executor = ScriptedExecutor::new(vec![Ok(object(block_json("b1", "ai_block")))]);
        let client = NotionClient::from_executor(&executor);
        let block = client.retrieve_block("b1").unwrap();
        assert!(block.is_generic());
        assert_eq!(block.block_type(), "ai_block");
    }

    #[test]
    fn test_query_database_body_order() {
        let executor = ScriptedExecutor::new(vec![
            Ok(list_page(vec![page_json("r1")], Some("cur"))),
            Ok(list_page(vec![page_json("r2")], None)),
        ]);
        let client = NotionClient::from_executor(&executor);
        let query = DatabaseQuery::default()
            .with_sorts(json!([{"property": "Name", "direction": "ascending"}]))
            .with_filter(json!({"property": "Done", "checkbox": {"equals": false}}))
            .with_page_size(25);
        let rows: Vec<Page> = client
            .query_database("db1", query)
            .unwrap()
            .map(Result::unwrap)
            .collect();
        assert_eq!(rows.iter().map(Page::id).collect::<Vec<_>>(), vec!["r1", "r2"]);

        let requests = executor.requests();
        assert_eq!(requests[0].path, "/v1/databases/db1/query");
        let body = requests[1].body.as_ref().unwrap().as_object().unwrap();
        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["filter", "sorts", "page_size", "start_cursor"]);
        assert_eq!(body["page_size"], 25);
    }

    #[test]
    fn test_query_skips_invalid_rows() {
        let mut bad = page_json("r2");
        bad.as_object_mut().unwrap().remove("parent");
        let executor = ScriptedExecutor::new(vec![Ok(list_page(
            vec![page_json("r1"), bad, page_json("r3")],
            None,
        ))]);
        let client = NotionClient::from_executor(&executor);
        let ids: Vec<String> = client
            .query_database("db1", DatabaseQuery::default())
            .unwrap()
            .map(|row| row.unwrap().id().to_string())
            .collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn test_block_children_use_query_params() {
        let executor = ScriptedExecutor::new(vec![Ok(list_page(
            vec![block_json("b1", "paragraph"), block_json("b2", "link_preview")],
            None,
        ))]);
        let client = NotionClient::from_executor(&executor);
        let mut stream = client.retrieve_block_children("parent-1", 0).unwrap();
        assert_eq!(stream.page_size(), 100);
        let blocks: Vec<Block> = stream.by_ref().map(Result::unwrap).collect();
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Paragraph(_)));
        assert!(blocks[1].is_generic());
        assert_eq!(stream.pages_fetched(), 1);

        let requests = executor.requests();
        assert_eq!(requests[0].path, "/v1/blocks/parent-1/children");
        assert_eq!(
            requests[0].query,
            vec![("page_size".to_string(), "100".to_string())]
        );
    }
}
