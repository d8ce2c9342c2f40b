//! Todo HTTP Service
//!
//! `TodoSource` over reqwest (browser fetch on wasm32).

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{TodoQuery, TodoSource};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{AddTodoResponse, NewTodo, Todo};

#[derive(Debug, Clone)]
pub struct TodoService {
    client: Client,
    config: ApiConfig,
}

impl TodoService {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: Client::new(), config }
    }
}

/// Turn a non-success response into `ApiError::Status`, otherwise decode it
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status.canonical_reason().unwrap_or("Unknown status").to_string()
        } else {
            body
        };
        return Err(ApiError::Status { status: status.as_u16(), message });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl TodoSource for TodoService {
    async fn get_todos(&self, query: &TodoQuery) -> Result<Vec<Todo>, ApiError> {
        let url = query.request_url(&self.config);
        log::debug!("[TodoService] GET {}", url);
        let resp = self.client.get(&url).send().await?;
        let todos: Vec<Todo> = read_json(resp).await?;
        log::debug!("[TodoService] Loaded {} todos", todos.len());
        Ok(todos)
    }

    async fn get_todo(&self, id: &str) -> Result<Todo, ApiError> {
        let url = self.config.todo_url(id);
        log::debug!("[TodoService] GET {}", url);
        let resp = self.client.get(&url).send().await?;
        read_json(resp).await
    }

    async fn add_todo(&self, draft: &NewTodo) -> Result<String, ApiError> {
        let url = self.config.todos_url();
        log::debug!("[TodoService] POST {} owner={}", url, draft.owner);
        let resp = self.client.post(&url).json(draft).send().await?;
        let created: AddTodoResponse = read_json(resp).await?;
        log::info!("[TodoService] Created todo {}", created.id);
        Ok(created.id)
    }
}
