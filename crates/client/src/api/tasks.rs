use shared_types::{ApiError, TasksResponse};

use super::endpoints;
use crate::transport::{ApiClient, RequestOptions};

#[tracing::instrument(skip(client))]
pub async fn get_tasks(client: &ApiClient) -> Result<TasksResponse, ApiError> {
    client
        .fetch_json(endpoints::TASKS, RequestOptions::get())
        .await
}
