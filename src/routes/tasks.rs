use crate::{
    auth::Identity,
    error::AppError,
    models::{TaskUpdate, TaskUpdated},
    routes::parse_json_body,
    store::AppState,
};
use actix_web::{get, put, web, HttpRequest, HttpResponse, Responder};

/// Retrieves every task.
///
/// No filtering and no pagination; the list reflects all updates made so far
/// in this process.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` objects.
/// - `401 Unauthorized` / `400 Bad Request`: rejected by `AuthMiddleware`.
#[get("")]
pub async fn get_tasks(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.tasks.list().await)
}

/// Updates the `status` and `remarks` of a task.
///
/// Both fields are written exactly as received, whatever their JSON type;
/// omitted fields (or a missing body) clear the stored value. `updatedAt` is
/// set to the current time.
///
/// ## Path Parameters:
/// - `id`: the task identifier.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Task updated", "task": Task}`.
/// - `404 Not Found`: `{"message": "Task not found"}`.
/// - `401 Unauthorized` / `400 Bad Request`: rejected by `AuthMiddleware`.
#[put("/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    identity: Identity,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();
    let task_data: TaskUpdate = parse_json_body(&req, &body)?;

    let task = state
        .tasks
        .update(&task_id, task_data)
        .await
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    log::info!("task {} updated by user {}", task.id, identity.id);

    Ok(HttpResponse::Ok().json(TaskUpdated {
        message: "Task updated".into(),
        task,
    }))
}
