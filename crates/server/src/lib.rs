//! HAL-FORMS demonstration server.
//!
//! Serves a small read-only todo list as HAL and HAL-FORMS documents:
//!
//! | Route | Content-Type |
//! |-------|--------------|
//! | `GET /` | HAL-FORMS (self link, create template) |
//! | `GET /todos` | HAL (embedded items) |
//! | `GET /todos/{id}` | HAL-FORMS (edit and delete templates) |
//! | `POST /todos` | HAL, `201 Created` |
//! | `GET /health` | plain JSON |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use hal_forms::{Link, Property, Resource, Template};
use hal_forms_rest::{HalResponse, ServerConfig};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// A todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

/// Body accepted by `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    todos: Arc<Vec<Todo>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            todos: Arc::new(sample_todos()),
        }
    }

    fn respond(&self, resource: Resource) -> HalResponse {
        HalResponse::new(resource).pretty(self.config.pretty_json)
    }

    fn todo_resource(&self, todo: &Todo) -> Resource {
        let href = self.config.url(&format!("/todos/{}", todo.id));
        Resource::new(todo).with_link("self", Link::new(href))
    }
}

fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            title: "Write the README".to_string(),
            completed: true,
        },
        Todo {
            id: 2,
            title: "Publish the crate".to_string(),
            completed: false,
        },
    ]
}

fn todo_form(method: &str, title: &str) -> Template {
    Template::new(method)
        .with_title(title)
        .with_content_type("application/json")
        .with_property(Property::new("title").required().with_prompt("Title"))
        .with_property(
            Property::new("completed")
                .with_type("checkbox")
                .with_value("false")
                .with_prompt("Completed"),
        )
}

async fn root(State(state): State<AppState>) -> HalResponse {
    let resource = Resource::new(json!({"name": "HAL-FORMS demo"}))
        .with_link("self", Link::new(state.config.url("/")))
        .with_link("todos", Link::new(state.config.url("/todos")).with_title("Todos"))
        .with_link(
            "todo",
            Link::templated(state.config.url("/todos/{id}")).with_title("Todo by id"),
        )
        .with_template(
            "default",
            todo_form("POST", "Create todo").with_target(state.config.url("/todos")),
        );

    state.respond(resource)
}

async fn list_todos(State(state): State<AppState>) -> HalResponse {
    let mut resource = Resource::new(json!({"count": state.todos.len()}))
        .with_link("self", Link::new(state.config.url("/todos")));

    for todo in state.todos.iter() {
        resource.add_embedded("item", state.todo_resource(todo));
    }

    debug!(count = state.todos.len(), "Listing todos");
    state.respond(resource)
}

async fn read_todo(State(state): State<AppState>, Path(id): Path<u32>) -> HalResponse {
    match state.todos.iter().find(|t| t.id == id) {
        Some(todo) => {
            let resource = state
                .todo_resource(todo)
                .with_template("default", todo_form("PUT", "Edit todo"))
                .with_template("delete", Template::new("DELETE").with_title("Delete todo"));
            state.respond(resource)
        }
        None => {
            debug!(id, "Todo not found");
            state
                .respond(Resource::new(json!({"error": format!("todo {} not found", id)})))
                .with_status(StatusCode::NOT_FOUND)
        }
    }
}

async fn create_todo(State(state): State<AppState>, Json(new): Json<NewTodo>) -> HalResponse {
    let next_id = state.todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    let todo = Todo {
        id: next_id,
        title: new.title,
        completed: new.completed,
    };

    let location = state.config.url(&format!("/todos/{}", todo.id));
    info!(id = todo.id, "Created todo");

    HalResponse::created(state.todo_resource(&todo), location).pretty(state.config.pretty_json)
}

async fn health(State(state): State<AppState>) -> HalResponse {
    state.respond(Resource::new(json!({"status": "ok"})))
}

/// Creates the Axum application.
pub fn create_app(config: ServerConfig) -> Router {
    info!(base_url = %config.base_url, "Creating HAL demo application");

    Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(read_todo))
        .route("/health", get(health))
        .with_state(AppState::new(config))
        .layer(TraceLayer::new_for_http())
}
