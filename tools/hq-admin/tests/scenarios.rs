//! End-to-end console scenarios against a stub hospital service over HTTP.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use crossterm::event::KeyCode;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use hq_admin::domain::{App, Command, Completion, Notice, Route};
use hq_admin::Dispatcher;
use hq_service::{Doctor, HttpHospitalService, HttpSettings};

#[derive(Clone)]
struct Stub {
    doctors: Arc<Mutex<Vec<Value>>>,
    token: Arc<AtomicU64>,
}

async fn list(State(stub): State<Stub>) -> Json<Value> {
    Json(Value::Array(stub.doctors.lock().unwrap().clone()))
}

async fn create(State(stub): State<Stub>, Json(body): Json<Value>) -> Json<Value> {
    let doctor = json!({
        "id": "d2",
        "name": body["name"],
        "specialization": body["specialization"],
        "availability": false
    });
    stub.doctors.lock().unwrap().push(doctor.clone());
    Json(doctor)
}

async fn remove(Path(id): Path<String>) -> impl IntoResponse {
    if id == "d1" {
        (StatusCode::CONFLICT, Json(json!({"message": "in use"}))).into_response()
    } else {
        StatusCode::OK.into_response()
    }
}

async fn increment(State(stub): State<Stub>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["doctorId"] != "d1" {
        return StatusCode::NOT_FOUND.into_response();
    }
    let token = stub.token.fetch_add(1, Ordering::SeqCst) + 1;
    Json(json!({ "token": token })).into_response()
}

async fn spawn_stub() -> String {
    let stub = Stub {
        doctors: Arc::new(Mutex::new(vec![json!({
            "id": "d1",
            "name": "Lee",
            "specialization": "Cardiology",
            "availability": true
        })])),
        token: Arc::new(AtomicU64::new(2)),
    };
    let router = Router::new()
        .route("/api/hospital/doctors", get(list).post(create))
        .route("/api/hospital/doctors/:id", delete(remove))
        .route("/api/token-management/increment-token", post(increment))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

struct Console {
    app: App,
    dispatcher: Dispatcher,
    completions: mpsc::UnboundedReceiver<Completion>,
}

impl Console {
    async fn start() -> Self {
        let base = spawn_stub().await;
        let service = HttpHospitalService::new(&base, HttpSettings::default()).unwrap();
        let (dispatcher, completions) = Dispatcher::new(Arc::new(service));
        let mut console = Self {
            app: App::new(base, true, hq_admin::domain::DEFAULT_NOTICE_TTL),
            dispatcher,
            completions,
        };
        let commands = console.app.startup_commands();
        console.run(commands).await;
        console
    }

    /// Dispatch `commands` and apply every completion.
    async fn run(&mut self, commands: Vec<Command>) {
        let count = commands.len();
        self.dispatcher.dispatch(commands);
        for _ in 0..count {
            let completion = self.completions.recv().await.unwrap();
            self.app.apply(completion);
        }
    }

    async fn key(&mut self, key: KeyCode) {
        let commands = self.app.handle_key(key);
        self.run(commands).await;
    }

    async fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c)).await;
        }
    }

    fn labels(&self) -> Vec<String> {
        self.app
            .directory
            .roster()
            .doctors()
            .iter()
            .map(Doctor::card_label)
            .collect()
    }

    fn latest_notice(&self) -> Option<Notice> {
        self.app.notices.iter().next().cloned()
    }
}

#[tokio::test]
async fn scenario_directory_lists_doctor_card() {
    let console = Console::start().await;
    assert_eq!(console.labels(), vec!["Dr. Lee — Cardiology — Available"]);
}

#[tokio::test]
async fn scenario_created_doctor_is_appended() {
    let mut console = Console::start().await;

    console.key(KeyCode::Char('a')).await;
    console.type_text("Ng").await;
    console.key(KeyCode::Tab).await;
    console.type_text("Neurology").await;
    console.key(KeyCode::Enter).await;

    assert_eq!(
        console.labels(),
        vec![
            "Dr. Lee — Cardiology — Available",
            "Dr. Ng — Neurology — Unavailable"
        ]
    );
    assert_eq!(
        console.latest_notice(),
        Some(Notice::success("Doctor added successfully"))
    );
}

#[tokio::test]
async fn scenario_token_values_come_from_the_service() {
    let mut console = Console::start().await;
    console.key(KeyCode::Char(Route::TokenPanel.hotkey())).await;

    // Cursor rests on d1
    console.key(KeyCode::Enter).await;
    assert!(console.app.token_panel.is_detail_open());

    console.key(KeyCode::Char('i')).await;
    assert_eq!(console.app.token_panel.token(), Some(3));
    console.key(KeyCode::Char('i')).await;
    assert_eq!(console.app.token_panel.token(), Some(4));
}

#[tokio::test]
async fn scenario_failed_delete_keeps_doctor_and_shows_server_message() {
    let mut console = Console::start().await;

    console.key(KeyCode::Char('d')).await;
    console.key(KeyCode::Char('y')).await;

    assert!(console.app.directory.roster().get(&"d1".into()).is_some());
    assert!(!console.app.directory.is_deleting(&"d1".into()));
    assert_eq!(console.latest_notice(), Some(Notice::error("in use")));
}
