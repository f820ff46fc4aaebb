//! axum stand-in for the car REST backend.
//!
//! Shared with the `garage` CLI tests through a `#[path]` module.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    List(Option<String>),
    Get(i64),
    Create(Value),
    Update(i64, Value),
    Delete(i64),
}

#[derive(Default)]
struct StubState {
    cars: Vec<Value>,
    next_id: i64,
    seen: Vec<Seen>,
    fail_list: bool,
}

#[derive(Clone, Default)]
pub struct StubBackend {
    state: Arc<Mutex<StubState>>,
}

impl StubBackend {
    pub fn with_cars(cars: Vec<Value>) -> Self {
        let next_id = cars
            .iter()
            .filter_map(|c| c["id"].as_i64())
            .max()
            .unwrap_or(0);
        Self {
            state: Arc::new(Mutex::new(StubState {
                cars,
                next_id,
                seen: Vec::new(),
                fail_list: false,
            })),
        }
    }

    /// Make `GET /cars/` answer 500 while the item routes keep working.
    pub fn with_failing_list(self) -> Self {
        self.state.lock().unwrap().fail_list = true;
        self
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.state.lock().unwrap().seen.clone()
    }

    pub fn cars(&self) -> Vec<Value> {
        self.state.lock().unwrap().cars.clone()
    }

    /// Serve on an ephemeral port and return the base URL.
    ///
    /// Besides `/cars/`, `/broken/cars/` answers 200 with a non-JSON body,
    /// `/failing/cars/` answers 500, `/no-content/cars/:id` deletes with
    /// 204 and `/empty/cars/:id` deletes with an empty 200.
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route("/cars/", get(list_cars).post(create_car))
            .route(
                "/cars/:id",
                get(get_car).put(update_car).delete(delete_car),
            )
            .route("/broken/cars/", get(|| async { "<html>not json</html>" }))
            .route(
                "/failing/cars/",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/no-content/cars/:id",
                delete(|| async { StatusCode::NO_CONTENT }),
            )
            .route("/empty/cars/:id", delete(|| async { StatusCode::OK }))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

pub fn car(id: i64, model: &str, year: i64, operational: bool) -> Value {
    json!({
        "id": id,
        "marka_model": model,
        "rok_produkcji": year,
        "czy_na_chodzie": operational,
    })
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "Car not found"})),
    )
        .into_response()
}

/// Mirrors the backend's body validation: all three fields present and a
/// plausible production year.
fn validate(body: &Value) -> Result<(), Response> {
    let missing: Vec<Value> = ["marka_model", "rok_produkcji", "czy_na_chodzie"]
        .iter()
        .filter(|field| body.get(**field).is_none())
        .map(|field| {
            json!({
                "loc": ["body", field],
                "msg": "Field required",
                "type": "missing",
            })
        })
        .collect();
    if !missing.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": missing })),
        )
            .into_response());
    }

    let year = body["rok_produkcji"].as_i64().unwrap_or(0);
    if !(1886..=2100).contains(&year) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "rok_produkcji invalid"})),
        )
            .into_response());
    }
    Ok(())
}

async fn list_cars(State(stub): State<StubBackend>, RawQuery(query): RawQuery) -> Response {
    let mut state = stub.state.lock().unwrap();
    state.seen.push(Seen::List(query.clone()));
    if state.fail_list {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "database unavailable"})),
        )
            .into_response();
    }

    let filter = query
        .unwrap_or_default()
        .split('&')
        .find_map(|pair| pair.strip_prefix("filter_type=").map(str::to_string))
        .unwrap_or_else(|| "all".to_string());
    let cars: Vec<Value> = state
        .cars
        .iter()
        .filter(|c| match filter.as_str() {
            "true" => c["czy_na_chodzie"] == json!(true),
            "false" => c["czy_na_chodzie"] == json!(false),
            _ => true,
        })
        .cloned()
        .collect();
    Json(cars).into_response()
}

async fn get_car(State(stub): State<StubBackend>, Path(id): Path<i64>) -> Response {
    let mut state = stub.state.lock().unwrap();
    state.seen.push(Seen::Get(id));
    match state.cars.iter().find(|c| c["id"] == json!(id)) {
        Some(car) => Json(car.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_car(State(stub): State<StubBackend>, Json(body): Json<Value>) -> Response {
    let mut state = stub.state.lock().unwrap();
    state.seen.push(Seen::Create(body.clone()));
    if let Err(rejection) = validate(&body) {
        return rejection;
    }

    state.next_id += 1;
    let mut car = body;
    car["id"] = json!(state.next_id);
    state.cars.push(car.clone());
    Json(car).into_response()
}

async fn update_car(
    State(stub): State<StubBackend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = stub.state.lock().unwrap();
    state.seen.push(Seen::Update(id, body.clone()));
    if let Err(rejection) = validate(&body) {
        return rejection;
    }

    match state.cars.iter_mut().find(|c| c["id"] == json!(id)) {
        Some(car) => {
            let mut updated = body;
            updated["id"] = json!(id);
            *car = updated.clone();
            Json(updated).into_response()
        }
        None => not_found(),
    }
}

async fn delete_car(State(stub): State<StubBackend>, Path(id): Path<i64>) -> Response {
    let mut state = stub.state.lock().unwrap();
    state.seen.push(Seen::Delete(id));
    let before = state.cars.len();
    state.cars.retain(|c| c["id"] != json!(id));
    if state.cars.len() == before {
        return not_found();
    }
    Json(json!({"message": "Car deleted successfully"})).into_response()
}
