#![allow(dead_code)]

//! In-process stub ERP resource server for integration tests.
//!
//! Serves the four-collection CRUD contract the real client expects:
//! `GET/POST /{collection}` and `PUT/DELETE /{collection}/{id}`, JSON
//! bodies, server-assigned string ids on create. Failures can be armed
//! per method/collection (optionally matching a body substring) to
//! exercise the error paths.

use std::collections::HashMap;
use std::sync::{Mutex, mpsc};
use std::thread;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Clone)]
struct Failure {
    method: &'static str,
    collection: String,
    body_contains: Option<String>,
}

#[derive(Default)]
struct StubState {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    failures: Mutex<Vec<Failure>>,
}

impl StubState {
    fn injected(&self, method: &'static str, collection: &str, body: &str) -> bool {
        self.failures.lock().unwrap().iter().any(|f| {
            f.method == method
                && f.collection == collection
                && f.body_contains
                    .as_deref()
                    .is_none_or(|needle| body.contains(needle))
        })
    }
}

pub struct StubErp {
    pub base_url: String,
    state: web::Data<StubState>,
}

impl StubErp {
    /// Starts the server on its own thread, bound to an ephemeral port.
    pub fn spawn() -> Self {
        let state = web::Data::new(StubState::default());
        let app_state = state.clone();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(app_state.clone())
                        .route("/{collection}", web::get().to(list))
                        .route("/{collection}", web::post().to(create))
                        .route("/{collection}/{id}", web::put().to(replace))
                        .route("/{collection}/{id}", web::delete().to(remove))
                })
                .workers(1)
                .bind(("127.0.0.1", 0))
                .expect("bind stub server");
                let port = server.addrs()[0].port();
                tx.send(port).expect("report stub port");
                server.run().await.expect("run stub server");
            });
        });

        let port = rx.recv().expect("stub server failed to start");
        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            state,
        }
    }

    /// Appends one entity (with its id already set) to a collection.
    pub fn seed(&self, collection: &str, entity: Value) {
        self.state
            .collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(entity);
    }

    /// Replaces a collection wholesale, as if the server state changed
    /// behind the client's back.
    pub fn set_collection(&self, collection: &str, entities: Vec<Value>) {
        self.state
            .collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), entities);
    }

    pub fn server_items(&self, collection: &str) -> Vec<Value> {
        self.state
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Arms a 500 response for every matching request until cleared.
    /// `body_contains` further narrows the match to requests whose JSON
    /// body contains the substring.
    pub fn arm_failure(
        &self,
        method: &'static str,
        collection: &str,
        body_contains: Option<&str>,
    ) {
        self.state.failures.lock().unwrap().push(Failure {
            method,
            collection: collection.to_string(),
            body_contains: body_contains.map(str::to_string),
        });
    }

    pub fn clear_failures(&self) {
        self.state.failures.lock().unwrap().clear();
    }
}

async fn list(state: web::Data<StubState>, path: web::Path<String>) -> HttpResponse {
    let collection = path.into_inner();
    if state.injected("GET", &collection, "") {
        return HttpResponse::InternalServerError().body("injected failure");
    }
    let map = state.collections.lock().unwrap();
    HttpResponse::Ok().json(map.get(&collection).cloned().unwrap_or_default())
}

async fn create(
    state: web::Data<StubState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let collection = path.into_inner();
    let mut entity = body.into_inner();
    if state.injected("POST", &collection, &entity.to_string()) {
        return HttpResponse::InternalServerError().body("injected failure");
    }
    entity["id"] = json!(Uuid::new_v4().to_string());
    state
        .collections
        .lock()
        .unwrap()
        .entry(collection)
        .or_default()
        .push(entity.clone());
    HttpResponse::Created().json(entity)
}

async fn replace(
    state: web::Data<StubState>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> HttpResponse {
    let (collection, id) = path.into_inner();
    let entity = body.into_inner();
    if state.injected("PUT", &collection, &entity.to_string()) {
        return HttpResponse::InternalServerError().body("injected failure");
    }
    let mut map = state.collections.lock().unwrap();
    if let Some(items) = map.get_mut(&collection) {
        if let Some(slot) = items
            .iter_mut()
            .find(|item| item["id"].as_str() == Some(id.as_str()))
        {
            *slot = entity.clone();
        }
    }
    // Unknown ids are still acknowledged; the backing service upserted
    // nothing but answered 200 regardless.
    HttpResponse::Ok().json(entity)
}

async fn remove(state: web::Data<StubState>, path: web::Path<(String, String)>) -> HttpResponse {
    let (collection, id) = path.into_inner();
    if state.injected("DELETE", &collection, "") {
        return HttpResponse::InternalServerError().body("injected failure");
    }
    let mut map = state.collections.lock().unwrap();
    if let Some(items) = map.get_mut(&collection) {
        items.retain(|item| item["id"].as_str() != Some(id.as_str()));
    }
    HttpResponse::NoContent().finish()
}

/// Staff entity in wire shape, for seeding.
pub fn staff_json(id: &str, first: &str, department: &str) -> Value {
    json!({
        "id": id,
        "firstName": first,
        "lastName": "Doe",
        "email": format!("{}@corp.test", first.to_lowercase()),
        "phone": "+15550100",
        "department": department,
        "dateJoined": "2024-01-01",
        "isActive": true,
    })
}

pub fn attendance_json(id: &str, staff_id: &str, date: &str, present: bool) -> Value {
    json!({
        "id": id,
        "staffId": staff_id,
        "date": date,
        "isPresent": present,
    })
}

pub fn leave_json(id: &str, staff_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "staffId": staff_id,
        "startDate": "2024-05-20",
        "endDate": "2024-05-22",
        "reason": "family trip",
        "status": status,
    })
}

pub fn onboarding_json(id: &str, staff_id: &str, checklist_status: &str) -> Value {
    json!({
        "id": id,
        "staffId": staff_id,
        "startDate": "2024-05-01",
        "checklistStatus": checklist_status,
    })
}
