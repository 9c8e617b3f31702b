//! In-process mock of the records backend.
//!
//! Serves the uniform REST contract over an in-memory JSON store:
//! `GET /{plural}`, `GET /{plural}/{id}`, `GET /{plural}/{parent}/{id}`,
//! `POST /{plural}` (assigns a uuid id, validates required fields),
//! `PUT /{plural}/{id}` (merges), `DELETE /{plural}/{id}`.

use acadia_gateway::{ClientConfig, RestClient, RestGateway};
use acadia_model::{EntityKind, Resource};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use url::Url;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::Filter;

type Store = Arc<DashMap<String, Vec<Value>>>;

static REQUIRED_FIELDS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("schools", vec!["school_name", "school_code"]),
        ("departments", vec!["department_name", "department_code", "school_id"]),
        ("programs", vec!["program_name", "program_code", "school_id"]),
        ("courses", vec!["course_name", "course_code", "program_id"]),
        ("lecturers", vec!["first_name", "last_name", "email_address"]),
        ("students", vec!["first_name", "surname", "email_address"]),
        ("admins", vec!["name", "email"]),
        (
            "assignments",
            vec!["lecturer_id", "course_id", "academic_year", "semester", "role"],
        ),
    ])
});

fn id_field(collection: &str) -> String {
    collection
        .parse::<EntityKind>()
        .map(|kind| format!("{}_id", kind.singular()))
        .unwrap_or_else(|_| "id".to_string())
}

fn ok(value: &impl serde::Serialize) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(value), StatusCode::OK)
}

fn created(value: &impl serde::Serialize) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(value), StatusCode::CREATED)
}

fn not_found() -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({"message": "not found"})),
        StatusCode::NOT_FOUND,
    )
}

fn bad_request(message: String) -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({"message": message})),
        StatusCode::BAD_REQUEST,
    )
}

fn handle_list(store: Store, collection: String) -> WithStatus<Json> {
    let rows = store.get(&collection).map(|r| r.clone()).unwrap_or_default();
    ok(&rows)
}

fn handle_by_parent(
    store: Store,
    collection: String,
    parent: String,
    parent_id: String,
) -> WithStatus<Json> {
    let field = format!("{parent}_id");
    let rows: Vec<Value> = store
        .get(&collection)
        .map(|rows| {
            rows.iter()
                .filter(|row| row.get(&field).and_then(Value::as_str) == Some(parent_id.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    ok(&rows)
}

fn handle_get_one(store: Store, collection: String, id: String) -> WithStatus<Json> {
    let field = id_field(&collection);
    store
        .get(&collection)
        .and_then(|rows| {
            rows.iter()
                .find(|row| row.get(&field).and_then(Value::as_str) == Some(id.as_str()))
                .cloned()
        })
        .map_or_else(not_found, |row| ok(&row))
}

fn handle_create(store: Store, collection: String, mut body: Value) -> WithStatus<Json> {
    let Some(fields) = body.as_object_mut() else {
        return bad_request("expected a JSON object".to_string());
    };
    if let Some(required) = REQUIRED_FIELDS.get(collection.as_str()) {
        for field in required {
            let missing = fields.get(*field).map_or(true, Value::is_null);
            if missing {
                return bad_request(format!("{field} is required"));
            }
        }
    }
    let now = chrono::Utc::now().to_rfc3339();
    fields.insert(id_field(&collection), json!(uuid::Uuid::new_v4().to_string()));
    fields.insert("created_at".to_string(), json!(now.clone()));
    fields.insert("updated_at".to_string(), json!(now));
    store.entry(collection).or_insert_with(Vec::new).push(body.clone());
    created(&body)
}

fn handle_update(store: Store, collection: String, id: String, body: Value) -> WithStatus<Json> {
    let Some(updates) = body.as_object() else {
        return bad_request("expected a JSON object".to_string());
    };
    let field = id_field(&collection);
    let Some(mut rows) = store.get_mut(&collection) else {
        return not_found();
    };
    let Some(row) = rows
        .iter_mut()
        .find(|row| row.get(&field).and_then(Value::as_str) == Some(id.as_str()))
    else {
        return not_found();
    };
    if let Some(target) = row.as_object_mut() {
        for (key, value) in updates {
            target.insert(key.clone(), value.clone());
        }
        target.insert(
            "updated_at".to_string(),
            json!(chrono::Utc::now().to_rfc3339()),
        );
    }
    ok(&row.clone())
}

fn handle_delete(store: Store, collection: String, id: String) -> WithStatus<Json> {
    let field = id_field(&collection);
    let Some(mut rows) = store.get_mut(&collection) else {
        return not_found();
    };
    let Some(position) = rows
        .iter()
        .position(|row| row.get(&field).and_then(Value::as_str) == Some(id.as_str()))
    else {
        return not_found();
    };
    rows.remove(position);
    ok(&json!({}))
}

fn routes(store: Store) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let with_store = warp::any().map(move || Arc::clone(&store));

    let list = warp::get()
        .and(with_store.clone())
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .map(handle_list);

    let by_parent = warp::get()
        .and(with_store.clone())
        .and(warp::path::param::<String>())
        .and(warp::path::param::<String>())
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .map(handle_by_parent);

    let get_one = warp::get()
        .and(with_store.clone())
        .and(warp::path::param::<String>())
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .map(handle_get_one);

    let create = warp::post()
        .and(with_store.clone())
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::body::json())
        .map(handle_create);

    let update = warp::put()
        .and(with_store.clone())
        .and(warp::path::param::<String>())
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::body::json())
        .map(handle_update);

    let delete = warp::delete()
        .and(with_store)
        .and(warp::path::param::<String>())
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .map(handle_delete);

    list.or(by_parent)
        .or(get_one)
        .or(create)
        .or(update)
        .or(delete)
}

/// A running mock backend bound to an ephemeral local port.
#[derive(Debug)]
pub struct MockApi {
    addr: SocketAddr,
    store: Store,
    shutdown: Option<oneshot::Sender<()>>,
    server: JoinHandle<()>,
}

impl MockApi {
    /// Start the mock backend. Must be called within a tokio runtime.
    #[must_use]
    pub fn spawn() -> Self {
        let store: Store = Arc::new(DashMap::new());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr, serve) = warp::serve(routes(Arc::clone(&store)))
            .bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                shutdown_rx.await.ok();
            });
        Self {
            addr,
            store,
            shutdown: Some(shutdown_tx),
            server: tokio::spawn(serve),
        }
    }

    /// Base URL clients should point at.
    #[must_use]
    pub fn base_url(&self) -> Url {
        format!("http://{}", self.addr)
            .parse()
            .expect("loopback address is a valid URL")
    }

    /// Client configuration pointing at this backend.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url()).expect("loopback base URL is usable")
    }

    /// REST gateway for one entity, wired to this backend.
    #[must_use]
    pub fn gateway<E: Resource>(&self) -> RestGateway<E> {
        let client = RestClient::new(&self.client_config()).expect("client builds");
        RestGateway::new(client)
    }

    /// Seed one typed record.
    pub fn seed<E: Resource>(&self, record: &E) {
        let value = serde_json::to_value(record).expect("fixture serializes");
        self.seed_json(E::KIND.collection(), value);
    }

    /// Seed one raw JSON record under a collection.
    pub fn seed_json(&self, collection: &str, record: Value) {
        self.store
            .entry(collection.to_string())
            .or_insert_with(Vec::new)
            .push(record);
    }

    /// Current rows of a collection, as stored.
    #[must_use]
    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.store
            .get(collection)
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.server.abort();
    }
}
