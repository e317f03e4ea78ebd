//! In-memory [`Backend`] for the test suites and offline development.
//!
//! Holds one JSON collection per endpoint, records every request it sees and
//! can be told to fail specific calls, so tests can assert exactly which
//! requests an operation issued.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::backend::{Backend, FormPayload};
use crate::error::Error;

/// A request observed by [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub authorized: bool,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    log: Arc<Mutex<Vec<Recorded>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a collection, e.g. `seed("blogs", vec![json!({...})])`.
    pub fn seed(&self, endpoint: &str, records: Vec<Value>) {
        self.collections
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), records);
    }

    /// Make a specific call fail with a 500, e.g. `fail("POST /api/blogs")`.
    pub fn fail(&self, call: &str) {
        self.failing.lock().unwrap().insert(call.to_string());
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    /// Current records of a collection.
    pub fn records(&self, endpoint: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .unwrap_or_default()
    }

    fn observe(&self, method: &'static str, path: &str, token: Option<&str>) -> Result<(), Error> {
        self.log.lock().unwrap().push(Recorded {
            method,
            path: path.to_string(),
            authorized: token.is_some(),
        });
        if self.failing.lock().unwrap().contains(&format!("{method} {path}")) {
            return Err(Error::Status(500));
        }
        Ok(())
    }
}

/// `/api/{endpoint}` or `/api/{endpoint}/{id}`.
fn split_path(path: &str) -> (&str, Option<&str>) {
    let rest = path.strip_prefix("/api/").unwrap_or(path);
    match rest.split_once('/') {
        Some((endpoint, id)) => (endpoint, Some(id)),
        None => (rest, None),
    }
}

impl Backend for MemoryBackend {
    async fn get(&self, path: &str, token: Option<&str>) -> Result<String, Error> {
        self.observe("GET", path, token)?;
        let (endpoint, _) = split_path(path);
        let records = self.records(endpoint);
        serde_json::to_string(&records).map_err(|err| Error::Decode(err.to_string()))
    }

    async fn post_form(
        &self,
        path: &str,
        form: FormPayload,
        token: Option<&str>,
    ) -> Result<(), Error> {
        self.observe("POST", path, token)?;
        let (endpoint, _) = split_path(path);

        let next = {
            let mut counter = self.next_id.lock().unwrap();
            *counter += 1;
            *counter
        };
        let mut record = json!({ "_id": format!("mem-{next}") });
        for (name, value) in form.texts {
            record[name] = Value::String(value);
        }
        if let Some((name, file)) = form.file {
            record[name] = Value::String(format!("/uploads/{}", file.filename));
        }

        self.collections
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), Error> {
        self.observe("DELETE", path, token)?;
        let (endpoint, id) = split_path(path);
        let Some(id) = id else {
            return Err(Error::Status(404));
        };

        let mut collections = self.collections.lock().unwrap();
        let records = collections.entry(endpoint.to_string()).or_default();
        let before = records.len();
        records.retain(|record| record["_id"] != id);
        if records.len() == before {
            return Err(Error::Status(404));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FilePart;

    #[tokio::test]
    async fn seeded_collection_round_trips() {
        let backend = MemoryBackend::new();
        backend.seed("blogs", vec![json!({ "_id": "b1", "title": "First" })]);

        let body = backend.get("/api/blogs", None).await.unwrap();
        let records: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["_id"], "b1");
    }

    #[tokio::test]
    async fn created_record_gets_an_id_and_an_upload_url() {
        let backend = MemoryBackend::new();
        let form = FormPayload::default().text("title", "New").file(
            "image",
            FilePart {
                filename: "a.png".to_string(),
                mime: "image/png".to_string(),
                bytes: vec![0],
            },
        );
        backend.post_form("/api/blogs", form, Some("t")).await.unwrap();

        let records = backend.records("blogs");
        assert_eq!(records[0]["title"], "New");
        assert_eq!(records[0]["image"], "/uploads/a.png");
        assert!(records[0]["_id"].as_str().unwrap().starts_with("mem-"));
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_target() {
        let backend = MemoryBackend::new();
        backend.seed(
            "contacts",
            vec![json!({ "_id": "c1" }), json!({ "_id": "c2" })],
        );

        backend.delete("/api/contacts/c1", None).await.unwrap();
        let records = backend.records("contacts");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["_id"], "c2");

        let missing = backend.delete("/api/contacts/c1", None).await;
        assert_eq!(missing, Err(Error::Status(404)));
    }

    #[tokio::test]
    async fn injected_failures_surface_as_status_errors() {
        let backend = MemoryBackend::new();
        backend.fail("GET /api/blogs");
        assert_eq!(
            backend.get("/api/blogs", None).await,
            Err(Error::Status(500))
        );
        // The failed call is still recorded.
        assert_eq!(backend.requests().len(), 1);
    }
}
