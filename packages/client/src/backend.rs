//! Transport seam between the view layer and the REST backend.
//!
//! [`Backend`] is the only way the rest of the crate reaches the network, so
//! the same admin and listing logic runs against [`crate::HttpBackend`] in
//! the browser and [`crate::MemoryBackend`] in the test suites.

use std::future::Future;

use crate::error::Error;

/// One selected file staged for upload.
///
/// The bytes are read when the user picks the file; the payload crosses the
/// seam as plain data so no platform file handle leaks into this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Platform-neutral multipart body: text parts plus at most one file part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    pub texts: Vec<(String, String)>,
    /// Part name and the staged file.
    pub file: Option<(String, FilePart)>,
}

impl FormPayload {
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.texts.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.file = Some((name.into(), part));
        self
    }
}

/// Async interface to the content API.
///
/// Paths are relative to the API base (e.g. `"/api/blogs"`). `token`, when
/// present, is attached as a bearer credential.
pub trait Backend {
    /// GET a collection; returns the body text of a 2xx response.
    fn get(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> impl Future<Output = Result<String, Error>>;

    /// POST a multipart create request.
    fn post_form(
        &self,
        path: &str,
        form: FormPayload,
        token: Option<&str>,
    ) -> impl Future<Output = Result<(), Error>>;

    /// DELETE a single entity.
    fn delete(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> impl Future<Output = Result<(), Error>>;
}
