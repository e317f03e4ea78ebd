//! `reqwest`-backed [`Backend`].
//!
//! reqwest compiles to the browser's `fetch` on wasm32 and to its native
//! client elsewhere, multipart included, so one implementation covers both
//! targets.

use crate::backend::{Backend, FormPayload};
use crate::config::ApiConfig;
use crate::error::Error;

#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn bearer(
        request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    fn check(response: &reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status(status.as_u16()))
        }
    }
}

impl Backend for HttpBackend {
    async fn get(&self, path: &str, token: Option<&str>) -> Result<String, Error> {
        let response = Self::bearer(self.http.get(self.url(path)), token)
            .send()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;
        Self::check(&response)?;
        response
            .text()
            .await
            .map_err(|err| Error::Network(err.to_string()))
    }

    async fn post_form(
        &self,
        path: &str,
        form: FormPayload,
        token: Option<&str>,
    ) -> Result<(), Error> {
        let mut multipart = reqwest::multipart::Form::new();
        for (name, value) in form.texts {
            multipart = multipart.text(name, value);
        }
        if let Some((name, file)) = form.file {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.filename)
                .mime_str(&file.mime)
                .map_err(|err| Error::Network(err.to_string()))?;
            multipart = multipart.part(name, part);
        }

        let response = Self::bearer(self.http.post(self.url(path)), token)
            .multipart(multipart)
            .send()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;
        Self::check(&response)
    }

    async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), Error> {
        let response = Self::bearer(self.http.delete(self.url(path)), token)
            .send()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;
        Self::check(&response)
    }
}
