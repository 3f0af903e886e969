//! Authenticated session to a controller.
//!
//! Every request goes through the same loop: lazy login, CSRF and session cookies, re-login on
//! `401`, and retries on `419`/`5xx` once the controller reports itself up again.

mod builder;
mod options;

pub use builder::*;
pub use options::*;

use crate::errors::AviError;
use crate::models::InitialData;
use derivative::Derivative;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderName, HeaderValue, REFERER, SET_COOKIE};
use reqwest::{Method, StatusCode};
use retry::OperationResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError, RwLock};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

pub const LOGIN_URI: &str = "login";
pub const LOGOUT_URI: &str = "logout";
pub const CLUSTER_STATUS_URI: &str = "api/cluster/status";
pub const INITIAL_DATA_URI: &str = "api/initial-data";
pub const FILE_SERVICE_URI: &str = "api/fileservice";

const CSRF_TOKEN_COOKIE: &str = "csrftoken";
const SESSION_ID_COOKIE: &str = "sessionid";
const AVI_SESSION_ID_COOKIE: &str = "avi-sessionid";
const MAX_STATUS_CHECK_BACKOFF: Duration = Duration::from_secs(30);

static SENSITIVE_FIELDS_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = r#""(password|token|username)"\s*:\s*"(?:[^"\\]|\\.)*""#;
    Regex::new(pattern).unwrap()
});

#[derive(Clone, Default)]
struct Credentials {
    password: Option<String>,
    auth_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SessionCookies {
    csrf_token: Option<String>,
    session_id: Option<String>,
}

enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(multipart::Form),
}

struct RequestContext<'a> {
    tenant: Option<&'a str>,
    version: Option<&'a str>,
    request_id: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    fn new(options: &'a ApiOptions, version: Option<&'a str>) -> Self {
        RequestContext {
            tenant: options.tenant.as_deref(),
            version,
            request_id: options.request_id.as_deref(),
        }
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct AviSession {
    client: Client,
    prefix: String,
    username: String,
    #[derivative(Debug = "ignore")]
    credentials: RwLock<Credentials>,
    #[derivative(Debug = "ignore")]
    refresh_auth_token: Option<RefreshAuthToken>,
    tenant: RwLock<String>,
    version: RwLock<String>,
    #[derivative(Debug = "ignore")]
    cookies: Mutex<SessionCookies>,
    user_headers: Vec<(String, String)>,
    lazy_authentication: bool,
    max_api_retries: u32,
    api_retry_interval: Duration,
    status_check: ControllerStatusCheck,
}

impl AviSession {
    pub fn builder<C: Into<String>, U: Into<String>>(controller: C, username: U) -> AviSessionBuilder {
        AviSessionBuilder::new(controller, username)
    }

    /// Base URL of the controller, ending with `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn tenant(&self) -> String {
        self.tenant.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_tenant<T: Into<String>>(&self, tenant: T) {
        *self.tenant.write().unwrap_or_else(PoisonError::into_inner) = tenant.into();
    }

    pub fn version(&self) -> String {
        self.version.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_version<T: Into<String>>(&self, version: T) {
        *self.version.write().unwrap_or_else(PoisonError::into_inner) = version.into();
    }

    /// True once the controller handed out both the CSRF token and the session id.
    pub fn is_authenticated(&self) -> bool {
        self.cookies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .session_id
            .is_some()
    }

    /// Logs in with the password, or with the auth token when one is configured.
    pub fn login(&self) -> Result<(), AviError> {
        if let Some(refresh_auth_token) = &self.refresh_auth_token {
            let token = refresh_auth_token()?;
            self.credentials
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .auth_token = Some(token);
        }

        let payload = {
            let credentials = self.credentials.read().unwrap_or_else(PoisonError::into_inner);
            match &credentials.auth_token {
                Some(token) => json!({"username": self.username, "token": token}),
                None => json!({
                    "username": self.username,
                    "password": credentials.password.clone().unwrap_or_default(),
                }),
            }
        };

        match self.post_raw(LOGIN_URI, &payload, &ApiOptions::default()) {
            Ok(_) => {
                info!("logged in to controller {} as {}", self.prefix, self.username);
                Ok(())
            }
            Err(e) => {
                error!("response error: {}", e);
                Err(e)
            }
        }
    }

    /// Posts `logout` once, without retry, and forgets the session cookies.
    pub fn logout(&self) -> Result<(), AviError> {
        let url = format!("{}{}", self.prefix, LOGOUT_URI);
        let options = ApiOptions::default();
        let context = RequestContext::new(&options, None);
        self.new_request(&Method::POST, &url, LOGOUT_URI, &context, RequestBody::Empty)
            .send()
            .map_err(|e| AviError::transport(Method::POST.as_str(), &url, &e))?;

        *self.cookies.lock().unwrap_or_else(PoisonError::into_inner) = SessionCookies::default();
        Ok(())
    }

    /// Logs out and keeps `password` for the next login.
    pub fn reset_password<T: Into<String>>(&self, password: T) {
        if let Err(e) = self.logout() {
            warn!("logout before password reset failed: {}", e);
        }
        self.credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .password = Some(password.into());
    }

    pub fn get_raw(&self, uri: &str, options: &ApiOptions) -> Result<Vec<u8>, AviError> {
        self.execute(Method::GET, uri, None, options, None)
    }

    /// GET decoded into `T`. An empty body decodes as JSON `null`.
    pub fn get<T: DeserializeOwned>(&self, uri: &str, options: &ApiOptions) -> Result<T, AviError> {
        let body = self.get_raw(uri, options)?;
        decode_body(Method::GET.as_str(), &self.url(uri), &body)
    }

    pub fn post_raw<P: Serialize + ?Sized>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Vec<u8>, AviError> {
        let payload = self.encode_payload(&Method::POST, uri, payload)?;
        self.execute(Method::POST, uri, Some(payload), options, None)
    }

    pub fn post<P: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<T, AviError> {
        let body = self.post_raw(uri, payload, options)?;
        decode_body(Method::POST.as_str(), &self.url(uri), &body)
    }

    pub fn put_raw<P: Serialize + ?Sized>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<Vec<u8>, AviError> {
        let payload = self.encode_payload(&Method::PUT, uri, payload)?;
        self.execute(Method::PUT, uri, Some(payload), options, None)
    }

    pub fn put<P: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<T, AviError> {
        let body = self.put_raw(uri, payload, options)?;
        decode_body(Method::PUT.as_str(), &self.url(uri), &body)
    }

    /// PATCH with body `{"<op>": payload}`.
    pub fn patch<P: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        uri: &str,
        payload: &P,
        patch_op: PatchOp,
        options: &ApiOptions,
    ) -> Result<T, AviError> {
        let value = serde_json::to_value(payload).map_err(|e| AviError::Serialization {
            verb: Method::PATCH.to_string(),
            url: self.url(uri),
            raw_error_message: e.to_string(),
        })?;
        debug!("PATCH op {} on {}", patch_op, uri);
        let patch_payload = json!({ patch_op.as_str(): value });
        let payload = self.encode_payload(&Method::PATCH, uri, &patch_payload)?;
        let body = self.execute(Method::PATCH, uri, Some(payload), options, None)?;
        decode_body(Method::PATCH.as_str(), &self.url(uri), &body)
    }

    pub fn delete(&self, uri: &str, options: &ApiOptions) -> Result<(), AviError> {
        self.execute(Method::DELETE, uri, None, options, None).map(|_| ())
    }

    pub fn delete_with_payload<P: Serialize + ?Sized>(
        &self,
        uri: &str,
        payload: &P,
        options: &ApiOptions,
    ) -> Result<(), AviError> {
        let payload = self.encode_payload(&Method::DELETE, uri, payload)?;
        self.execute(Method::DELETE, uri, Some(payload), options, None)
            .map(|_| ())
    }

    /// One page of a collection. A `cluster?` uri, params included, answers a single object, reported with count 1.
    pub fn get_collection_raw(&self, uri: &str, options: &ApiOptions) -> Result<AviCollectionResult, AviError> {
        let body = self.get_raw(uri, options)?;
        let full_uri = options.apply_params(uri);
        let url = self.url(&full_uri);

        if is_cluster_uri(&full_uri) {
            return Ok(AviCollectionResult {
                count: 1,
                results: decode_body(Method::GET.as_str(), &url, &body)?,
                next: None,
            });
        }

        decode_body(Method::GET.as_str(), &url, &body)
    }

    /// One page of a collection decoded into `T`, empty when the count is 0.
    pub fn get_collection<T: DeserializeOwned>(&self, uri: &str, options: &ApiOptions) -> Result<Vec<T>, AviError> {
        let page = self.get_collection_raw(uri, options)?;
        self.collection_results(uri, page.count, page.results)
    }

    /// Every page of a collection, following `next` until the last one.
    pub fn get_collection_all<T: DeserializeOwned>(&self, uri: &str, options: &ApiOptions) -> Result<Vec<T>, AviError> {
        let mut items: Vec<T> = vec![];
        let mut page = self.get_collection_raw(uri, options)?;
        let mut page_uri = uri.to_string();
        let next_options = ApiOptions {
            params: vec![],
            ..options.clone()
        };

        loop {
            items.extend(self.collection_results::<T>(&page_uri, page.count, page.results)?);

            match page.next.filter(|next| !next.is_empty()) {
                Some(next) => {
                    page_uri = self.relative_uri(&next);
                    debug!("following collection cursor {}", page_uri);
                    page = self.get_collection_raw(&page_uri, &next_options)?;
                }
                None => return Ok(items),
            }
        }
    }

    /// `api/<object type>?name=<name>` plus the cloud, skip default and include name filters.
    pub fn get_uri(&self, object_type: &str, options: &ApiOptions) -> Result<String, AviError> {
        let name = options
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AviError::MissingName {
                object_type: object_type.to_string(),
            })?;

        let mut uri = format!("api/{}?name={}", object_type, urlencoding::encode(name));
        if let Some(cloud) = options.cloud.as_deref().filter(|cloud| !cloud.is_empty()) {
            uri.push_str(&format!("&cloud={}", urlencoding::encode(cloud)));
        } else if let Some(cloud_uuid) = options.cloud_uuid.as_deref().filter(|uuid| !uuid.is_empty()) {
            uri.push_str(&format!("&cloud_ref.uuid={}", urlencoding::encode(cloud_uuid)));
        }
        if options.skip_default {
            uri.push_str("&skip_default=true");
        }
        if options.include_name {
            uri.push_str("&include_name=true");
        }

        Ok(uri)
    }

    /// The single object matching `options.name`.
    pub fn get_object<T: DeserializeOwned>(&self, object_type: &str, options: &ApiOptions) -> Result<T, AviError> {
        let uri = self.get_uri(object_type, options)?;
        let result = self.get_collection_raw(&uri, options)?;
        let url = self.url(&uri);
        let name = options.name.clone().unwrap_or_default();

        if is_cluster_uri(&options.apply_params(&uri)) {
            return serde_json::from_value(result.results)
                .map_err(|e| AviError::deserialization(Method::GET.as_str(), &url, &e));
        }

        match result.count {
            0 => Err(AviError::ObjectNotFound {
                object_type: object_type.to_string(),
                name,
            }),
            1 => {
                let mut results: Vec<Value> = serde_json::from_value(result.results)
                    .map_err(|e| AviError::deserialization(Method::GET.as_str(), &url, &e))?;
                match results.pop() {
                    Some(object) => serde_json::from_value(object)
                        .map_err(|e| AviError::deserialization(Method::GET.as_str(), &url, &e)),
                    None => Err(AviError::ObjectNotFound {
                        object_type: object_type.to_string(),
                        name,
                    }),
                }
            }
            _ => Err(AviError::MultipleObjectsFound {
                object_type: object_type.to_string(),
                name,
            }),
        }
    }

    pub fn get_object_by_name<T: DeserializeOwned>(
        &self,
        object_type: &str,
        name: &str,
        options: &ApiOptions,
    ) -> Result<T, AviError> {
        self.get_object(object_type, &options.clone().name(name))
    }

    /// `version.Version` of `api/initial-data`.
    pub fn get_controller_version(&self) -> Result<String, AviError> {
        let initial_data: InitialData = self.get(INITIAL_DATA_URI, &ApiOptions::default())?;
        initial_data
            .version
            .and_then(|version| version.version)
            .ok_or_else(|| AviError::Deserialization {
                verb: Method::GET.to_string(),
                url: self.url(INITIAL_DATA_URI),
                raw_error_message: "missing version.Version".to_string(),
            })
    }

    /// Switches the `X-Avi-Version` of this session to the controller's own version.
    pub fn sync_version_with_controller(&self) -> Result<String, AviError> {
        let version = self.get_controller_version()?;
        info!("using controller version {} for {}", version, self.prefix);
        self.set_version(version.clone());
        Ok(version)
    }

    /// Polls `api/cluster/status` until the controller answers something other than 500, 502 or 503.
    pub fn check_controller_status(&self) -> Result<(), AviError> {
        let (count, interval) = match self.status_check {
            ControllerStatusCheck::Enabled { count, interval } => (count, interval),
            ControllerStatusCheck::Disabled => (DEFAULT_CONTROLLER_STATUS_CHECK_COUNT, None),
        };
        let url = self.url(CLUSTER_STATUS_URI);
        let delays = (0..count.saturating_sub(1)).map(move |round| interval.unwrap_or_else(|| status_check_backoff(round)));

        let result = retry::retry_with_index(delays, |round| match self.client.get(&url).send() {
            Ok(response) if controller_is_up(response.status()) => OperationResult::Ok(()),
            Ok(response) => {
                info!(
                    "controller {} is not up yet, status code {}, round {}",
                    url,
                    response.status().as_u16(),
                    round
                );
                OperationResult::Retry(format!("status code {}", response.status().as_u16()))
            }
            Err(e) => {
                error!("controller status check on {} failed, round {}: {}", url, round, e);
                OperationResult::Retry(e.to_string())
            }
        });

        match result {
            Ok(()) => Ok(()),
            Err(retry::Error { error, .. }) => {
                error!("controller {} is still down after {} checks, last error: {}", url, count, error);
                Err(AviError::ControllerUnavailable { url, attempts: count })
            }
        }
    }

    /// Uploads the file at `path` to `api/fileservice/<uri>`.
    pub fn upload_file(&self, uri: &str, path: &Path, options: &ApiOptions) -> Result<(), AviError> {
        let file_uri = format!("{FILE_SERVICE_URI}/{uri}");
        let url = self.url(&file_uri);
        let content = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());
        let controller_uri = format!("controller://{}", uri.split('?').next().unwrap_or_default());

        let context = RequestContext::new(options, None);
        let response = self.rest_request(&Method::POST, &file_uri, &context, || {
            let part = multipart::Part::bytes(content.clone()).file_name(file_name.clone());
            Ok(RequestBody::Multipart(
                multipart::Form::new()
                    .part("file", part)
                    .text("uri", controller_uri.clone()),
            ))
        })?;
        self.fetch_body(Method::POST.as_str(), &url, response)?;

        info!("uploaded {} to {}", path.display(), url);
        Ok(())
    }

    /// Streams `api/fileservice/<uri>` into `writer`, returns the number of bytes written.
    pub fn download_file<W: Write + ?Sized>(
        &self,
        uri: &str,
        writer: &mut W,
        options: &ApiOptions,
    ) -> Result<u64, AviError> {
        let file_uri = format!("{FILE_SERVICE_URI}/{}", options.apply_params(uri));
        let url = self.url(&file_uri);
        let context = RequestContext::new(options, None);
        let mut response = self.rest_request(&Method::GET, &file_uri, &context, || Ok(RequestBody::Empty))?;

        if !response.status().is_success() {
            return Err(read_error(Method::GET.as_str(), &url, response));
        }

        response.copy_to(writer).map_err(|e| AviError::Io {
            raw_error_message: e.to_string(),
        })
    }

    /// Runs one JSON request with an optional `X-Avi-Version` override and returns the body.
    pub(crate) fn execute(
        &self,
        method: Method,
        uri: &str,
        payload: Option<Vec<u8>>,
        options: &ApiOptions,
        version: Option<&str>,
    ) -> Result<Vec<u8>, AviError> {
        let uri = options.apply_params(uri);
        let url = self.url(&uri);
        let context = RequestContext::new(options, version);

        let response = self.rest_request(&method, &uri, &context, || {
            Ok(match &payload {
                Some(payload) => RequestBody::Json(payload.clone()),
                None => RequestBody::Empty,
            })
        })?;

        self.fetch_body(method.as_str(), &url, response)
    }

    pub(crate) fn encode_payload<P: Serialize + ?Sized>(
        &self,
        method: &Method,
        uri: &str,
        payload: &P,
    ) -> Result<Vec<u8>, AviError> {
        serde_json::to_vec(payload).map_err(|e| AviError::Serialization {
            verb: method.to_string(),
            url: self.url(uri),
            raw_error_message: e.to_string(),
        })
    }

    fn url(&self, uri: &str) -> String {
        format!("{}{}", self.prefix, uri)
    }

    /// `next` cursors are absolute URLs, requests need them relative to the prefix.
    fn relative_uri(&self, next: &str) -> String {
        if let Some(uri) = next.strip_prefix(&self.prefix) {
            return uri.to_string();
        }

        match Url::parse(next) {
            Ok(url) => {
                let path = url.path().trim_start_matches('/');
                match url.query() {
                    Some(query) => format!("{path}?{query}"),
                    None => path.to_string(),
                }
            }
            Err(_) => next.trim_start_matches('/').to_string(),
        }
    }

    fn collection_results<T: DeserializeOwned>(&self, uri: &str, count: i64, results: Value) -> Result<Vec<T>, AviError> {
        if count == 0 || results.is_null() {
            return Ok(vec![]);
        }
        serde_json::from_value(results).map_err(|e| AviError::deserialization(Method::GET.as_str(), &self.url(uri), &e))
    }

    fn rest_request<F>(
        &self,
        method: &Method,
        uri: &str,
        context: &RequestContext,
        body: F,
    ) -> Result<Response, AviError>
    where
        F: Fn() -> Result<RequestBody, AviError>,
    {
        let url = self.url(uri);
        let verb = method.as_str();
        let mut last_error: Option<AviError> = None;
        let mut attempt: u32 = 0;

        loop {
            self.wait_before_attempt(attempt, verb, &url, last_error.take())?;

            if self.lazy_authentication && !self.is_authenticated() && !(uri.is_empty() || uri == LOGIN_URI) {
                self.login()?;
            }

            let request = self.new_request(method, &url, uri, context, body()?);
            let failure = match request.send() {
                Err(e) => {
                    error!("client error for URI: {}. Error: {}", uri, e);
                    AviError::transport(verb, &url, &e)
                }
                Ok(response) => {
                    let status = response.status();
                    info!(
                        "Req for {} uri {} tenant {} RespCode {}",
                        verb,
                        url,
                        context.tenant.map(|t| t.to_string()).unwrap_or_else(|| self.tenant()),
                        status.as_u16()
                    );

                    if uri == LOGIN_URI {
                        self.collect_cookies(&response);
                    }

                    if status == StatusCode::INTERNAL_SERVER_ERROR {
                        return Err(read_error(verb, &url, response));
                    }

                    if status == StatusCode::UNAUTHORIZED && uri != LOGIN_URI {
                        info!("retrying url {}; retry {} due to Status Code {}", url, attempt, status.as_u16());
                        self.login()?;
                    } else if is_retryable_status(status) {
                        info!("retrying url {}; retry {} due to Status Code {}", url, attempt, status.as_u16());
                    } else {
                        return Ok(response);
                    }

                    AviError::Controller {
                        verb: verb.to_string(),
                        url: url.clone(),
                        status: status.as_u16(),
                        message: None,
                    }
                }
            };

            if self.status_check == ControllerStatusCheck::Disabled {
                error!("controller status check is disabled for this session, not going to retry");
                return Err(failure);
            }

            self.check_controller_status()?;
            if uri != LOGIN_URI {
                self.login()?;
            }

            last_error = Some(failure);
            attempt += 1;
        }
    }

    fn wait_before_attempt(
        &self,
        attempt: u32,
        verb: &str,
        url: &str,
        last_error: Option<AviError>,
    ) -> Result<(), AviError> {
        if attempt == 0 {
            return Ok(());
        }

        if attempt < self.max_api_retries {
            thread::sleep(self.api_retry_interval);
            return Ok(());
        }

        match last_error {
            Some(last_error) => {
                error!("aborting after {} times. Last error {}", attempt, last_error);
                Err(last_error)
            }
            None => Err(AviError::RetriesExhausted {
                verb: verb.to_string(),
                url: url.to_string(),
                attempts: attempt,
            }),
        }
    }

    fn new_request(
        &self,
        method: &Method,
        url: &str,
        uri: &str,
        context: &RequestContext,
        body: RequestBody,
    ) -> RequestBuilder {
        let mut headers = HeaderMap::new();
        if !matches!(body, RequestBody::Multipart(_)) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        for (key, value) in &self.user_headers {
            insert_header(&mut headers, key, value);
        }
        if let Some(request_id) = context.request_id {
            insert_header(&mut headers, "X-Request-ID", request_id);
        }
        let version = context.version.map(|v| v.to_string()).unwrap_or_else(|| self.version());
        insert_header(&mut headers, "X-Avi-Version", &version);
        let tenant = context.tenant.map(|t| t.to_string()).unwrap_or_else(|| self.tenant());
        if !tenant.is_empty() {
            insert_header(&mut headers, "X-Avi-Tenant", &tenant);
        }
        if let Ok(referer) = HeaderValue::from_str(&self.prefix) {
            headers.insert(REFERER, referer);
        }

        if !uri.ends_with(LOGIN_URI) {
            let cookies = self.cookies.lock().unwrap_or_else(PoisonError::into_inner).clone();
            let mut cookie_pairs: Vec<String> = vec![];
            if let Some(csrf_token) = &cookies.csrf_token {
                insert_header(&mut headers, "X-CSRFToken", csrf_token);
                cookie_pairs.push(format!("{CSRF_TOKEN_COOKIE}={csrf_token}"));
            }
            if let Some(session_id) = &cookies.session_id {
                cookie_pairs.push(format!("{SESSION_ID_COOKIE}={session_id}"));
                cookie_pairs.push(format!("{AVI_SESSION_ID_COOKIE}={session_id}"));
            }
            if !cookie_pairs.is_empty() {
                insert_header(&mut headers, COOKIE.as_str(), &cookie_pairs.join("; "));
            }
        }

        let request = self.client.request(method.clone(), url).headers(headers);
        match body {
            RequestBody::Empty => request,
            RequestBody::Json(payload) => {
                debug!(
                    "{} {} payload: {}",
                    method,
                    url,
                    redact_sensitive_fields(&String::from_utf8_lossy(&payload))
                );
                request.body(payload)
            }
            RequestBody::Multipart(form) => request.multipart(form),
        }
    }

    /// Keeps the CSRF token and session id only when the response carries both.
    fn collect_cookies(&self, response: &Response) {
        let mut csrf_token: Option<String> = None;
        let mut session_id: Option<String> = None;

        for header in response.headers().get_all(SET_COOKIE) {
            let Some((name, value)) = header
                .to_str()
                .ok()
                .and_then(|cookie| cookie.split(';').next())
                .and_then(|pair| pair.split_once('='))
            else {
                continue;
            };

            match name.trim() {
                CSRF_TOKEN_COOKIE => csrf_token = Some(value.trim().to_string()),
                SESSION_ID_COOKIE | AVI_SESSION_ID_COOKIE => session_id = Some(value.trim().to_string()),
                _ => {}
            }
        }

        if let (Some(csrf_token), Some(session_id)) = (csrf_token, session_id) {
            if !csrf_token.is_empty() && !session_id.is_empty() {
                *self.cookies.lock().unwrap_or_else(PoisonError::into_inner) = SessionCookies {
                    csrf_token: Some(csrf_token),
                    session_id: Some(session_id),
                };
            }
        }
    }

    /// Body of a response; `204` is empty, non 2xx statuses become `AviError::Controller`.
    fn fetch_body(&self, verb: &str, url: &str, response: Response) -> Result<Vec<u8>, AviError> {
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(vec![]);
        }

        if !status.is_success() {
            return Err(read_error(verb, url, response));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| AviError::Controller {
                verb: verb.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                message: Some(format!("Response body read failed: {e}")),
            })
    }
}

fn read_error(verb: &str, url: &str, response: Response) -> AviError {
    let status = response.status();
    match response.bytes() {
        Ok(body) => {
            let error = AviError::from_response(verb, url, status, &body);
            info!("error code {} on {} {}: {}", status.as_u16(), verb, url, error);
            error
        }
        Err(e) => AviError::Controller {
            verb: verb.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            message: Some(format!("Response body read failed: {e}")),
        },
    }
}

/// `api/cluster` answers a single object instead of a collection envelope.
fn is_cluster_uri(uri: &str) -> bool {
    uri.contains("cluster?")
}

fn decode_body<T: DeserializeOwned>(verb: &str, url: &str, body: &[u8]) -> Result<T, AviError> {
    let body: &[u8] = if body.is_empty() { b"null" } else { body };
    serde_json::from_slice(body).map_err(|e| AviError::deserialization(verb, url, &e))
}

fn insert_header(headers: &mut HeaderMap, key: &str, value: &str) {
    match (HeaderName::from_bytes(key.as_bytes()), HeaderValue::from_str(value)) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => warn!("skipping invalid header {}", key),
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.as_u16() == 419 || (501..599).contains(&status.as_u16())
}

fn controller_is_up(status: StatusCode) -> bool {
    !matches!(status.as_u16(), 500 | 502 | 503)
}

/// `min(floor(3·e^round), 30)` seconds.
fn status_check_backoff(round: u32) -> Duration {
    let seconds = (3.0 * f64::from(round).exp()).floor();
    if seconds >= MAX_STATUS_CHECK_BACKOFF.as_secs_f64() {
        return MAX_STATUS_CHECK_BACKOFF;
    }
    Duration::from_secs(seconds as u64)
}

/// Blanks credential values out of a JSON dump.
pub fn redact_sensitive_fields(data: &str) -> String {
    SENSITIVE_FIELDS_REGEX
        .replace_all(data, r#""$1":"<redacted>""#)
        .to_string()
}
