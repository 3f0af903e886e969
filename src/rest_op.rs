//! Ordered batches of REST calls where the first failure aborts the rest of the batch.

use crate::errors::AviError;
use crate::models::AviResource;
use crate::refs::ObjectType;
use crate::session::{ApiOptions, AviSession, PatchOp};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestMethod {
    Post,
    Put,
    Delete,
    Patch,
    Get,
}

impl RestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestMethod::Post => "POST",
            RestMethod::Put => "PUT",
            RestMethod::Delete => "DELETE",
            RestMethod::Patch => "PATCH",
            RestMethod::Get => "GET",
        }
    }

    fn to_http_method(self) -> Method {
        match self {
            RestMethod::Post => Method::POST,
            RestMethod::Put => Method::PUT,
            RestMethod::Delete => Method::DELETE,
            RestMethod::Patch => Method::PATCH,
            RestMethod::Get => Method::GET,
        }
    }
}

impl Display for RestMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call of a batch. `response` and `err` are filled in by `execute_rest_ops`.
#[derive(Debug, Clone, PartialEq)]
pub struct RestOp {
    pub path: String,
    pub method: RestMethod,
    pub obj: Option<Value>,
    pub tenant: Option<String>,
    pub patch_op: Option<PatchOp>,
    /// `X-Avi-Version` for this call only.
    pub version: Option<String>,
    pub model: Option<ObjectType>,
    /// Name of the deleted object, kept for the caller's bookkeeping.
    pub obj_name: Option<String>,
    pub response: Option<Value>,
    pub err: Option<AviError>,
}

impl RestOp {
    pub fn new<P: Into<String>>(method: RestMethod, path: P) -> Self {
        RestOp {
            path: path.into(),
            method,
            obj: None,
            tenant: None,
            patch_op: None,
            version: None,
            model: None,
            obj_name: None,
            response: None,
            err: None,
        }
    }

    /// POST of `object` on its collection.
    pub fn create<T: AviResource>(object: &T) -> Result<Self, AviError> {
        RestOp::new(RestMethod::Post, model_to_path(T::OBJECT_TYPE))
            .model(T::OBJECT_TYPE)
            .obj(object)
    }

    /// PUT of `object` on `/api/<type>/<uuid>`.
    pub fn update<T: AviResource>(object: &T) -> Result<Self, AviError> {
        let uuid = object.uuid().ok_or_else(|| AviError::MissingUuid {
            object_type: T::OBJECT_TYPE.to_string(),
        })?;
        RestOp::new(RestMethod::Put, format!("{}/{}", model_to_path(T::OBJECT_TYPE), uuid))
            .model(T::OBJECT_TYPE)
            .obj(object)
    }

    pub fn delete(object_type: ObjectType, uuid: &str, name: Option<&str>) -> Self {
        let mut op = RestOp::new(RestMethod::Delete, format!("{}/{}", model_to_path(object_type), uuid)).model(object_type);
        op.obj_name = name.map(|name| name.to_string());
        op
    }

    pub fn obj<T: Serialize + ?Sized>(mut self, obj: &T) -> Result<Self, AviError> {
        let value = serde_json::to_value(obj).map_err(|e| AviError::Serialization {
            verb: self.method.to_string(),
            url: self.path.clone(),
            raw_error_message: e.to_string(),
        })?;
        self.obj = Some(value);
        Ok(self)
    }

    pub fn tenant<T: Into<String>>(mut self, tenant: T) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn version<T: Into<String>>(mut self, version: T) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn patch_op(mut self, patch_op: PatchOp) -> Self {
        self.patch_op = Some(patch_op);
        self
    }

    pub fn model(mut self, model: ObjectType) -> Self {
        self.model = Some(model);
        self
    }

    fn payload(&self) -> Result<Option<Value>, AviError> {
        match (self.method, &self.obj) {
            (RestMethod::Get, _) | (RestMethod::Delete, None) => Ok(None),
            (RestMethod::Patch, obj) => {
                let patch_op = self.patch_op.ok_or_else(|| {
                    AviError::InvalidOption(format!("PATCH on {} needs a patch operation", self.path))
                })?;
                Ok(Some(json!({ patch_op.as_str(): obj.clone().unwrap_or(Value::Null) })))
            }
            (_, obj) => Ok(Some(obj.clone().unwrap_or(Value::Null))),
        }
    }

    fn run(&self, session: &AviSession) -> Result<Option<Value>, AviError> {
        let uri = self.path.trim_start_matches('/');
        let method = self.method.to_http_method();
        let options = ApiOptions {
            tenant: self.tenant.clone(),
            ..ApiOptions::default()
        };

        let payload = match self.payload()? {
            Some(payload) => Some(session.encode_payload(&method, uri, &payload)?),
            None => None,
        };
        let body = session.execute(method.clone(), uri, payload, &options, self.version.as_deref())?;

        if body.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice::<Value>(&body)
            .map(Some)
            .map_err(|e| AviError::deserialization(method.as_str(), &format!("{}{}", session.prefix(), uri), &e))
    }
}

/// Runs `rest_ops` in order. The first failing op keeps its error, every later op is
/// marked `Aborted`, and the failure is returned as `WebSync`.
pub fn execute_rest_ops(session: &AviSession, rest_ops: &mut [RestOp]) -> Result<(), AviError> {
    for i in 0..rest_ops.len() {
        let op = &mut rest_ops[i];
        match op.run(session) {
            Ok(response) => {
                debug!(
                    "RestOp method {} path {} tenant {} response {}",
                    op.method,
                    op.path,
                    op.tenant.as_deref().unwrap_or_default(),
                    response.as_ref().map(|r| r.to_string()).unwrap_or_default()
                );
                op.response = response;
                op.err = None;
            }
            Err(e) => {
                warn!(
                    "RestOp method {} path {} tenant {} returned err {}",
                    op.method,
                    op.path,
                    op.tenant.as_deref().unwrap_or_default(),
                    e
                );
                let operation = op.method.to_string();
                let message = e.to_string();
                op.err = Some(e);

                for aborted in rest_ops.iter_mut().skip(i + 1) {
                    aborted.err = Some(AviError::Aborted);
                }
                return Err(AviError::WebSync { operation, message });
            }
        }
    }

    Ok(())
}

/// Collection path of `object_type`, e.g. `/api/pool`.
pub fn model_to_path(object_type: ObjectType) -> String {
    format!("/api/{object_type}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pool;
    use crate::session::AviSessionBuilder;
    use httpmock::Method::{DELETE, PATCH, POST, PUT};
    use httpmock::MockServer;

    fn session(server: &MockServer) -> AviSession {
        AviSessionBuilder::new(server.base_url(), "admin")
            .password("password")
            .lazy_authentication(true)
            .disable_controller_status_check(true)
            .build()
            .unwrap()
    }

    fn mock_login(server: &MockServer) {
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(200)
                .header("Set-Cookie", "csrftoken=csrf-1")
                .header("Set-Cookie", "sessionid=session-1")
                .json_body(json!({}));
        });
    }

    #[test]
    fn test_model_to_path() {
        assert_eq!(model_to_path(ObjectType::Pool), "/api/pool");
        assert_eq!(model_to_path(ObjectType::VsDataScriptSet), "/api/vsdatascriptset");
    }

    #[test]
    fn test_patch_payload() {
        let op = RestOp::new(RestMethod::Patch, "/api/vsvip/vsvip-1")
            .obj(&json!({"name": "vip"}))
            .unwrap()
            .patch_op(PatchOp::Replace);
        assert_eq!(op.payload().unwrap(), Some(json!({"replace": {"name": "vip"}})));

        let missing_op = RestOp::new(RestMethod::Patch, "/api/vsvip/vsvip-1");
        assert!(matches!(missing_op.payload(), Err(AviError::InvalidOption(_))));

        assert_eq!(RestOp::delete(ObjectType::Pool, "pool-1", None).payload().unwrap(), None);
    }

    #[test]
    fn test_update_needs_uuid() {
        assert!(matches!(
            RestOp::update(&Pool::default()),
            Err(AviError::MissingUuid { .. })
        ));
    }

    #[test]
    fn test_execute_rest_ops_in_order() {
        let server = MockServer::start();
        mock_login(&server);
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/pool")
                .header("X-Avi-Tenant", "team-a")
                .json_body(json!({"name": "pool-1"}));
            then.status(201).json_body(json!({"name": "pool-1", "uuid": "pool-1-uuid"}));
        });
        let patch = server.mock(|when, then| {
            when.method(PATCH)
                .path("/api/pool/pool-1-uuid")
                .header("X-Avi-Version", "22.1.3")
                .json_body(json!({"add": {"description": "patched"}}));
            then.status(200).json_body(json!({"uuid": "pool-1-uuid", "description": "patched"}));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/api/pool/pool-2-uuid");
            then.status(204);
        });

        let pool = Pool {
            name: Some("pool-1".to_string()),
            ..Default::default()
        };
        let mut rest_ops = vec![
            RestOp::create(&pool).unwrap().tenant("team-a"),
            RestOp::new(RestMethod::Patch, "/api/pool/pool-1-uuid")
                .obj(&json!({"description": "patched"}))
                .unwrap()
                .patch_op(PatchOp::Add)
                .version("22.1.3"),
            RestOp::delete(ObjectType::Pool, "pool-2-uuid", Some("pool-2")),
        ];

        execute_rest_ops(&session(&server), &mut rest_ops).unwrap();

        create.assert();
        patch.assert();
        delete.assert();
        assert_eq!(
            rest_ops[0].response.as_ref().and_then(|r| r["uuid"].as_str()),
            Some("pool-1-uuid")
        );
        assert_eq!(rest_ops[2].response, None);
        assert!(rest_ops.iter().all(|op| op.err.is_none()));
    }

    #[test]
    fn test_first_failure_aborts_following_ops() {
        let server = MockServer::start();
        mock_login(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/pool");
            then.status(201).json_body(json!({"uuid": "pool-1-uuid"}));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/virtualservice/vs-1");
            then.status(400).json_body(json!({"error": "Invalid pool_ref"}));
        });
        let never_called = server.mock(|when, then| {
            when.method(DELETE);
            then.status(204);
        });

        let mut rest_ops = vec![
            RestOp::new(RestMethod::Post, "/api/pool").obj(&json!({"name": "p"})).unwrap(),
            RestOp::new(RestMethod::Put, "/api/virtualservice/vs-1")
                .obj(&json!({"name": "vs"}))
                .unwrap(),
            RestOp::delete(ObjectType::Pool, "pool-0", None),
            RestOp::delete(ObjectType::VsVip, "vsvip-0", None),
        ];

        let result = execute_rest_ops(&session(&server), &mut rest_ops);

        never_called.assert_hits(0);
        match result {
            Err(AviError::WebSync { operation, message }) => {
                assert_eq!(operation, "PUT");
                assert!(message.contains("HTTP code: 400"));
                assert!(message.contains("Invalid pool_ref"));
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(rest_ops[0].err.is_none());
        assert_eq!(rest_ops[1].err.as_ref().and_then(|e| e.http_status()), Some(400));
        assert_eq!(rest_ops[2].err, Some(AviError::Aborted));
        assert_eq!(rest_ops[3].err, Some(AviError::Aborted));
    }
}
