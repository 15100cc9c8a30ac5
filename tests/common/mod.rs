//! In-memory doubles for the CRM API and the operator prompt

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use twenty_setup::api::{CrmApi, ProvisioningResult};
use twenty_setup::config::{Settings, API_KEY_VAR, WORKSPACE_ID_VAR};
use twenty_setup::schema::{FieldSpec, ObjectType, PipelineSpec};
use twenty_setup::ui::Confirmer;

/// A request as the fake received it, bodies already serialized
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Verify,
    CreateField { object: ObjectType, body: Value },
    CreatePipeline { body: Value },
}

#[derive(Clone, Default)]
pub struct FakeCrm {
    unreachable: bool,
    reject_all: bool,
    rejected_fields: HashSet<String>,
    reject_pipeline: bool,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl FakeCrm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connectivity check fails
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Every create request answers 404
    pub fn reject_all(mut self) -> Self {
        self.reject_all = true;
        self
    }

    pub fn reject_field(mut self, name: &str) -> Self {
        self.rejected_fields.insert(name.to_string());
        self
    }

    pub fn reject_pipeline(mut self) -> Self {
        self.reject_pipeline = true;
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests that would have changed the workspace
    pub fn mutations(&self) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|r| *r != Request::Verify)
            .collect()
    }

    fn record(&self, request: Request) {
        self.requests.lock().unwrap().push(request);
    }
}

fn not_found() -> ProvisioningResult {
    ProvisioningResult::error("HTTP 404 Not Found", Some(404))
}

#[async_trait]
impl CrmApi for FakeCrm {
    async fn verify_connection(&self) -> anyhow::Result<()> {
        self.record(Request::Verify);
        if self.unreachable {
            anyhow::bail!("HTTP 401 Unauthorized");
        }
        Ok(())
    }

    async fn create_field(&self, object: ObjectType, field: &FieldSpec) -> ProvisioningResult {
        self.record(Request::CreateField {
            object,
            body: serde_json::to_value(field).unwrap(),
        });
        if self.reject_all || self.rejected_fields.contains(&field.name) {
            not_found()
        } else {
            ProvisioningResult::success(Some(json!({"id": field.name})), 201)
        }
    }

    async fn create_pipeline(&self, pipeline: &PipelineSpec) -> ProvisioningResult {
        self.record(Request::CreatePipeline {
            body: serde_json::to_value(pipeline).unwrap(),
        });
        if self.reject_all || self.reject_pipeline {
            not_found()
        } else {
            ProvisioningResult::success(None, 201)
        }
    }
}

/// Replies with a fixed answer and counts how often it was asked
pub struct ScriptedConfirmer {
    answer: String,
    pub asked: usize,
}

impl ScriptedConfirmer {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            asked: 0,
        }
    }
}

impl Confirmer for ScriptedConfirmer {
    fn ask(&mut self, _prompt: &str) -> anyhow::Result<String> {
        self.asked += 1;
        Ok(self.answer.clone())
    }
}

/// Fails to read an answer, like a closed stdin
#[derive(Default)]
pub struct FailingConfirmer {
    pub asked: usize,
}

impl Confirmer for FailingConfirmer {
    fn ask(&mut self, _prompt: &str) -> anyhow::Result<String> {
        self.asked += 1;
        anyhow::bail!("stdin closed")
    }
}

pub fn settings() -> Settings {
    Settings::from_lookup(|name| match name {
        API_KEY_VAR => Some("test-key".to_string()),
        WORKSPACE_ID_VAR => Some("ws-test".to_string()),
        _ => None,
    })
    .unwrap()
}
