//! Crate-local scripted capabilities for pipeline tests.

use crate::types::{ProgressObserver, ProgressSnapshot};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wrapcal_image::{DataUri, MediaType};
use wrapcal_provider::{
    AnalysisError, AnalysisReply, AnalysisRequest, GenerationError, GenerationReply,
    GenerationRequest, ImageGenerator, SceneAnalyzer,
};

pub(crate) fn png_uri(bytes: &[u8]) -> DataUri {
    let png = MediaType::new("image/png").expect("valid media type");
    DataUri::encode(bytes, &png)
}

/// Analyzer that replays a fixed script of replies, recording every request.
pub(crate) struct ScriptedAnalyzer {
    script: Mutex<VecDeque<Result<String, AnalysisError>>>,
    calls: Mutex<Vec<AnalysisRequest>>,
    log: Option<Arc<Mutex<Vec<String>>>>,
}

impl ScriptedAnalyzer {
    pub(crate) fn replying(script: Vec<Result<&str, AnalysisError>>) -> Self {
        Self {
            script: Mutex::new(
                script
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
            log: None,
        }
    }

    pub(crate) fn with_log(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.log = Some(log);
        self
    }

    pub(crate) fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl SceneAnalyzer for ScriptedAnalyzer {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReply, AnalysisError> {
        let call_index = {
            let mut calls = self.calls.lock().expect("calls lock");
            calls.push(request);
            calls.len() - 1
        };
        if let Some(log) = &self.log {
            log.lock().expect("log lock").push(format!("analyze:{call_index}"));
        }
        let reply = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("scripted analyzer ran out of replies");
        reply.map(|instruction| AnalysisReply { instruction })
    }
}

/// Generator that replays a fixed script of replies, recording every request.
pub(crate) struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<DataUri, GenerationError>>>,
    calls: Mutex<Vec<GenerationRequest>>,
    log: Option<Arc<Mutex<Vec<String>>>>,
}

impl ScriptedGenerator {
    pub(crate) fn replying(script: Vec<Result<DataUri, GenerationError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            log: None,
        }
    }

    pub(crate) fn with_log(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.log = Some(log);
        self
    }

    pub(crate) fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ImageGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationReply, GenerationError> {
        let call_index = {
            let mut calls = self.calls.lock().expect("calls lock");
            calls.push(request);
            calls.len() - 1
        };
        if let Some(log) = &self.log {
            log.lock().expect("log lock").push(format!("generate:{call_index}"));
        }
        let reply = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("scripted generator ran out of replies");
        reply.map(|image| GenerationReply { image })
    }
}

/// Observer that records every snapshot it sees.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    snapshots: Mutex<Vec<ProgressSnapshot>>,
}

impl RecordingObserver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn snapshots(&self) -> Vec<ProgressSnapshot> {
        self.snapshots.lock().expect("snapshots lock").clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&self, snapshot: ProgressSnapshot) {
        self.snapshots.lock().expect("snapshots lock").push(snapshot);
    }
}
