//! Recording mock backend shared by the pipeline integration tests

use std::collections::HashMap;

use render_pipeline::render::{
    CommandStream, CullResults, DrawSettings, GraphicsBackend, RenderError, RenderOp,
    RenderResult, UniformSlot,
};
use render_pipeline::scene::{Camera, Renderable};

/// One observed backend call, in issue order
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    /// `setup_camera_properties`
    SetupCamera,
    /// `execute_command_stream`, with the stage label and a copy of the ops
    ExecuteStream {
        label: &'static str,
        ops: Vec<RenderOp>,
    },
    /// `draw_skybox`
    DrawSkybox,
    /// `cull`
    Cull,
    /// `draw_renderers`, with the pass name and the queue tags of the
    /// renderables the pipeline handed over
    DrawRenderers {
        pass: &'static str,
        queues: Vec<u16>,
    },
    /// `submit`
    Submit,
}

/// Backend double that records every call and replays scripted cull results
#[derive(Default)]
pub struct RecordingBackend {
    /// Every backend call in issue order
    pub calls: Vec<BackendCall>,
    /// Returned (cloned) from every `cull` call
    pub cull_results: CullResults,
    /// Force `submit` to fail
    pub fail_submit: bool,
    slots: HashMap<String, u32>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot a uniform name resolved to, if it was ever resolved
    pub fn slot(&self, name: &str) -> Option<UniformSlot> {
        self.slots.get(name).copied().map(UniformSlot)
    }

    /// Ops of the first executed stream with the given stage label
    pub fn stream_ops(&self, wanted: &str) -> Option<&[RenderOp]> {
        self.calls.iter().find_map(|call| match call {
            BackendCall::ExecuteStream { label, ops } if *label == wanted => Some(ops.as_slice()),
            _ => None,
        })
    }

    /// Index of the first call matching the predicate
    pub fn position<F: Fn(&BackendCall) -> bool>(&self, pred: F) -> Option<usize> {
        self.calls.iter().position(pred)
    }
}

impl GraphicsBackend for RecordingBackend {
    fn property_to_id(&mut self, name: &str) -> UniformSlot {
        let next = self.slots.len() as u32;
        let id = *self.slots.entry(name.to_owned()).or_insert(next);
        UniformSlot(id)
    }

    fn setup_camera_properties(&mut self, _camera: &Camera) {
        self.calls.push(BackendCall::SetupCamera);
    }

    fn draw_skybox(&mut self, _camera: &Camera) {
        self.calls.push(BackendCall::DrawSkybox);
    }

    fn cull(&mut self, _camera: &Camera) -> CullResults {
        self.calls.push(BackendCall::Cull);
        self.cull_results.clone()
    }

    fn draw_renderers(
        &mut self,
        renderables: &[Renderable],
        settings: &DrawSettings,
    ) -> RenderResult<()> {
        self.calls.push(BackendCall::DrawRenderers {
            pass: settings.pass.name(),
            queues: renderables.iter().map(|r| r.queue).collect(),
        });
        Ok(())
    }

    fn execute_command_stream(&mut self, stream: &CommandStream) -> RenderResult<()> {
        self.calls.push(BackendCall::ExecuteStream {
            label: stream.label(),
            ops: stream.ops().to_vec(),
        });
        Ok(())
    }

    fn submit(&mut self) -> RenderResult<()> {
        if self.fail_submit {
            return Err(RenderError::SubmissionFailed("queue full".into()));
        }
        self.calls.push(BackendCall::Submit);
        Ok(())
    }
}
