/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Every call is recorded as a `GlCall` in a log shared with the test through
/// `MockGpu`, so tests can keep inspecting the device after handing it to a
/// renderer or to the application driver.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::graphics::{
    GraphicsDevice, Texture, TextureId, TextureTarget, Program, ProgramId, ProgramDesc,
    ImageData, UniformLocation, AttribLocation, UniformValue, Viewport, BlendState,
    PrimitiveTopology, AssetSource,
};

/// Uniform names the mock programs resolve (location = index)
const KNOWN_UNIFORMS: [&str; 4] = ["sTexture", "u_modelViewProjection", "u_texture", "camTexture"];

/// Attribute names the mock programs resolve (location = index)
const KNOWN_ATTRIBS: [&str; 4] = ["a_Position", "a_TexCoord", "a_position", "a_texCoord"];

// ============================================================================
// Recorded calls
// ============================================================================

/// One recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateExternalTexture(TextureId),
    CreateTexture2D { id: TextureId, width: u32, height: u32, mipmaps: bool },
    CreateProgram { id: ProgramId, label: String },
    DeleteTexture(TextureId),
    DeleteProgram(ProgramId),
    SetViewport(Viewport),
    SetClearColor([f32; 4]),
    Clear,
    SetDepthWrite(bool),
    SetBlend(Option<BlendState>),
    UseProgram(Option<ProgramId>),
    BindTexture { unit: u32, id: TextureId, target: TextureTarget },
    SetUniform { location: UniformLocation, value: UniformValue },
    SetVertexAttribute { location: AttribLocation, components: u32, data: Vec<f32> },
    DisableVertexAttribute(AttribLocation),
    DrawArrays { topology: PrimitiveTopology, first: u32, count: u32 },
    DrawIndexed { topology: PrimitiveTopology, indices: Vec<u16> },
    CheckError(String),
}

impl GlCall {
    /// Whether this call issues geometry
    pub fn is_draw(&self) -> bool {
        matches!(self, GlCall::DrawArrays { .. } | GlCall::DrawIndexed { .. })
    }
}

#[derive(Debug, Default)]
struct MockGpuState {
    calls: Vec<GlCall>,
    next_id: u32,
    live_textures: HashSet<TextureId>,
    live_programs: HashSet<ProgramId>,
    failing_programs: HashSet<String>,
}

/// Test-side handle on the mock GPU state
#[derive(Debug, Clone, Default)]
pub struct MockGpu {
    state: Arc<Mutex<MockGpuState>>,
}

impl MockGpu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a device recording into this state
    pub fn device(&self) -> MockGraphicsDevice {
        MockGraphicsDevice { gpu: self.clone() }
    }

    /// Make program creation fail for the given label
    pub fn fail_program(&self, label: &str) {
        self.state.lock().unwrap().failing_programs.insert(label.to_string());
    }

    /// Snapshot of recorded calls
    pub fn calls(&self) -> Vec<GlCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Forget recorded calls (resources stay alive)
    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Number of draw calls recorded
    pub fn draw_count(&self) -> usize {
        self.calls().iter().filter(|call| call.is_draw()).count()
    }

    pub fn live_texture_count(&self) -> usize {
        self.state.lock().unwrap().live_textures.len()
    }

    pub fn live_program_count(&self) -> usize {
        self.state.lock().unwrap().live_programs.len()
    }

    fn record(&self, call: GlCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn next_id(&self) -> u32 {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        state.next_id
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    id: TextureId,
    target: TextureTarget,
    gpu: MockGpu,
}

impl Texture for MockTexture {
    fn id(&self) -> TextureId {
        self.id
    }

    fn target(&self) -> TextureTarget {
        self.target
    }
}

impl Drop for MockTexture {
    fn drop(&mut self) {
        let mut state = self.gpu.state.lock().unwrap();
        state.live_textures.remove(&self.id);
        state.calls.push(GlCall::DeleteTexture(self.id));
    }
}

// ============================================================================
// Mock Program
// ============================================================================

#[derive(Debug)]
pub struct MockProgram {
    id: ProgramId,
    gpu: MockGpu,
}

impl Program for MockProgram {
    fn id(&self) -> ProgramId {
        self.id
    }

    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        KNOWN_UNIFORMS
            .iter()
            .position(|known| *known == name)
            .map(|index| UniformLocation(index as u32))
    }

    fn attrib_location(&self, name: &str) -> Option<AttribLocation> {
        KNOWN_ATTRIBS
            .iter()
            .position(|known| *known == name)
            .map(|index| AttribLocation(index as u32))
    }
}

impl Drop for MockProgram {
    fn drop(&mut self) {
        let mut state = self.gpu.state.lock().unwrap();
        state.live_programs.remove(&self.id);
        state.calls.push(GlCall::DeleteProgram(self.id));
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device recording calls into a shared `MockGpu`
#[derive(Debug)]
pub struct MockGraphicsDevice {
    gpu: MockGpu,
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_external_texture(&mut self) -> Result<Box<dyn Texture>> {
        let id = TextureId(self.gpu.next_id());
        self.gpu.state.lock().unwrap().live_textures.insert(id);
        self.gpu.record(GlCall::CreateExternalTexture(id));
        Ok(Box::new(MockTexture { id, target: TextureTarget::ExternalOes, gpu: self.gpu.clone() }))
    }

    fn create_texture_2d(&mut self, image: &ImageData, generate_mipmaps: bool) -> Result<Box<dyn Texture>> {
        let id = TextureId(self.gpu.next_id());
        self.gpu.state.lock().unwrap().live_textures.insert(id);
        self.gpu.record(GlCall::CreateTexture2D {
            id,
            width: image.width(),
            height: image.height(),
            mipmaps: generate_mipmaps,
        });
        Ok(Box::new(MockTexture { id, target: TextureTarget::Texture2D, gpu: self.gpu.clone() }))
    }

    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Box<dyn Program>> {
        if self.gpu.state.lock().unwrap().failing_programs.contains(desc.label) {
            return Err(Error::BackendError(format!("Failed to compile {}", desc.label)));
        }
        let id = ProgramId(self.gpu.next_id());
        self.gpu.state.lock().unwrap().live_programs.insert(id);
        self.gpu.record(GlCall::CreateProgram { id, label: desc.label.to_string() });
        Ok(Box::new(MockProgram { id, gpu: self.gpu.clone() }))
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.gpu.record(GlCall::SetViewport(viewport));
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        self.gpu.record(GlCall::SetClearColor(color));
    }

    fn clear(&mut self) {
        self.gpu.record(GlCall::Clear);
    }

    fn set_depth_write(&mut self, enabled: bool) {
        self.gpu.record(GlCall::SetDepthWrite(enabled));
    }

    fn set_blend(&mut self, blend: Option<BlendState>) {
        self.gpu.record(GlCall::SetBlend(blend));
    }

    fn use_program(&mut self, program: Option<&dyn Program>) {
        self.gpu.record(GlCall::UseProgram(program.map(|p| p.id())));
    }

    fn bind_texture(&mut self, unit: u32, texture: &dyn Texture) {
        self.gpu.record(GlCall::BindTexture { unit, id: texture.id(), target: texture.target() });
    }

    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue) {
        self.gpu.record(GlCall::SetUniform { location, value });
    }

    fn set_vertex_attribute(&mut self, location: AttribLocation, components: u32, data: &[f32]) {
        self.gpu.record(GlCall::SetVertexAttribute { location, components, data: data.to_vec() });
    }

    fn disable_vertex_attribute(&mut self, location: AttribLocation) {
        self.gpu.record(GlCall::DisableVertexAttribute(location));
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: u32, count: u32) {
        self.gpu.record(GlCall::DrawArrays { topology, first, count });
    }

    fn draw_indexed(&mut self, topology: PrimitiveTopology, indices: &[u16]) {
        self.gpu.record(GlCall::DrawIndexed { topology, indices: indices.to_vec() });
    }

    fn check_error(&mut self, context: &str) -> Result<()> {
        self.gpu.record(GlCall::CheckError(context.to_string()));
        Ok(())
    }
}

// ============================================================================
// Mock AssetSource
// ============================================================================

/// In-memory asset source
///
/// Every shader path resolves to a one-line placeholder source; images
/// resolve to a 2x2 opaque white image unless marked missing.
#[derive(Debug, Default)]
pub struct MockAssetSource {
    missing: HashSet<String>,
}

impl MockAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given path fail to load
    pub fn with_missing(mut self, path: &str) -> Self {
        self.missing.insert(path.to_string());
        self
    }

    fn check(&self, path: &str) -> Result<()> {
        if self.missing.contains(path) {
            return Err(Error::AssetError {
                path: path.to_string(),
                message: "not found".to_string(),
            });
        }
        Ok(())
    }
}

impl AssetSource for MockAssetSource {
    fn read_to_string(&self, path: &str) -> Result<String> {
        self.check(path)?;
        Ok(format!("// {}\nvoid main() {{}}\n", path))
    }

    fn load_image(&self, path: &str) -> Result<ImageData> {
        self.check(path)?;
        ImageData::new(2, 2, vec![255; 16])
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
