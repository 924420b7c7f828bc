/// GlesProgram - linked GL program implementing the Program trait

use std::fmt;
use std::num::NonZeroU32;
use std::rc::Rc;

use face_ar::facear::graphics::{Program, ProgramId, ProgramDesc, UniformLocation, AttribLocation};
use face_ar::facear::Result;
use face_ar::ar_bail;
use glow::HasContext;

const SOURCE: &str = "facear::gles::GlesProgram";

/// Rebuild the native handle from a program id
///
/// Returns `None` for the reserved name 0.
pub(crate) fn native_program(id: ProgramId) -> Option<glow::Program> {
    NonZeroU32::new(id.0).map(glow::NativeProgram)
}

/// Linked GL program, deleted on drop
pub struct GlesProgram {
    gl: Rc<glow::Context>,
    program: glow::Program,
}

impl GlesProgram {
    /// Compile both stages and link them
    ///
    /// Shader objects are detached and deleted once the program is linked.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` with the GL info log if a stage fails to
    /// compile or the program fails to link.
    pub(crate) fn link(gl: Rc<glow::Context>, desc: &ProgramDesc) -> Result<Self> {
        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(err) => ar_bail!(SOURCE, "Cannot create program '{}': {}", desc.label, err),
            };

            let stages = [
                (glow::VERTEX_SHADER, "vertex", desc.vertex_source),
                (glow::FRAGMENT_SHADER, "fragment", desc.fragment_source),
            ];

            let mut shaders = Vec::with_capacity(stages.len());
            for (shader_type, stage, source) in stages {
                let shader = match gl.create_shader(shader_type) {
                    Ok(shader) => shader,
                    Err(err) => {
                        delete_all(&gl, program, &shaders);
                        ar_bail!(SOURCE, "Cannot create {} shader '{}': {}", stage, desc.label, err);
                    }
                };
                gl.shader_source(shader, source);
                gl.compile_shader(shader);
                gl.attach_shader(program, shader);
                shaders.push(shader);

                if !gl.get_shader_compile_status(shader) {
                    let log = gl.get_shader_info_log(shader);
                    delete_all(&gl, program, &shaders);
                    ar_bail!(SOURCE, "Failed to compile {} shader '{}': {}", stage, desc.label, log);
                }
            }

            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                delete_all(&gl, program, &shaders);
                ar_bail!(SOURCE, "Failed to link program '{}': {}", desc.label, log);
            }

            for shader in shaders {
                gl.detach_shader(program, shader);
                gl.delete_shader(shader);
            }

            Ok(Self { gl, program })
        }
    }

    /// Native GL handle
    pub fn raw(&self) -> glow::Program {
        self.program
    }
}

/// Release a partially built program and its shaders
unsafe fn delete_all(gl: &glow::Context, program: glow::Program, shaders: &[glow::Shader]) {
    for &shader in shaders {
        gl.detach_shader(program, shader);
        gl.delete_shader(shader);
    }
    gl.delete_program(program);
}

impl fmt::Debug for GlesProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlesProgram")
            .field("id", &self.program.0.get())
            .finish()
    }
}

impl Program for GlesProgram {
    fn id(&self) -> ProgramId {
        ProgramId(self.program.0.get())
    }

    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        unsafe {
            self.gl
                .get_uniform_location(self.program, name)
                .map(|location| UniformLocation(location.0))
        }
    }

    fn attrib_location(&self, name: &str) -> Option<AttribLocation> {
        unsafe { self.gl.get_attrib_location(self.program, name).map(AttribLocation) }
    }
}

impl Drop for GlesProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}
