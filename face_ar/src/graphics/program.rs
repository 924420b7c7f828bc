/// Program trait and shader descriptors

/// Backend program name (the GL program id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u32);

/// Resolved uniform location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Resolved vertex attribute location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttribLocation(pub u32);

/// Sources for a vertex + fragment program
#[derive(Debug, Clone)]
pub struct ProgramDesc<'a> {
    /// Debug label (usually the vertex shader path)
    pub label: &'a str,
    /// Vertex shader source
    pub vertex_source: &'a str,
    /// Fragment shader source
    pub fragment_source: &'a str,
}

/// Linked GPU program
///
/// Implementations release the underlying GPU program when dropped.
pub trait Program: std::fmt::Debug {
    /// Backend program name
    fn id(&self) -> ProgramId;

    /// Look up a uniform by name
    ///
    /// Returns `None` if the uniform does not exist or was optimized out.
    fn uniform_location(&self, name: &str) -> Option<UniformLocation>;

    /// Look up a vertex attribute by name
    ///
    /// Returns `None` if the attribute does not exist or was optimized out.
    fn attrib_location(&self, name: &str) -> Option<AttribLocation>;
}
