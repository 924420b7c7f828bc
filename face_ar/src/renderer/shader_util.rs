/// Program creation from shader assets

use crate::error::Result;
use crate::graphics::{GraphicsDevice, AssetSource, Program, ProgramDesc};

/// Read a vertex/fragment shader pair from the assets and link it
///
/// # Arguments
///
/// * `device` - GPU device
/// * `assets` - Asset source holding the shader sources
/// * `vertex_path` - Vertex shader asset path (also used as the program label)
/// * `fragment_path` - Fragment shader asset path
///
/// # Errors
///
/// Returns `AssetError` if a source is missing, or the device's error if
/// compilation or linking fails.
pub fn create_program_from_assets(
    device: &mut dyn GraphicsDevice,
    assets: &dyn AssetSource,
    vertex_path: &str,
    fragment_path: &str,
) -> Result<Box<dyn Program>> {
    let vertex_source = assets.read_to_string(vertex_path)?;
    let fragment_source = assets.read_to_string(fragment_path)?;

    device.create_program(&ProgramDesc {
        label: vertex_path,
        vertex_source: &vertex_source,
        fragment_source: &fragment_source,
    })
}
