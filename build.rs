//! Compiles the editor's GLSL shaders from `SHADER_SRC` into SPIR-V binaries in `SPIRV_OUT`, which
//! are embedded into the plugin with `wgpu::include_spirv!`.

use std::io::Read;
use std::path::Path;

use glsl_to_spirv::ShaderType;

const SHADER_SRC: &str = "assets/shaders";
const SPIRV_OUT: &str = "assets/generated/spirv";

const SHADERS: [&str; 2] = ["shape.vert", "shape.frag"];

/// Picks the pipeline stage of a shader from its file extension.
fn shader_type(path: &Path) -> Result<ShaderType, String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("vert") => Ok(ShaderType::Vertex),
        Some("frag") => Ok(ShaderType::Fragment),
        _ => Err(format!("Unrecognized shader type for {:?}", path)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", SHADER_SRC);

    std::fs::create_dir_all(SPIRV_OUT)?;

    for file_name in SHADERS.iter() {
        let shader_path = Path::new(SHADER_SRC).join(file_name);

        let source = std::fs::read_to_string(&shader_path)?;
        let mut compiled = glsl_to_spirv::compile(&source, shader_type(&shader_path)?)?;

        let mut spirv = Vec::new();
        compiled.read_to_end(&mut spirv)?;

        std::fs::write(Path::new(SPIRV_OUT).join(format!("{}.spv", file_name)), &spirv)?;
    }

    Ok(())
}
