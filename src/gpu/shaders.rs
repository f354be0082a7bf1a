//! WGSL sources.
//!
//! Both shaders take canvas-pixel coordinates (origin top-left, Y down) and
//! map them to clip space with the canvas size from the uniform buffer.

/// Instanced filled circles, used for particle discs and glows.
///
/// Each instance expands to a quad one pixel wider than the radius; fragments
/// outside the radius are discarded so the disc has a hard edge.
pub const DISC_SHADER: &str = r#"
struct Canvas {
    size: vec2<f32>,
    padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> canvas: Canvas;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) local: vec2<f32>,
    @location(2) radius: f32,
};

fn to_clip(p: vec2<f32>) -> vec4<f32> {
    let ndc = vec2<f32>(
        p.x / canvas.size.x * 2.0 - 1.0,
        1.0 - p.y / canvas.size.y * 2.0,
    );
    return vec4<f32>(ndc, 0.0, 1.0);
}

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) color: vec4<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let local = quad_vertices[vertex_index] * (radius + 1.0);

    var out: VertexOutput;
    out.clip_position = to_clip(center + local);
    out.color = color;
    out.local = local;
    out.radius = radius;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if length(in.local) > in.radius {
        discard;
    }
    return in.color;
}
"#;

/// Per-vertex coloured line segments.
pub const LINE_SHADER: &str = r#"
struct Canvas {
    size: vec2<f32>,
    padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> canvas: Canvas;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
) -> VertexOutput {
    // Sample at pixel centres so one-pixel lines land on whole pixels
    let p = position + vec2<f32>(0.5, 0.5);
    let ndc = vec2<f32>(
        p.x / canvas.size.x * 2.0 - 1.0,
        1.0 - p.y / canvas.size.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_disc_shader_valid() {
        validate_wgsl(DISC_SHADER).unwrap();
        assert!(DISC_SHADER.contains("fn vs_main"));
        assert!(DISC_SHADER.contains("fn fs_main"));
    }

    #[test]
    fn test_line_shader_valid() {
        validate_wgsl(LINE_SHADER).unwrap();
    }
}
