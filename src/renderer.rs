use crate::camera::Camera;
use crate::constants::*;
use crate::systems::{RenderEntity, RopePath};
use crate::vfx::VisualEffect;
use glow::*;
use std::mem;
use std::sync::Arc;
use thiserror::Error;

const QUAD_VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec2 aInstancePos;
layout (location = 2) in float aInstanceSize;
layout (location = 3) in vec3 aInstanceColor;

uniform mat4 uProjection;

out vec3 vColor;

void main() {
    vec2 worldPos = aInstancePos + (aPos - 0.5) * aInstanceSize;
    gl_Position = uProjection * vec4(worldPos, 0.0, 1.0);
    vColor = aInstanceColor;
}
"#;

const QUAD_FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
in vec3 vColor;
out vec4 FragColor;

void main() {
    FragColor = vec4(vColor, 1.0);
}
"#;

const LINE_VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 uProjection;

void main() {
    gl_Position = uProjection * vec4(aPos, 0.0, 1.0);
}
"#;

const LINE_FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
uniform vec4 uColor;
out vec4 FragColor;

void main() {
    FragColor = uColor;
}
"#;

/// Floats per quad instance: position (2) + size (1) + color (3)
const QUAD_INSTANCE_FLOATS: usize = 6;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
    #[error("shader program link failed: {0}")]
    ProgramLink(String),
    #[error("GL resource allocation failed: {0}")]
    Allocation(String),
    #[error("missing uniform location: {0}")]
    MissingUniform(&'static str),
}

pub struct Renderer {
    gl: Arc<glow::Context>,
    // Instanced quads (player, hook)
    quad_program: NativeProgram,
    quad_vao: NativeVertexArray,
    quad_vbo: NativeBuffer,
    instance_vbo: NativeBuffer,
    quad_projection_loc: NativeUniformLocation,
    // Uniform-color lines (rope, vfx rings)
    line_program: NativeProgram,
    line_vao: NativeVertexArray,
    line_vbo: NativeBuffer,
    line_projection_loc: NativeUniformLocation,
    line_color_loc: NativeUniformLocation,
}

impl Renderer {
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, RendererError> {
        unsafe {
            let quad_program =
                compile_program(&gl, QUAD_VERTEX_SHADER_SRC, QUAD_FRAGMENT_SHADER_SRC)?;
            let quad_projection_loc = gl
                .get_uniform_location(quad_program, "uProjection")
                .ok_or(RendererError::MissingUniform("uProjection"))?;

            // Unit quad, centered by the vertex shader
            let vertices: [f32; 12] = [
                0.0, 0.0, // bottom-left
                1.0, 0.0, // bottom-right
                1.0, 1.0, // top-right
                0.0, 0.0, // bottom-left
                1.0, 1.0, // top-right
                0.0, 1.0, // top-left
            ];

            let quad_vao = gl.create_vertex_array().map_err(RendererError::Allocation)?;
            gl.bind_vertex_array(Some(quad_vao));

            let quad_vbo = gl.create_buffer().map_err(RendererError::Allocation)?;
            gl.bind_buffer(ARRAY_BUFFER, Some(quad_vbo));
            gl.buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(&vertices), STATIC_DRAW);

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, 8, 0);

            // Per-instance attributes: position, size, color
            let instance_vbo = gl.create_buffer().map_err(RendererError::Allocation)?;
            gl.bind_buffer(ARRAY_BUFFER, Some(instance_vbo));

            let stride = (QUAD_INSTANCE_FLOATS * mem::size_of::<f32>()) as i32;
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, FLOAT, false, stride, 0);
            gl.vertex_attrib_divisor(1, 1);

            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(2, 1, FLOAT, false, stride, 8);
            gl.vertex_attrib_divisor(2, 1);

            gl.enable_vertex_attrib_array(3);
            gl.vertex_attrib_pointer_f32(3, 3, FLOAT, false, stride, 12);
            gl.vertex_attrib_divisor(3, 1);

            gl.bind_vertex_array(None);

            let line_program =
                compile_program(&gl, LINE_VERTEX_SHADER_SRC, LINE_FRAGMENT_SHADER_SRC)?;
            let line_projection_loc = gl
                .get_uniform_location(line_program, "uProjection")
                .ok_or(RendererError::MissingUniform("uProjection"))?;
            let line_color_loc = gl
                .get_uniform_location(line_program, "uColor")
                .ok_or(RendererError::MissingUniform("uColor"))?;

            let line_vao = gl.create_vertex_array().map_err(RendererError::Allocation)?;
            gl.bind_vertex_array(Some(line_vao));

            let line_vbo = gl.create_buffer().map_err(RendererError::Allocation)?;
            gl.bind_buffer(ARRAY_BUFFER, Some(line_vbo));

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, 8, 0);

            gl.bind_vertex_array(None);

            // Dark slate background
            gl.clear_color(0.08, 0.09, 0.12, 1.0);

            // Blending for vfx ring fade-out
            gl.enable(BLEND);
            gl.blend_func(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);

            Ok(Self {
                gl,
                quad_program,
                quad_vao,
                quad_vbo,
                instance_vbo,
                quad_projection_loc,
                line_program,
                line_vao,
                line_vbo,
                line_projection_loc,
                line_color_loc,
            })
        }
    }

    pub fn resize(&self, width: i32, height: i32) {
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    pub fn clear(&self) {
        unsafe {
            self.gl.clear(COLOR_BUFFER_BIT);
        }
    }

    /// Draw all entities as instanced colored quads
    pub fn render_entities(&mut self, camera: &Camera, entities: &[RenderEntity]) {
        puffin::profile_function!();

        if entities.is_empty() {
            return;
        }

        let mut instance_data = Vec::with_capacity(entities.len() * QUAD_INSTANCE_FLOATS);
        for entity in entities {
            instance_data.push(entity.x);
            instance_data.push(entity.y);
            instance_data.push(entity.size);
            instance_data.push(entity.color.x);
            instance_data.push(entity.color.y);
            instance_data.push(entity.color.z);
        }

        unsafe {
            self.gl.use_program(Some(self.quad_program));
            self.gl.bind_vertex_array(Some(self.quad_vao));

            self.gl.bind_buffer(ARRAY_BUFFER, Some(self.instance_vbo));
            self.gl
                .buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(&instance_data), DYNAMIC_DRAW);

            let projection = camera.projection_matrix();
            self.gl.uniform_matrix_4_f32_slice(
                Some(&self.quad_projection_loc),
                false,
                projection.as_ref(),
            );

            self.gl
                .draw_arrays_instanced(TRIANGLES, 0, 6, entities.len() as i32);

            self.gl.bind_vertex_array(None);
        }
    }

    /// Stroke the rope segment from player to hook
    pub fn render_rope(&mut self, camera: &Camera, rope: &RopePath) {
        puffin::profile_function!();

        let vertices = [rope.start.x, rope.start.y, rope.end.x, rope.end.y];
        unsafe {
            self.gl.line_width(ROPE_WIDTH);
            self.draw_lines(camera, &vertices, LINES, [ROPE_COLOR.x, ROPE_COLOR.y, ROPE_COLOR.z, 1.0]);
            self.gl.line_width(1.0);
        }
    }

    /// Draw one-shot effects (expanding target-ping rings)
    pub fn render_vfx(&mut self, camera: &Camera, effects: &[VisualEffect]) {
        puffin::profile_function!();

        for effect in effects {
            let progress = effect.progress();
            let radius = TARGET_PING_RADIUS * progress;
            let alpha = 1.0 - progress;

            let mut vertices = Vec::with_capacity(TARGET_PING_SEGMENTS * 2);
            for i in 0..TARGET_PING_SEGMENTS {
                let angle = (i as f32 / TARGET_PING_SEGMENTS as f32) * std::f32::consts::TAU;
                vertices.push(effect.x + angle.cos() * radius);
                vertices.push(effect.y + angle.sin() * radius);
            }

            unsafe {
                self.draw_lines(
                    camera,
                    &vertices,
                    LINE_LOOP,
                    [ROPE_COLOR.x, ROPE_COLOR.y, ROPE_COLOR.z, alpha],
                );
            }
        }
    }

    unsafe fn draw_lines(&self, camera: &Camera, vertices: &[f32], mode: u32, color: [f32; 4]) {
        self.gl.use_program(Some(self.line_program));
        self.gl.bind_vertex_array(Some(self.line_vao));

        self.gl.bind_buffer(ARRAY_BUFFER, Some(self.line_vbo));
        self.gl
            .buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(vertices), DYNAMIC_DRAW);

        let projection = camera.projection_matrix();
        self.gl.uniform_matrix_4_f32_slice(
            Some(&self.line_projection_loc),
            false,
            projection.as_ref(),
        );
        self.gl
            .uniform_4_f32(Some(&self.line_color_loc), color[0], color[1], color[2], color[3]);

        self.gl.draw_arrays(mode, 0, (vertices.len() / 2) as i32);

        self.gl.bind_vertex_array(None);
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.quad_program);
            self.gl.delete_vertex_array(self.quad_vao);
            self.gl.delete_buffer(self.quad_vbo);
            self.gl.delete_buffer(self.instance_vbo);
            self.gl.delete_program(self.line_program);
            self.gl.delete_vertex_array(self.line_vao);
            self.gl.delete_buffer(self.line_vbo);
        }
    }
}

unsafe fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<NativeProgram, RendererError> {
    let vertex_shader = gl
        .create_shader(VERTEX_SHADER)
        .map_err(RendererError::Allocation)?;
    gl.shader_source(vertex_shader, vertex_src);
    gl.compile_shader(vertex_shader);
    if !gl.get_shader_compile_status(vertex_shader) {
        return Err(RendererError::ShaderCompile(
            gl.get_shader_info_log(vertex_shader),
        ));
    }

    let fragment_shader = gl
        .create_shader(FRAGMENT_SHADER)
        .map_err(RendererError::Allocation)?;
    gl.shader_source(fragment_shader, fragment_src);
    gl.compile_shader(fragment_shader);
    if !gl.get_shader_compile_status(fragment_shader) {
        return Err(RendererError::ShaderCompile(
            gl.get_shader_info_log(fragment_shader),
        ));
    }

    let program = gl.create_program().map_err(RendererError::Allocation)?;
    gl.attach_shader(program, vertex_shader);
    gl.attach_shader(program, fragment_shader);
    gl.link_program(program);
    if !gl.get_program_link_status(program) {
        return Err(RendererError::ProgramLink(gl.get_program_info_log(program)));
    }

    gl.delete_shader(vertex_shader);
    gl.delete_shader(fragment_shader);

    Ok(program)
}

fn as_u8_slice<T>(data: &[T]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(data.as_ptr() as *const u8, data.len() * mem::size_of::<T>())
    }
}
