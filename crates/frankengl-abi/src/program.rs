//! Shader program assembly on top of the bound adapters.
//!
//! These helpers call several entry points in sequence; the caller's
//! contract is the crate-level one (current context, bound table).

use std::collections::HashMap;
use std::fmt;

use frankengl_core::consts::{
    ACTIVE_ATTRIBUTE_MAX_LENGTH, ACTIVE_ATTRIBUTES, ACTIVE_UNIFORM_MAX_LENGTH, ACTIVE_UNIFORMS,
    COMPILE_STATUS, FRAGMENT_SHADER, INFO_LOG_LENGTH, LINK_STATUS, SHADING_LANGUAGE_VERSION,
    VERTEX_SHADER,
};
use frankengl_core::shader::{add_prelude, uniform_label, written_name};
use frankengl_core::types::{GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

use crate::gl;

/// Programmable pipeline stage of a shader object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    #[must_use]
    pub const fn gl_enum(self) -> GLenum {
        match self {
            Self::Vertex => VERTEX_SHADER,
            Self::Fragment => FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// Errors building a shader program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("glCreateShader returned 0 for the {0} stage")]
    CreateShader(ShaderStage),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("program {program} failed to link: {log}")]
    Link { program: GLuint, log: String },
}

/// Shader object deleted when dropped, whatever the outcome of the build.
struct ShaderObject(GLuint);

impl Drop for ShaderObject {
    fn drop(&mut self) {
        // SAFETY: created by `compile` under the same context contract; an
        // attached shader is only flagged for deletion.
        unsafe { gl::delete_shader(self.0) }
    }
}

/// Compile `vertex` and `fragment`, attach them to `program` and link.
///
/// A version prelude matching the driver's GLSL version is prepended to each
/// stage. Shader objects are deleted before returning on every path.
pub unsafe fn bind_program(
    program: GLuint,
    vertex: &[&str],
    fragment: &[&str],
) -> Result<(), ProgramError> {
    // SAFETY: crate-level contract.
    let version = unsafe { gl::get_string(SHADING_LANGUAGE_VERSION) }.unwrap_or_default();

    let vs = unsafe { compile(ShaderStage::Vertex, &add_prelude(vertex, &version)) }?;
    unsafe { gl::attach_shader(program, vs.0) };
    let fs = unsafe { compile(ShaderStage::Fragment, &add_prelude(fragment, &version)) }?;
    unsafe { gl::attach_shader(program, fs.0) };

    unsafe { gl::link_program(program) };
    let mut status: GLint = 0;
    unsafe { gl::get_programiv(program, LINK_STATUS, &mut status) };
    if status == 0 {
        let log = unsafe { program_info_log(program) };
        return Err(ProgramError::Link { program, log });
    }
    Ok(())
}

unsafe fn compile(stage: ShaderStage, source: &[&str]) -> Result<ShaderObject, ProgramError> {
    let id = unsafe { gl::create_shader(stage.gl_enum()) };
    if id == 0 {
        return Err(ProgramError::CreateShader(stage));
    }
    let shader = ShaderObject(id);
    let count = GLsizei::try_from(source.len()).unwrap_or(GLsizei::MAX);
    unsafe {
        gl::shader_source(id, count, source, None);
        gl::compile_shader(id);
    }
    let mut status: GLint = 0;
    unsafe { gl::get_shaderiv(id, COMPILE_STATUS, &mut status) };
    if status == 0 {
        let log = unsafe { shader_info_log(id) };
        return Err(ProgramError::Compile { stage, log });
    }
    Ok(shader)
}

/// Driver info log of a shader object, or an empty string.
pub unsafe fn shader_info_log(shader: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe { gl::get_shaderiv(shader, INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; usize::try_from(len).unwrap_or(0)];
    if buf.is_empty() {
        return String::new();
    }
    let mut written: GLsizei = 0;
    unsafe { gl::get_shader_info_log(shader, len, &mut written, &mut buf) };
    written_name(&buf, written)
}

/// Driver info log of a program object, or an empty string.
pub unsafe fn program_info_log(program: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe { gl::get_programiv(program, INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; usize::try_from(len).unwrap_or(0)];
    if buf.is_empty() {
        return String::new();
    }
    let mut written: GLsizei = 0;
    unsafe { gl::get_program_info_log(program, len, &mut written, &mut buf) };
    written_name(&buf, written)
}

/// Active uniforms of a linked program, keyed by label.
///
/// Array uniforms appear once, under their base label.
pub unsafe fn uniforms(program: GLuint) -> HashMap<String, GLint> {
    let (count, max_len) =
        unsafe { active_counts(program, ACTIVE_UNIFORMS, ACTIVE_UNIFORM_MAX_LENGTH) };
    let mut out = HashMap::with_capacity(count as usize);
    let mut name = vec![0u8; max_len as usize];
    for index in 0..count {
        let (mut written, mut size, mut kind) = (0, 0, 0);
        unsafe {
            gl::get_active_uniform(
                program,
                index,
                max_len,
                &mut written,
                &mut size,
                &mut kind,
                &mut name,
            );
        }
        if written <= 0 {
            continue;
        }
        let full = written_name(&name, written);
        let location = unsafe { gl::get_uniform_location(program, &full) };
        out.insert(uniform_label(&full).to_owned(), location);
    }
    out
}

/// Active vertex attributes of a linked program, keyed by name.
pub unsafe fn layouts(program: GLuint) -> HashMap<String, GLint> {
    let (count, max_len) =
        unsafe { active_counts(program, ACTIVE_ATTRIBUTES, ACTIVE_ATTRIBUTE_MAX_LENGTH) };
    let mut out = HashMap::with_capacity(count as usize);
    let mut name = vec![0u8; max_len as usize];
    for index in 0..count {
        let (mut written, mut size, mut kind) = (0, 0, 0);
        unsafe {
            gl::get_active_attrib(
                program,
                index,
                max_len,
                &mut written,
                &mut size,
                &mut kind,
                &mut name,
            );
        }
        if written <= 0 {
            continue;
        }
        let attr = written_name(&name, written);
        let location = unsafe { gl::get_attrib_location(program, &attr) };
        out.insert(attr, location);
    }
    out
}

/// `(active count, longest name including NUL)`, both clamped at zero.
unsafe fn active_counts(
    program: GLuint,
    count_pname: GLenum,
    len_pname: GLenum,
) -> (GLuint, GLsizei) {
    let (mut count, mut max_len): (GLint, GLint) = (0, 0);
    unsafe {
        gl::get_programiv(program, count_pname, &mut count);
        gl::get_programiv(program, len_pname, &mut max_len);
    }
    (count.max(0) as GLuint, max_len.max(0))
}
