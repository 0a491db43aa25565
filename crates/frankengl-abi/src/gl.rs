//! OpenGL 3.3 core entry points plus the commonly used 4.x additions.
//!
//! Parameter names and widths follow `glcorearb.h`. A few rows take a more
//! specific host type than the C prototype:
//!
//! - `glGetString`/`glGetStringi` return a copied host string.
//! - Index and attribute pointers of draw and vertex-attribute calls take a
//!   [`BufferOffset`] into the bound buffer object.
//! - Name and info-log buffers are byte slices.
//!
//! Call [`bind_all`] once a context is current, then call the adapters.

use std::ffi::c_void;

use frankengl_core::types::{
    BufferOffset, DebugCallback, GLbitfield, GLboolean, GLdouble, GLenum, GLfloat, GLint, GLint64,
    GLintptr, GLsizei, GLsizeiptr, GLuint, GLuint64, SyncHandle,
};
use frankengl_core::BindingReport;

use crate::resolver::{Resolver, platform_resolver};
use crate::table::BindSummary;

/// Bind every entry point with the platform's resolution strategy.
///
/// Safe to call again after a context switch; each pass replaces all slots.
pub fn bind_all() -> BindSummary {
    GL.bind_all(platform_resolver())
}

/// Bind every entry point with a caller-chosen strategy.
pub fn bind_all_with(resolver: &dyn Resolver) -> BindSummary {
    GL.bind_all(resolver)
}

/// Presence of every entry point after the latest bind pass.
#[must_use]
pub fn binding_report() -> BindingReport {
    GL.report()
}

entry_points! {
    /// The process-wide OpenGL binding table.
    pub static GL: GlEntry;

    // -- 1.0 ----------------------------------------------------------------
    scalar fn blend_func = "glBlendFunc"(sfactor: GLenum, dfactor: GLenum);
    scalar fn clear = "glClear"(mask: GLbitfield);
    scalar fn clear_color = "glClearColor"(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    scalar fn clear_depth = "glClearDepth"(depth: GLdouble);
    scalar fn clear_stencil = "glClearStencil"(s: GLint);
    scalar fn color_mask = "glColorMask"(red: bool, green: bool, blue: bool, alpha: bool);
    scalar fn cull_face = "glCullFace"(mode: GLenum);
    scalar fn depth_func = "glDepthFunc"(func: GLenum);
    scalar fn depth_mask = "glDepthMask"(flag: bool);
    scalar fn depth_range = "glDepthRange"(near: GLdouble, far: GLdouble);
    scalar fn disable = "glDisable"(cap: GLenum);
    scalar fn draw_buffer = "glDrawBuffer"(buf: GLenum);
    scalar fn enable = "glEnable"(cap: GLenum);
    scalar fn finish = "glFinish"();
    scalar fn flush = "glFlush"();
    scalar fn front_face = "glFrontFace"(mode: GLenum);
    buffer fn get_booleanv = "glGetBooleanv"(pname: GLenum, data: &mut [GLboolean]);
    buffer fn get_doublev = "glGetDoublev"(pname: GLenum, data: &mut [GLdouble]);
    /// Oldest recorded error flag, or `NO_ERROR`.
    scalar fn get_error = "glGetError"() -> GLenum;
    buffer fn get_floatv = "glGetFloatv"(pname: GLenum, data: &mut [GLfloat]);
    buffer fn get_integerv = "glGetIntegerv"(pname: GLenum, data: &mut [GLint]);
    /// `None` for an unknown enumerant or without a current context.
    string_out fn get_string = "glGetString"(name: GLenum) -> Option<String>;
    buffer fn get_tex_image = "glGetTexImage"(target: GLenum, level: GLint, format: GLenum, kind: GLenum, pixels: *mut c_void);
    buffer fn get_tex_level_parameterfv = "glGetTexLevelParameterfv"(target: GLenum, level: GLint, pname: GLenum, params: &mut [GLfloat]);
    buffer fn get_tex_level_parameteriv = "glGetTexLevelParameteriv"(target: GLenum, level: GLint, pname: GLenum, params: &mut [GLint]);
    buffer fn get_tex_parameterfv = "glGetTexParameterfv"(target: GLenum, pname: GLenum, params: &mut [GLfloat]);
    buffer fn get_tex_parameteriv = "glGetTexParameteriv"(target: GLenum, pname: GLenum, params: &mut [GLint]);
    scalar fn hint = "glHint"(target: GLenum, mode: GLenum);
    scalar fn is_enabled = "glIsEnabled"(cap: GLenum) -> bool;
    scalar fn line_width = "glLineWidth"(width: GLfloat);
    scalar fn logic_op = "glLogicOp"(opcode: GLenum);
    scalar fn pixel_storef = "glPixelStoref"(pname: GLenum, param: GLfloat);
    scalar fn pixel_storei = "glPixelStorei"(pname: GLenum, param: GLint);
    scalar fn point_size = "glPointSize"(size: GLfloat);
    scalar fn polygon_mode = "glPolygonMode"(face: GLenum, mode: GLenum);
    scalar fn read_buffer = "glReadBuffer"(src: GLenum);
    buffer fn read_pixels = "glReadPixels"(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, kind: GLenum, pixels: *mut c_void);
    scalar fn scissor = "glScissor"(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    scalar fn stencil_func = "glStencilFunc"(func: GLenum, reference: GLint, mask: GLuint);
    scalar fn stencil_mask = "glStencilMask"(mask: GLuint);
    scalar fn stencil_op = "glStencilOp"(fail: GLenum, zfail: GLenum, zpass: GLenum);
    buffer fn tex_image_1d = "glTexImage1D"(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, kind: GLenum, pixels: *const c_void);
    buffer fn tex_image_2d = "glTexImage2D"(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, kind: GLenum, pixels: *const c_void);
    scalar fn tex_parameterf = "glTexParameterf"(target: GLenum, pname: GLenum, param: GLfloat);
    buffer fn tex_parameterfv = "glTexParameterfv"(target: GLenum, pname: GLenum, params: &[GLfloat]);
    scalar fn tex_parameteri = "glTexParameteri"(target: GLenum, pname: GLenum, param: GLint);
    buffer fn tex_parameteriv = "glTexParameteriv"(target: GLenum, pname: GLenum, params: &[GLint]);
    scalar fn viewport = "glViewport"(x: GLint, y: GLint, width: GLsizei, height: GLsizei);

    // -- 1.1 ----------------------------------------------------------------
    scalar fn bind_texture = "glBindTexture"(target: GLenum, texture: GLuint);
    scalar fn copy_tex_image_1d = "glCopyTexImage1D"(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
    scalar fn copy_tex_image_2d = "glCopyTexImage2D"(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
    scalar fn copy_tex_sub_image_1d = "glCopyTexSubImage1D"(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
    scalar fn copy_tex_sub_image_2d = "glCopyTexSubImage2D"(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    buffer fn delete_textures = "glDeleteTextures"(n: GLsizei, textures: &[GLuint]);
    scalar fn draw_arrays = "glDrawArrays"(mode: GLenum, first: GLint, count: GLsizei);
    /// `indices` is a byte offset into the bound element array buffer.
    buffer fn draw_elements = "glDrawElements"(mode: GLenum, count: GLsizei, kind: GLenum, indices: BufferOffset);
    buffer fn gen_textures = "glGenTextures"(n: GLsizei, textures: &mut [GLuint]);
    scalar fn is_texture = "glIsTexture"(texture: GLuint) -> bool;
    scalar fn polygon_offset = "glPolygonOffset"(factor: GLfloat, units: GLfloat);
    buffer fn tex_sub_image_1d = "glTexSubImage1D"(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, kind: GLenum, pixels: *const c_void);
    buffer fn tex_sub_image_2d = "glTexSubImage2D"(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, kind: GLenum, pixels: *const c_void);

    // -- 1.2 ----------------------------------------------------------------
    scalar fn copy_tex_sub_image_3d = "glCopyTexSubImage3D"(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    buffer fn draw_range_elements = "glDrawRangeElements"(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, kind: GLenum, indices: BufferOffset);
    buffer fn tex_image_3d = "glTexImage3D"(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, kind: GLenum, pixels: *const c_void);
    buffer fn tex_sub_image_3d = "glTexSubImage3D"(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, kind: GLenum, pixels: *const c_void);

    // -- 1.3 ----------------------------------------------------------------
    scalar fn active_texture = "glActiveTexture"(texture: GLenum);
    buffer fn compressed_tex_image_2d = "glCompressedTexImage2D"(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
    buffer fn compressed_tex_image_3d = "glCompressedTexImage3D"(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
    buffer fn compressed_tex_sub_image_2d = "glCompressedTexSubImage2D"(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
    buffer fn compressed_tex_sub_image_3d = "glCompressedTexSubImage3D"(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
    buffer fn get_compressed_tex_image = "glGetCompressedTexImage"(target: GLenum, level: GLint, img: *mut c_void);
    scalar fn sample_coverage = "glSampleCoverage"(value: GLfloat, invert: bool);

    // -- 1.4 ----------------------------------------------------------------
    scalar fn blend_color = "glBlendColor"(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    scalar fn blend_equation = "glBlendEquation"(mode: GLenum);
    scalar fn blend_func_separate = "glBlendFuncSeparate"(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum);
    buffer fn multi_draw_arrays = "glMultiDrawArrays"(mode: GLenum, first: &[GLint], count: &[GLsizei], drawcount: GLsizei);
    scalar fn point_parameterf = "glPointParameterf"(pname: GLenum, param: GLfloat);
    scalar fn point_parameteri = "glPointParameteri"(pname: GLenum, param: GLint);

    // -- 1.5 ----------------------------------------------------------------
    scalar fn begin_query = "glBeginQuery"(target: GLenum, id: GLuint);
    scalar fn bind_buffer = "glBindBuffer"(target: GLenum, buffer: GLuint);
    /// `data` may be null to allocate without initialising.
    buffer fn buffer_data = "glBufferData"(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    buffer fn buffer_sub_data = "glBufferSubData"(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    buffer fn delete_buffers = "glDeleteBuffers"(n: GLsizei, buffers: &[GLuint]);
    buffer fn delete_queries = "glDeleteQueries"(n: GLsizei, ids: &[GLuint]);
    scalar fn end_query = "glEndQuery"(target: GLenum);
    buffer fn gen_buffers = "glGenBuffers"(n: GLsizei, buffers: &mut [GLuint]);
    buffer fn gen_queries = "glGenQueries"(n: GLsizei, ids: &mut [GLuint]);
    buffer fn get_buffer_parameteriv = "glGetBufferParameteriv"(target: GLenum, pname: GLenum, params: &mut [GLint]);
    buffer fn get_buffer_sub_data = "glGetBufferSubData"(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
    buffer fn get_query_objectiv = "glGetQueryObjectiv"(id: GLuint, pname: GLenum, params: &mut [GLint]);
    buffer fn get_query_objectuiv = "glGetQueryObjectuiv"(id: GLuint, pname: GLenum, params: &mut [GLuint]);
    buffer fn get_queryiv = "glGetQueryiv"(target: GLenum, pname: GLenum, params: &mut [GLint]);
    scalar fn is_buffer = "glIsBuffer"(buffer: GLuint) -> bool;
    scalar fn is_query = "glIsQuery"(id: GLuint) -> bool;
    buffer fn map_buffer = "glMapBuffer"(target: GLenum, access: GLenum) -> *mut c_void;
    scalar fn unmap_buffer = "glUnmapBuffer"(target: GLenum) -> bool;

    // -- 2.0 ----------------------------------------------------------------
    scalar fn attach_shader = "glAttachShader"(program: GLuint, shader: GLuint);
    string fn bind_attrib_location = "glBindAttribLocation"(program: GLuint, index: GLuint, name: &str);
    scalar fn blend_equation_separate = "glBlendEquationSeparate"(mode_rgb: GLenum, mode_alpha: GLenum);
    scalar fn compile_shader = "glCompileShader"(shader: GLuint);
    scalar fn create_program = "glCreateProgram"() -> GLuint;
    scalar fn create_shader = "glCreateShader"(kind: GLenum) -> GLuint;
    scalar fn delete_program = "glDeleteProgram"(program: GLuint);
    scalar fn delete_shader = "glDeleteShader"(shader: GLuint);
    scalar fn detach_shader = "glDetachShader"(program: GLuint, shader: GLuint);
    scalar fn disable_vertex_attrib_array = "glDisableVertexAttribArray"(index: GLuint);
    buffer fn draw_buffers = "glDrawBuffers"(n: GLsizei, bufs: &[GLenum]);
    scalar fn enable_vertex_attrib_array = "glEnableVertexAttribArray"(index: GLuint);
    buffer fn get_active_attrib = "glGetActiveAttrib"(program: GLuint, index: GLuint, buf_size: GLsizei, length: &mut GLsizei, size: &mut GLint, kind: &mut GLenum, name: &mut [u8]);
    buffer fn get_active_uniform = "glGetActiveUniform"(program: GLuint, index: GLuint, buf_size: GLsizei, length: &mut GLsizei, size: &mut GLint, kind: &mut GLenum, name: &mut [u8]);
    buffer fn get_attached_shaders = "glGetAttachedShaders"(program: GLuint, max_count: GLsizei, count: &mut GLsizei, shaders: &mut [GLuint]);
    string fn get_attrib_location = "glGetAttribLocation"(program: GLuint, name: &str) -> GLint;
    buffer fn get_program_info_log = "glGetProgramInfoLog"(program: GLuint, buf_size: GLsizei, length: &mut GLsizei, info_log: &mut [u8]);
    buffer fn get_programiv = "glGetProgramiv"(program: GLuint, pname: GLenum, params: &mut GLint);
    buffer fn get_shader_info_log = "glGetShaderInfoLog"(shader: GLuint, buf_size: GLsizei, length: &mut GLsizei, info_log: &mut [u8]);
    buffer fn get_shader_source = "glGetShaderSource"(shader: GLuint, buf_size: GLsizei, length: &mut GLsizei, source: &mut [u8]);
    buffer fn get_shaderiv = "glGetShaderiv"(shader: GLuint, pname: GLenum, params: &mut GLint);
    string fn get_uniform_location = "glGetUniformLocation"(program: GLuint, name: &str) -> GLint;
    buffer fn get_uniformfv = "glGetUniformfv"(program: GLuint, location: GLint, params: &mut [GLfloat]);
    buffer fn get_uniformiv = "glGetUniformiv"(program: GLuint, location: GLint, params: &mut [GLint]);
    buffer fn get_vertex_attrib_pointerv = "glGetVertexAttribPointerv"(index: GLuint, pname: GLenum, pointer: &mut *mut c_void);
    buffer fn get_vertex_attribdv = "glGetVertexAttribdv"(index: GLuint, pname: GLenum, params: &mut [GLdouble]);
    buffer fn get_vertex_attribfv = "glGetVertexAttribfv"(index: GLuint, pname: GLenum, params: &mut [GLfloat]);
    buffer fn get_vertex_attribiv = "glGetVertexAttribiv"(index: GLuint, pname: GLenum, params: &mut [GLint]);
    scalar fn is_program = "glIsProgram"(program: GLuint) -> bool;
    scalar fn is_shader = "glIsShader"(shader: GLuint) -> bool;
    scalar fn link_program = "glLinkProgram"(program: GLuint);
    /// `length` of `None` means every source string is read up to its NUL.
    string fn shader_source = "glShaderSource"(shader: GLuint, count: GLsizei, string: &[&str], length: Option<&[GLint]>);
    scalar fn stencil_func_separate = "glStencilFuncSeparate"(face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
    scalar fn stencil_mask_separate = "glStencilMaskSeparate"(face: GLenum, mask: GLuint);
    scalar fn stencil_op_separate = "glStencilOpSeparate"(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    scalar fn uniform1f = "glUniform1f"(location: GLint, v0: GLfloat);
    scalar fn uniform2f = "glUniform2f"(location: GLint, v0: GLfloat, v1: GLfloat);
    scalar fn uniform3f = "glUniform3f"(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    scalar fn uniform4f = "glUniform4f"(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    scalar fn uniform1i = "glUniform1i"(location: GLint, v0: GLint);
    scalar fn uniform2i = "glUniform2i"(location: GLint, v0: GLint, v1: GLint);
    scalar fn uniform3i = "glUniform3i"(location: GLint, v0: GLint, v1: GLint, v2: GLint);
    scalar fn uniform4i = "glUniform4i"(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    buffer fn uniform1fv = "glUniform1fv"(location: GLint, count: GLsizei, value: &[GLfloat]);
    buffer fn uniform2fv = "glUniform2fv"(location: GLint, count: GLsizei, value: &[GLfloat]);
    buffer fn uniform3fv = "glUniform3fv"(location: GLint, count: GLsizei, value: &[GLfloat]);
    buffer fn uniform4fv = "glUniform4fv"(location: GLint, count: GLsizei, value: &[GLfloat]);
    buffer fn uniform1iv = "glUniform1iv"(location: GLint, count: GLsizei, value: &[GLint]);
    buffer fn uniform2iv = "glUniform2iv"(location: GLint, count: GLsizei, value: &[GLint]);
    buffer fn uniform3iv = "glUniform3iv"(location: GLint, count: GLsizei, value: &[GLint]);
    buffer fn uniform4iv = "glUniform4iv"(location: GLint, count: GLsizei, value: &[GLint]);
    buffer fn uniform_matrix2fv = "glUniformMatrix2fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    buffer fn uniform_matrix3fv = "glUniformMatrix3fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    buffer fn uniform_matrix4fv = "glUniformMatrix4fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    scalar fn use_program = "glUseProgram"(program: GLuint);
    scalar fn validate_program = "glValidateProgram"(program: GLuint);
    scalar fn vertex_attrib1f = "glVertexAttrib1f"(index: GLuint, x: GLfloat);
    scalar fn vertex_attrib2f = "glVertexAttrib2f"(index: GLuint, x: GLfloat, y: GLfloat);
    scalar fn vertex_attrib3f = "glVertexAttrib3f"(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
    scalar fn vertex_attrib4f = "glVertexAttrib4f"(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    buffer fn vertex_attrib4fv = "glVertexAttrib4fv"(index: GLuint, v: &[GLfloat]);
    /// `pointer` is a byte offset into the bound array buffer.
    buffer fn vertex_attrib_pointer = "glVertexAttribPointer"(index: GLuint, size: GLint, kind: GLenum, normalized: bool, stride: GLsizei, pointer: BufferOffset);

    // -- 2.1 ----------------------------------------------------------------
    buffer fn uniform_matrix2x3fv = "glUniformMatrix2x3fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    buffer fn uniform_matrix3x2fv = "glUniformMatrix3x2fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    buffer fn uniform_matrix2x4fv = "glUniformMatrix2x4fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    buffer fn uniform_matrix4x2fv = "glUniformMatrix4x2fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    buffer fn uniform_matrix3x4fv = "glUniformMatrix3x4fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    buffer fn uniform_matrix4x3fv = "glUniformMatrix4x3fv"(location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);

    // -- 3.0 ----------------------------------------------------------------
    scalar fn begin_conditional_render = "glBeginConditionalRender"(id: GLuint, mode: GLenum);
    scalar fn begin_transform_feedback = "glBeginTransformFeedback"(primitive_mode: GLenum);
    scalar fn bind_buffer_base = "glBindBufferBase"(target: GLenum, index: GLuint, buffer: GLuint);
    scalar fn bind_buffer_range = "glBindBufferRange"(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
    string fn bind_frag_data_location = "glBindFragDataLocation"(program: GLuint, color: GLuint, name: &str);
    scalar fn bind_framebuffer = "glBindFramebuffer"(target: GLenum, framebuffer: GLuint);
    scalar fn bind_renderbuffer = "glBindRenderbuffer"(target: GLenum, renderbuffer: GLuint);
    scalar fn bind_vertex_array = "glBindVertexArray"(array: GLuint);
    scalar fn blit_framebuffer = "glBlitFramebuffer"(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
    scalar fn check_framebuffer_status = "glCheckFramebufferStatus"(target: GLenum) -> GLenum;
    scalar fn clamp_color = "glClampColor"(target: GLenum, clamp: GLenum);
    scalar fn clear_bufferfi = "glClearBufferfi"(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
    buffer fn clear_bufferfv = "glClearBufferfv"(buffer: GLenum, drawbuffer: GLint, value: &[GLfloat]);
    buffer fn clear_bufferiv = "glClearBufferiv"(buffer: GLenum, drawbuffer: GLint, value: &[GLint]);
    buffer fn clear_bufferuiv = "glClearBufferuiv"(buffer: GLenum, drawbuffer: GLint, value: &[GLuint]);
    scalar fn color_maski = "glColorMaski"(index: GLuint, r: bool, g: bool, b: bool, a: bool);
    buffer fn delete_framebuffers = "glDeleteFramebuffers"(n: GLsizei, framebuffers: &[GLuint]);
    buffer fn delete_renderbuffers = "glDeleteRenderbuffers"(n: GLsizei, renderbuffers: &[GLuint]);
    buffer fn delete_vertex_arrays = "glDeleteVertexArrays"(n: GLsizei, arrays: &[GLuint]);
    scalar fn disablei = "glDisablei"(target: GLenum, index: GLuint);
    scalar fn enablei = "glEnablei"(target: GLenum, index: GLuint);
    scalar fn end_conditional_render = "glEndConditionalRender"();
    scalar fn end_transform_feedback = "glEndTransformFeedback"();
    scalar fn flush_mapped_buffer_range = "glFlushMappedBufferRange"(target: GLenum, offset: GLintptr, length: GLsizeiptr);
    scalar fn framebuffer_renderbuffer = "glFramebufferRenderbuffer"(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
    scalar fn framebuffer_texture_1d = "glFramebufferTexture1D"(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    scalar fn framebuffer_texture_2d = "glFramebufferTexture2D"(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    scalar fn framebuffer_texture_3d = "glFramebufferTexture3D"(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint);
    scalar fn framebuffer_texture_layer = "glFramebufferTextureLayer"(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
    buffer fn gen_framebuffers = "glGenFramebuffers"(n: GLsizei, framebuffers: &mut [GLuint]);
    buffer fn gen_renderbuffers = "glGenRenderbuffers"(n: GLsizei, renderbuffers: &mut [GLuint]);
    buffer fn gen_vertex_arrays = "glGenVertexArrays"(n: GLsizei, arrays: &mut [GLuint]);
    scalar fn generate_mipmap = "glGenerateMipmap"(target: GLenum);
    buffer fn get_booleani_v = "glGetBooleani_v"(target: GLenum, index: GLuint, data: &mut [GLboolean]);
    string fn get_frag_data_location = "glGetFragDataLocation"(program: GLuint, name: &str) -> GLint;
    buffer fn get_framebuffer_attachment_parameteriv = "glGetFramebufferAttachmentParameteriv"(target: GLenum, attachment: GLenum, pname: GLenum, params: &mut [GLint]);
    buffer fn get_integeri_v = "glGetIntegeri_v"(target: GLenum, index: GLuint, data: &mut [GLint]);
    buffer fn get_renderbuffer_parameteriv = "glGetRenderbufferParameteriv"(target: GLenum, pname: GLenum, params: &mut [GLint]);
    /// Indexed string query, e.g. one extension name per index.
    string_out fn get_stringi = "glGetStringi"(name: GLenum, index: GLuint) -> Option<String>;
    buffer fn get_tex_parameter_iiv = "glGetTexParameterIiv"(target: GLenum, pname: GLenum, params: &mut [GLint]);
    buffer fn get_tex_parameter_iuiv = "glGetTexParameterIuiv"(target: GLenum, pname: GLenum, params: &mut [GLuint]);
    buffer fn get_transform_feedback_varying = "glGetTransformFeedbackVarying"(program: GLuint, index: GLuint, buf_size: GLsizei, length: &mut GLsizei, size: &mut GLsizei, kind: &mut GLenum, name: &mut [u8]);
    buffer fn get_uniformuiv = "glGetUniformuiv"(program: GLuint, location: GLint, params: &mut [GLuint]);
    buffer fn get_vertex_attrib_iiv = "glGetVertexAttribIiv"(index: GLuint, pname: GLenum, params: &mut [GLint]);
    buffer fn get_vertex_attrib_iuiv = "glGetVertexAttribIuiv"(index: GLuint, pname: GLenum, params: &mut [GLuint]);
    scalar fn is_enabledi = "glIsEnabledi"(target: GLenum, index: GLuint) -> bool;
    scalar fn is_framebuffer = "glIsFramebuffer"(framebuffer: GLuint) -> bool;
    scalar fn is_renderbuffer = "glIsRenderbuffer"(renderbuffer: GLuint) -> bool;
    scalar fn is_vertex_array = "glIsVertexArray"(array: GLuint) -> bool;
    /// Null on failure; the mapping stays valid until `unmap_buffer`.
    buffer fn map_buffer_range = "glMapBufferRange"(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
    scalar fn renderbuffer_storage = "glRenderbufferStorage"(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
    scalar fn renderbuffer_storage_multisample = "glRenderbufferStorageMultisample"(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    buffer fn tex_parameter_iiv = "glTexParameterIiv"(target: GLenum, pname: GLenum, params: &[GLint]);
    buffer fn tex_parameter_iuiv = "glTexParameterIuiv"(target: GLenum, pname: GLenum, params: &[GLuint]);
    string fn transform_feedback_varyings = "glTransformFeedbackVaryings"(program: GLuint, count: GLsizei, varyings: &[&str], buffer_mode: GLenum);
    scalar fn uniform1ui = "glUniform1ui"(location: GLint, v0: GLuint);
    scalar fn uniform2ui = "glUniform2ui"(location: GLint, v0: GLuint, v1: GLuint);
    scalar fn uniform3ui = "glUniform3ui"(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
    scalar fn uniform4ui = "glUniform4ui"(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
    buffer fn uniform1uiv = "glUniform1uiv"(location: GLint, count: GLsizei, value: &[GLuint]);
    buffer fn uniform2uiv = "glUniform2uiv"(location: GLint, count: GLsizei, value: &[GLuint]);
    buffer fn uniform3uiv = "glUniform3uiv"(location: GLint, count: GLsizei, value: &[GLuint]);
    buffer fn uniform4uiv = "glUniform4uiv"(location: GLint, count: GLsizei, value: &[GLuint]);
    scalar fn vertex_attrib_i4i = "glVertexAttribI4i"(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
    scalar fn vertex_attrib_i4ui = "glVertexAttribI4ui"(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
    buffer fn vertex_attrib_i_pointer = "glVertexAttribIPointer"(index: GLuint, size: GLint, kind: GLenum, stride: GLsizei, pointer: BufferOffset);

    // -- 3.1 ----------------------------------------------------------------
    scalar fn copy_buffer_sub_data = "glCopyBufferSubData"(read_target: GLenum, write_target: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr);
    scalar fn draw_arrays_instanced = "glDrawArraysInstanced"(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
    buffer fn draw_elements_instanced = "glDrawElementsInstanced"(mode: GLenum, count: GLsizei, kind: GLenum, indices: BufferOffset, instancecount: GLsizei);
    buffer fn get_active_uniform_block_name = "glGetActiveUniformBlockName"(program: GLuint, uniform_block_index: GLuint, buf_size: GLsizei, length: &mut GLsizei, uniform_block_name: &mut [u8]);
    buffer fn get_active_uniform_blockiv = "glGetActiveUniformBlockiv"(program: GLuint, uniform_block_index: GLuint, pname: GLenum, params: &mut [GLint]);
    buffer fn get_active_uniform_name = "glGetActiveUniformName"(program: GLuint, uniform_index: GLuint, buf_size: GLsizei, length: &mut GLsizei, uniform_name: &mut [u8]);
    buffer fn get_active_uniformsiv = "glGetActiveUniformsiv"(program: GLuint, uniform_count: GLsizei, uniform_indices: &[GLuint], pname: GLenum, params: &mut [GLint]);
    string fn get_uniform_block_index = "glGetUniformBlockIndex"(program: GLuint, uniform_block_name: &str) -> GLuint;
    string fn get_uniform_indices = "glGetUniformIndices"(program: GLuint, uniform_count: GLsizei, uniform_names: &[&str], uniform_indices: &mut [GLuint]);
    scalar fn primitive_restart_index = "glPrimitiveRestartIndex"(index: GLuint);
    scalar fn tex_buffer = "glTexBuffer"(target: GLenum, internalformat: GLenum, buffer: GLuint);
    scalar fn uniform_block_binding = "glUniformBlockBinding"(program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint);

    // -- 3.2 ----------------------------------------------------------------
    /// Waits for `sync` on the client; `timeout` is in nanoseconds.
    handle fn client_wait_sync = "glClientWaitSync"(sync: &SyncHandle, flags: GLbitfield, timeout: GLuint64) -> GLenum;
    /// Consumes the handle; the native object is gone afterwards.
    handle fn delete_sync = "glDeleteSync"(sync: SyncHandle);
    buffer fn draw_elements_base_vertex = "glDrawElementsBaseVertex"(mode: GLenum, count: GLsizei, kind: GLenum, indices: BufferOffset, basevertex: GLint);
    buffer fn draw_elements_instanced_base_vertex = "glDrawElementsInstancedBaseVertex"(mode: GLenum, count: GLsizei, kind: GLenum, indices: BufferOffset, instancecount: GLsizei, basevertex: GLint);
    buffer fn draw_range_elements_base_vertex = "glDrawRangeElementsBaseVertex"(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, kind: GLenum, indices: BufferOffset, basevertex: GLint);
    /// A null handle signals failure.
    handle fn fence_sync = "glFenceSync"(condition: GLenum, flags: GLbitfield) -> SyncHandle;
    scalar fn framebuffer_texture = "glFramebufferTexture"(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
    buffer fn get_buffer_parameteri64v = "glGetBufferParameteri64v"(target: GLenum, pname: GLenum, params: &mut [GLint64]);
    buffer fn get_integer64i_v = "glGetInteger64i_v"(target: GLenum, index: GLuint, data: &mut [GLint64]);
    buffer fn get_integer64v = "glGetInteger64v"(pname: GLenum, data: &mut [GLint64]);
    buffer fn get_multisamplefv = "glGetMultisamplefv"(pname: GLenum, index: GLuint, val: &mut [GLfloat]);
    handle fn get_synciv = "glGetSynciv"(sync: &SyncHandle, pname: GLenum, count: GLsizei, length: &mut GLsizei, values: &mut [GLint]);
    handle fn is_sync = "glIsSync"(sync: &SyncHandle) -> bool;
    scalar fn provoking_vertex = "glProvokingVertex"(mode: GLenum);
    scalar fn sample_maski = "glSampleMaski"(mask_number: GLuint, mask: GLbitfield);
    scalar fn tex_image_2d_multisample = "glTexImage2DMultisample"(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: bool);
    scalar fn tex_image_3d_multisample = "glTexImage3DMultisample"(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: bool);
    handle fn wait_sync = "glWaitSync"(sync: &SyncHandle, flags: GLbitfield, timeout: GLuint64);

    // -- 3.3 ----------------------------------------------------------------
    string fn bind_frag_data_location_indexed = "glBindFragDataLocationIndexed"(program: GLuint, color_number: GLuint, index: GLuint, name: &str);
    scalar fn bind_sampler = "glBindSampler"(unit: GLuint, sampler: GLuint);
    buffer fn delete_samplers = "glDeleteSamplers"(count: GLsizei, samplers: &[GLuint]);
    buffer fn gen_samplers = "glGenSamplers"(count: GLsizei, samplers: &mut [GLuint]);
    string fn get_frag_data_index = "glGetFragDataIndex"(program: GLuint, name: &str) -> GLint;
    buffer fn get_query_objecti64v = "glGetQueryObjecti64v"(id: GLuint, pname: GLenum, params: &mut [GLint64]);
    buffer fn get_query_objectui64v = "glGetQueryObjectui64v"(id: GLuint, pname: GLenum, params: &mut [GLuint64]);
    buffer fn get_sampler_parameterfv = "glGetSamplerParameterfv"(sampler: GLuint, pname: GLenum, params: &mut [GLfloat]);
    buffer fn get_sampler_parameteriv = "glGetSamplerParameteriv"(sampler: GLuint, pname: GLenum, params: &mut [GLint]);
    scalar fn is_sampler = "glIsSampler"(sampler: GLuint) -> bool;
    scalar fn query_counter = "glQueryCounter"(id: GLuint, target: GLenum);
    scalar fn sampler_parameterf = "glSamplerParameterf"(sampler: GLuint, pname: GLenum, param: GLfloat);
    buffer fn sampler_parameterfv = "glSamplerParameterfv"(sampler: GLuint, pname: GLenum, param: &[GLfloat]);
    scalar fn sampler_parameteri = "glSamplerParameteri"(sampler: GLuint, pname: GLenum, param: GLint);
    buffer fn sampler_parameteriv = "glSamplerParameteriv"(sampler: GLuint, pname: GLenum, param: &[GLint]);
    scalar fn vertex_attrib_divisor = "glVertexAttribDivisor"(index: GLuint, divisor: GLuint);

    // -- 4.0 ----------------------------------------------------------------
    scalar fn bind_transform_feedback = "glBindTransformFeedback"(target: GLenum, id: GLuint);
    scalar fn blend_equationi = "glBlendEquationi"(buf: GLuint, mode: GLenum);
    scalar fn blend_funci = "glBlendFunci"(buf: GLuint, src: GLenum, dst: GLenum);
    buffer fn delete_transform_feedbacks = "glDeleteTransformFeedbacks"(n: GLsizei, ids: &[GLuint]);
    buffer fn draw_arrays_indirect = "glDrawArraysIndirect"(mode: GLenum, indirect: BufferOffset);
    buffer fn draw_elements_indirect = "glDrawElementsIndirect"(mode: GLenum, kind: GLenum, indirect: BufferOffset);
    scalar fn draw_transform_feedback = "glDrawTransformFeedback"(mode: GLenum, id: GLuint);
    buffer fn gen_transform_feedbacks = "glGenTransformFeedbacks"(n: GLsizei, ids: &mut [GLuint]);
    scalar fn min_sample_shading = "glMinSampleShading"(value: GLfloat);
    scalar fn patch_parameteri = "glPatchParameteri"(pname: GLenum, value: GLint);
    scalar fn pause_transform_feedback = "glPauseTransformFeedback"();
    scalar fn resume_transform_feedback = "glResumeTransformFeedback"();

    // -- 4.1 ----------------------------------------------------------------
    scalar fn active_shader_program = "glActiveShaderProgram"(pipeline: GLuint, program: GLuint);
    scalar fn bind_program_pipeline = "glBindProgramPipeline"(pipeline: GLuint);
    string fn create_shader_programv = "glCreateShaderProgramv"(kind: GLenum, count: GLsizei, strings: &[&str]) -> GLuint;
    buffer fn delete_program_pipelines = "glDeleteProgramPipelines"(n: GLsizei, pipelines: &[GLuint]);
    buffer fn gen_program_pipelines = "glGenProgramPipelines"(n: GLsizei, pipelines: &mut [GLuint]);
    buffer fn get_program_binary = "glGetProgramBinary"(program: GLuint, buf_size: GLsizei, length: &mut GLsizei, binary_format: &mut GLenum, binary: *mut c_void);
    buffer fn get_program_pipeline_info_log = "glGetProgramPipelineInfoLog"(pipeline: GLuint, buf_size: GLsizei, length: &mut GLsizei, info_log: &mut [u8]);
    scalar fn is_program_pipeline = "glIsProgramPipeline"(pipeline: GLuint) -> bool;
    buffer fn program_binary = "glProgramBinary"(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei);
    scalar fn program_parameteri = "glProgramParameteri"(program: GLuint, pname: GLenum, value: GLint);
    scalar fn program_uniform1f = "glProgramUniform1f"(program: GLuint, location: GLint, v0: GLfloat);
    scalar fn program_uniform1i = "glProgramUniform1i"(program: GLuint, location: GLint, v0: GLint);
    buffer fn program_uniform_matrix4fv = "glProgramUniformMatrix4fv"(program: GLuint, location: GLint, count: GLsizei, transpose: bool, value: &[GLfloat]);
    scalar fn release_shader_compiler = "glReleaseShaderCompiler"();
    buffer fn shader_binary = "glShaderBinary"(count: GLsizei, shaders: &[GLuint], binary_format: GLenum, binary: *const c_void, length: GLsizei);
    scalar fn use_program_stages = "glUseProgramStages"(pipeline: GLuint, stages: GLbitfield, program: GLuint);
    scalar fn validate_program_pipeline = "glValidateProgramPipeline"(pipeline: GLuint);
    scalar fn viewport_indexedf = "glViewportIndexedf"(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);

    // -- 4.2 ----------------------------------------------------------------
    scalar fn bind_image_texture = "glBindImageTexture"(unit: GLuint, texture: GLuint, level: GLint, layered: bool, layer: GLint, access: GLenum, format: GLenum);
    scalar fn draw_arrays_instanced_base_instance = "glDrawArraysInstancedBaseInstance"(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei, baseinstance: GLuint);
    buffer fn draw_elements_instanced_base_instance = "glDrawElementsInstancedBaseInstance"(mode: GLenum, count: GLsizei, kind: GLenum, indices: BufferOffset, instancecount: GLsizei, baseinstance: GLuint);
    buffer fn draw_elements_instanced_base_vertex_base_instance = "glDrawElementsInstancedBaseVertexBaseInstance"(mode: GLenum, count: GLsizei, kind: GLenum, indices: BufferOffset, instancecount: GLsizei, basevertex: GLint, baseinstance: GLuint);
    scalar fn memory_barrier = "glMemoryBarrier"(barriers: GLbitfield);
    scalar fn tex_storage_1d = "glTexStorage1D"(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei);
    scalar fn tex_storage_2d = "glTexStorage2D"(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    scalar fn tex_storage_3d = "glTexStorage3D"(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);

    // -- 4.3 ----------------------------------------------------------------
    scalar fn bind_vertex_buffer = "glBindVertexBuffer"(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
    buffer fn clear_buffer_data = "glClearBufferData"(target: GLenum, internalformat: GLenum, format: GLenum, kind: GLenum, data: *const c_void);
    scalar fn copy_image_sub_data = "glCopyImageSubData"(src_name: GLuint, src_target: GLenum, src_level: GLint, src_x: GLint, src_y: GLint, src_z: GLint, dst_name: GLuint, dst_target: GLenum, dst_level: GLint, dst_x: GLint, dst_y: GLint, dst_z: GLint, src_width: GLsizei, src_height: GLsizei, src_depth: GLsizei);
    /// `user_param` is handed back to the callback unchanged.
    handle fn debug_message_callback = "glDebugMessageCallback"(callback: DebugCallback, user_param: *const c_void);
    buffer fn debug_message_control = "glDebugMessageControl"(source: GLenum, kind: GLenum, severity: GLenum, count: GLsizei, ids: Option<&[GLuint]>, enabled: bool);
    string fn debug_message_insert = "glDebugMessageInsert"(source: GLenum, kind: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: &str);
    scalar fn dispatch_compute = "glDispatchCompute"(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
    scalar fn dispatch_compute_indirect = "glDispatchComputeIndirect"(indirect: GLintptr);
    scalar fn framebuffer_parameteri = "glFramebufferParameteri"(target: GLenum, pname: GLenum, param: GLint);
    buffer fn get_debug_message_log = "glGetDebugMessageLog"(count: GLuint, buf_size: GLsizei, sources: &mut [GLenum], kinds: &mut [GLenum], ids: &mut [GLuint], severities: &mut [GLenum], lengths: &mut [GLsizei], message_log: &mut [u8]) -> GLuint;
    buffer fn get_object_label = "glGetObjectLabel"(identifier: GLenum, name: GLuint, buf_size: GLsizei, length: &mut GLsizei, label: &mut [u8]);
    string fn get_program_resource_index = "glGetProgramResourceIndex"(program: GLuint, program_interface: GLenum, name: &str) -> GLuint;
    string fn get_program_resource_location = "glGetProgramResourceLocation"(program: GLuint, program_interface: GLenum, name: &str) -> GLint;
    buffer fn invalidate_framebuffer = "glInvalidateFramebuffer"(target: GLenum, num_attachments: GLsizei, attachments: &[GLenum]);
    scalar fn invalidate_tex_image = "glInvalidateTexImage"(texture: GLuint, level: GLint);
    buffer fn multi_draw_arrays_indirect = "glMultiDrawArraysIndirect"(mode: GLenum, indirect: BufferOffset, drawcount: GLsizei, stride: GLsizei);
    string fn object_label = "glObjectLabel"(identifier: GLenum, name: GLuint, length: GLsizei, label: &str);
    scalar fn pop_debug_group = "glPopDebugGroup"();
    string fn push_debug_group = "glPushDebugGroup"(source: GLenum, id: GLuint, length: GLsizei, message: &str);
    scalar fn shader_storage_block_binding = "glShaderStorageBlockBinding"(program: GLuint, storage_block_index: GLuint, storage_block_binding: GLuint);
    scalar fn tex_storage_2d_multisample = "glTexStorage2DMultisample"(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: bool);
    scalar fn vertex_attrib_binding = "glVertexAttribBinding"(attribindex: GLuint, bindingindex: GLuint);
    scalar fn vertex_attrib_format = "glVertexAttribFormat"(attribindex: GLuint, size: GLint, kind: GLenum, normalized: bool, relativeoffset: GLuint);
    scalar fn vertex_binding_divisor = "glVertexBindingDivisor"(bindingindex: GLuint, divisor: GLuint);

    // -- 4.4 ----------------------------------------------------------------
    buffer fn bind_buffers_base = "glBindBuffersBase"(target: GLenum, first: GLuint, count: GLsizei, buffers: &[GLuint]);
    buffer fn bind_textures = "glBindTextures"(first: GLuint, count: GLsizei, textures: &[GLuint]);
    buffer fn buffer_storage = "glBufferStorage"(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    buffer fn clear_tex_image = "glClearTexImage"(texture: GLuint, level: GLint, format: GLenum, kind: GLenum, data: *const c_void);

    // -- 4.5 ----------------------------------------------------------------
    scalar fn bind_texture_unit = "glBindTextureUnit"(unit: GLuint, texture: GLuint);
    scalar fn check_named_framebuffer_status = "glCheckNamedFramebufferStatus"(framebuffer: GLuint, target: GLenum) -> GLenum;
    scalar fn clip_control = "glClipControl"(origin: GLenum, depth: GLenum);
    buffer fn create_buffers = "glCreateBuffers"(n: GLsizei, buffers: &mut [GLuint]);
    buffer fn create_framebuffers = "glCreateFramebuffers"(n: GLsizei, framebuffers: &mut [GLuint]);
    buffer fn create_textures = "glCreateTextures"(target: GLenum, n: GLsizei, textures: &mut [GLuint]);
    buffer fn create_vertex_arrays = "glCreateVertexArrays"(n: GLsizei, arrays: &mut [GLuint]);
    scalar fn enable_vertex_array_attrib = "glEnableVertexArrayAttrib"(vaobj: GLuint, index: GLuint);
    scalar fn generate_texture_mipmap = "glGenerateTextureMipmap"(texture: GLuint);
    scalar fn get_graphics_reset_status = "glGetGraphicsResetStatus"() -> GLenum;
    scalar fn memory_barrier_by_region = "glMemoryBarrierByRegion"(barriers: GLbitfield);
    buffer fn named_buffer_data = "glNamedBufferData"(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    buffer fn named_buffer_storage = "glNamedBufferStorage"(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    buffer fn named_buffer_sub_data = "glNamedBufferSubData"(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    scalar fn named_framebuffer_texture = "glNamedFramebufferTexture"(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint);
    scalar fn texture_barrier = "glTextureBarrier"();
    scalar fn texture_parameteri = "glTextureParameteri"(texture: GLuint, pname: GLenum, param: GLint);
    scalar fn texture_storage_2d = "glTextureStorage2D"(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    buffer fn texture_sub_image_2d = "glTextureSubImage2D"(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, kind: GLenum, pixels: *const c_void);
    scalar fn vertex_array_attrib_binding = "glVertexArrayAttribBinding"(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
    scalar fn vertex_array_attrib_format = "glVertexArrayAttribFormat"(vaobj: GLuint, attribindex: GLuint, size: GLint, kind: GLenum, normalized: bool, relativeoffset: GLuint);
    scalar fn vertex_array_element_buffer = "glVertexArrayElementBuffer"(vaobj: GLuint, buffer: GLuint);
    scalar fn vertex_array_vertex_buffer = "glVertexArrayVertexBuffer"(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);

    // -- 4.6 ----------------------------------------------------------------
    string fn specialize_shader = "glSpecializeShader"(shader: GLuint, entry_point: &str, num_specialization_constants: GLuint, constant_index: &[GLuint], constant_value: &[GLuint]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use frankengl_core::descriptor::invalid_names;

    #[test]
    fn symbols_are_unique_and_prefixed() {
        assert!(invalid_names(&GlEntry::DESCRIPTORS).is_empty());
        for entry in GlEntry::ALL {
            assert!(entry.symbol().starts_with("gl"), "{}", entry.symbol());
        }
    }

    #[test]
    fn declared_shapes_match_marshalled_types() {
        for &entry in GlEntry::ALL {
            assert_eq!(
                entry.descriptor().shape,
                entry.marshalled_shape(),
                "{} {}",
                entry.symbol(),
                entry.descriptor().signature
            );
        }
    }

    #[test]
    fn lookup_by_symbol() {
        assert_eq!(GlEntry::from_symbol("glClear"), Some(GlEntry::clear));
        assert_eq!(GlEntry::from_symbol("glNotAThing"), None);
        assert_eq!(GlEntry::draw_elements.symbol(), "glDrawElements");
    }

    #[test]
    fn table_covers_every_shape() {
        for shape in frankengl_core::Shape::ALL {
            assert!(
                GlEntry::DESCRIPTORS.iter().any(|d| d.shape == shape),
                "no entry point with shape {shape}"
            );
        }
    }
}
