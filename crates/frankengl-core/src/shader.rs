//! Pure helpers for shader program assembly.
//!
//! Compilation and linking belong to the native library; these only shape
//! the inputs and outputs around those calls.

/// `glGetString(GL_SHADING_LANGUAGE_VERSION)` on OpenGL ES 3.0 devices.
pub const GLSL_ES_300: &str = "OpenGL ES GLSL ES 3.00";

const ES_PRELUDE: [&str; 2] = ["#version 300 es\n", "precision highp float;\n"];
const DESKTOP_PRELUDE: [&str; 1] = ["#version 330\n"];

/// Prepend the version directive matching the reported GLSL version.
///
/// ES 3.0 gets `#version 300 es` plus a default float precision; everything
/// else is treated as desktop GLSL 3.30.
#[must_use]
pub fn add_prelude<'a>(source: &[&'a str], glsl_version: &str) -> Vec<&'a str> {
    let prelude: &[&'static str] = if glsl_version == GLSL_ES_300 {
        &ES_PRELUDE
    } else {
        &DESKTOP_PRELUDE
    };
    let mut out = Vec::with_capacity(prelude.len() + source.len());
    out.extend_from_slice(prelude);
    out.extend_from_slice(source);
    out
}

/// Uniform label for an active uniform name: array uniforms such as
/// `lights[0]` are reported by their base label `lights`.
#[must_use]
pub fn uniform_label(name: &str) -> &str {
    match name.split_once('[') {
        Some((label, _)) => label,
        None => name,
    }
}

/// Trim a native name buffer to the bytes the driver reported writing.
///
/// `written` is clamped to the buffer, and anything after an embedded NUL is
/// dropped. Invalid UTF-8 is replaced rather than rejected.
#[must_use]
pub fn written_name(buf: &[u8], written: i32) -> String {
    let len = usize::try_from(written).unwrap_or(0).min(buf.len());
    let bytes = &buf[..len];
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_prelude() {
        let src = add_prelude(&["void main() {}\n"], "4.10");
        assert_eq!(src, vec!["#version 330\n", "void main() {}\n"]);
    }

    #[test]
    fn es_prelude() {
        let src = add_prelude(&["a", "b"], GLSL_ES_300);
        assert_eq!(
            src,
            vec!["#version 300 es\n", "precision highp float;\n", "a", "b"]
        );
    }

    #[test]
    fn empty_source_still_gets_prelude() {
        assert_eq!(add_prelude(&[], "").len(), 1);
    }

    #[test]
    fn array_uniforms_use_base_label() {
        assert_eq!(uniform_label("lights[0]"), "lights");
        assert_eq!(uniform_label("mvp"), "mvp");
        assert_eq!(uniform_label("bones[12].pos"), "bones");
    }

    #[test]
    fn written_name_clamps_and_stops_at_nul() {
        let buf = *b"position\0xx";
        assert_eq!(written_name(&buf, 8), "position");
        assert_eq!(written_name(&buf, 64), "position");
        assert_eq!(written_name(&buf, 3), "pos");
        assert_eq!(written_name(&buf, -1), "");
    }
}
