//! Symbolic GL constants.
//!
//! Values are taken from `glcorearb.h` with the `GL_` prefix dropped. The
//! binding layer never interprets them; they are opaque arguments. The table
//! form ([`CONSTANTS`], [`lookup`]) exists for tooling that resolves names
//! at run time.

use crate::types::{GLenum, GLuint64};

macro_rules! gl_constants {
    ($( $name:ident = $value:expr ),* $(,)?) => {
        $(
            pub const $name: GLenum = $value;
        )*

        /// Every constant in declaration order, keyed by its unprefixed name.
        pub const CONSTANTS: &[(&str, u64)] = &[
            $( (stringify!($name), $name as u64), )*
            ("TIMEOUT_IGNORED", TIMEOUT_IGNORED),
        ];
    };
}

/// `glClientWaitSync`/`glWaitSync` timeout meaning "wait forever".
pub const TIMEOUT_IGNORED: GLuint64 = 0xFFFF_FFFF_FFFF_FFFF;

gl_constants! {
    // Buffer bits
    DEPTH_BUFFER_BIT = 0x0000_0100,
    STENCIL_BUFFER_BIT = 0x0000_0400,
    COLOR_BUFFER_BIT = 0x0000_4000,

    // Primitives
    POINTS = 0x0000,
    LINES = 0x0001,
    LINE_LOOP = 0x0002,
    LINE_STRIP = 0x0003,
    TRIANGLES = 0x0004,
    TRIANGLE_STRIP = 0x0005,
    TRIANGLE_FAN = 0x0006,

    // Comparison functions
    NEVER = 0x0200,
    LESS = 0x0201,
    EQUAL = 0x0202,
    LEQUAL = 0x0203,
    GREATER = 0x0204,
    NOTEQUAL = 0x0205,
    GEQUAL = 0x0206,
    ALWAYS = 0x0207,

    // Blending
    ZERO = 0,
    ONE = 1,
    SRC_COLOR = 0x0300,
    ONE_MINUS_SRC_COLOR = 0x0301,
    SRC_ALPHA = 0x0302,
    ONE_MINUS_SRC_ALPHA = 0x0303,
    DST_ALPHA = 0x0304,
    ONE_MINUS_DST_ALPHA = 0x0305,
    DST_COLOR = 0x0306,
    ONE_MINUS_DST_COLOR = 0x0307,
    FUNC_ADD = 0x8006,

    // Faces and polygon modes
    FRONT = 0x0404,
    BACK = 0x0405,
    FRONT_AND_BACK = 0x0408,
    CW = 0x0900,
    CCW = 0x0901,
    POINT = 0x1B00,
    LINE = 0x1B01,
    FILL = 0x1B02,

    // Errors
    NO_ERROR = 0,
    INVALID_ENUM = 0x0500,
    INVALID_VALUE = 0x0501,
    INVALID_OPERATION = 0x0502,
    OUT_OF_MEMORY = 0x0505,
    INVALID_FRAMEBUFFER_OPERATION = 0x0506,

    // Capabilities
    CULL_FACE = 0x0B44,
    DEPTH_TEST = 0x0B71,
    STENCIL_TEST = 0x0B90,
    BLEND = 0x0BE2,
    SCISSOR_TEST = 0x0C11,
    MULTISAMPLE = 0x809D,
    PROGRAM_POINT_SIZE = 0x8642,
    FRAMEBUFFER_SRGB = 0x8DB9,
    DEBUG_OUTPUT = 0x92E0,
    DEBUG_OUTPUT_SYNCHRONOUS = 0x8242,

    // Pixel storage
    UNPACK_ALIGNMENT = 0x0CF5,
    PACK_ALIGNMENT = 0x0D05,

    // Data types
    BYTE = 0x1400,
    UNSIGNED_BYTE = 0x1401,
    SHORT = 0x1402,
    UNSIGNED_SHORT = 0x1403,
    INT = 0x1404,
    UNSIGNED_INT = 0x1405,
    FLOAT = 0x1406,
    DOUBLE = 0x140A,
    HALF_FLOAT = 0x140B,

    // Pixel formats
    DEPTH_COMPONENT = 0x1902,
    RED = 0x1903,
    RGB = 0x1907,
    RGBA = 0x1908,
    R8 = 0x8229,
    RG8 = 0x822B,
    RGB8 = 0x8051,
    RGBA8 = 0x8058,
    RGBA16F = 0x881A,
    RGBA32F = 0x8814,
    SRGB8_ALPHA8 = 0x8C43,
    DEPTH_COMPONENT24 = 0x81A6,
    DEPTH24_STENCIL8 = 0x88F0,

    // Strings and versions
    VENDOR = 0x1F00,
    RENDERER = 0x1F01,
    VERSION = 0x1F02,
    EXTENSIONS = 0x1F03,
    SHADING_LANGUAGE_VERSION = 0x8B8C,
    MAJOR_VERSION = 0x821B,
    MINOR_VERSION = 0x821C,
    NUM_EXTENSIONS = 0x821D,

    // Textures
    TEXTURE_2D = 0x0DE1,
    TEXTURE_3D = 0x806F,
    TEXTURE_2D_ARRAY = 0x8C1A,
    TEXTURE_2D_MULTISAMPLE = 0x9100,
    TEXTURE_CUBE_MAP = 0x8513,
    TEXTURE_CUBE_MAP_POSITIVE_X = 0x8515,
    TEXTURE_MAG_FILTER = 0x2800,
    TEXTURE_MIN_FILTER = 0x2801,
    TEXTURE_WRAP_S = 0x2802,
    TEXTURE_WRAP_T = 0x2803,
    TEXTURE_WRAP_R = 0x8072,
    TEXTURE_BASE_LEVEL = 0x813C,
    TEXTURE_MAX_LEVEL = 0x813D,
    NEAREST = 0x2600,
    LINEAR = 0x2601,
    NEAREST_MIPMAP_NEAREST = 0x2700,
    LINEAR_MIPMAP_NEAREST = 0x2701,
    NEAREST_MIPMAP_LINEAR = 0x2702,
    LINEAR_MIPMAP_LINEAR = 0x2703,
    REPEAT = 0x2901,
    CLAMP_TO_EDGE = 0x812F,
    MIRRORED_REPEAT = 0x8370,
    TEXTURE0 = 0x84C0,
    TEXTURE1 = 0x84C1,
    TEXTURE2 = 0x84C2,
    TEXTURE3 = 0x84C3,
    TEXTURE4 = 0x84C4,
    TEXTURE5 = 0x84C5,
    TEXTURE6 = 0x84C6,
    TEXTURE7 = 0x84C7,
    TEXTURE8 = 0x84C8,
    TEXTURE9 = 0x84C9,

    // Buffers
    ARRAY_BUFFER = 0x8892,
    ELEMENT_ARRAY_BUFFER = 0x8893,
    UNIFORM_BUFFER = 0x8A11,
    SHADER_STORAGE_BUFFER = 0x90D2,
    DRAW_INDIRECT_BUFFER = 0x8F3F,
    STREAM_DRAW = 0x88E0,
    STATIC_DRAW = 0x88E4,
    DYNAMIC_DRAW = 0x88E8,
    READ_ONLY = 0x88B8,
    WRITE_ONLY = 0x88B9,
    READ_WRITE = 0x88BA,
    MAP_READ_BIT = 0x0001,
    MAP_WRITE_BIT = 0x0002,
    MAP_INVALIDATE_RANGE_BIT = 0x0004,
    MAP_INVALIDATE_BUFFER_BIT = 0x0008,

    // Shaders and programs
    FRAGMENT_SHADER = 0x8B30,
    VERTEX_SHADER = 0x8B31,
    GEOMETRY_SHADER = 0x8DD9,
    COMPUTE_SHADER = 0x91B9,
    DELETE_STATUS = 0x8B80,
    COMPILE_STATUS = 0x8B81,
    LINK_STATUS = 0x8B82,
    VALIDATE_STATUS = 0x8B83,
    INFO_LOG_LENGTH = 0x8B84,
    ATTACHED_SHADERS = 0x8B85,
    ACTIVE_UNIFORMS = 0x8B86,
    ACTIVE_UNIFORM_MAX_LENGTH = 0x8B87,
    SHADER_SOURCE_LENGTH = 0x8B88,
    ACTIVE_ATTRIBUTES = 0x8B89,
    ACTIVE_ATTRIBUTE_MAX_LENGTH = 0x8B8A,
    CURRENT_PROGRAM = 0x8B8D,
    INVALID_INDEX = 0xFFFF_FFFF,

    // Framebuffers
    FRAMEBUFFER = 0x8D40,
    RENDERBUFFER = 0x8D41,
    READ_FRAMEBUFFER = 0x8CA8,
    DRAW_FRAMEBUFFER = 0x8CA9,
    COLOR_ATTACHMENT0 = 0x8CE0,
    DEPTH_ATTACHMENT = 0x8D00,
    STENCIL_ATTACHMENT = 0x8D20,
    DEPTH_STENCIL_ATTACHMENT = 0x821A,
    FRAMEBUFFER_COMPLETE = 0x8CD5,

    // Sync objects
    SYNC_GPU_COMMANDS_COMPLETE = 0x9117,
    SYNC_FLUSH_COMMANDS_BIT = 0x0000_0001,
    ALREADY_SIGNALED = 0x911A,
    TIMEOUT_EXPIRED = 0x911B,
    CONDITION_SATISFIED = 0x911C,
    WAIT_FAILED = 0x911D,

    // Memory barriers
    SHADER_STORAGE_BARRIER_BIT = 0x0000_2000,
    ALL_BARRIER_BITS = 0xFFFF_FFFF,

    // Debug output
    DEBUG_SOURCE_API = 0x8246,
    DEBUG_TYPE_ERROR = 0x824C,
    DEBUG_SEVERITY_NOTIFICATION = 0x826B,
    DEBUG_SEVERITY_HIGH = 0x9146,
    DEBUG_SEVERITY_MEDIUM = 0x9147,
    DEBUG_SEVERITY_LOW = 0x9148,
}

/// Resolve a constant by name. Accepts the name with or without `GL_`.
#[must_use]
pub fn lookup(name: &str) -> Option<u64> {
    let key = name.strip_prefix("GL_").unwrap_or(name);
    CONSTANTS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|&(_, value)| value)
}
