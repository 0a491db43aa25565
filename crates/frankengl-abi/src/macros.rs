//! Table declaration macro.
//!
//! Provides `entry_points!`, which turns a list of descriptor rows into an
//! index enum, a static [`BindingTable`](crate::table::BindingTable) and one
//! `unsafe fn` adapter per row.

/// Declare a binding table and its adapters.
///
/// # Usage
///
/// ```ignore
/// entry_points! {
///     pub static GL: GlEntry;
///
///     /// Doc comment for the adapter.
///     scalar fn clear = "glClear"(mask: GLbitfield);
///     string fn get_uniform_location = "glGetUniformLocation"(program: GLuint, name: &str) -> GLint;
/// }
/// ```
///
/// Each row names its shape (`scalar`, `string`, `string_out`, `buffer` or
/// `handle`), the host adapter, the native symbol and the host signature.
/// The native signature follows from the host types through
/// [`Marshal`](crate::marshal::Marshal) and
/// [`Unmarshal`](crate::marshal::Unmarshal). The declared shape is recorded
/// in the descriptor; `marshalled_shape()` on the index enum derives it from
/// the types so the two can be checked against each other.
#[macro_export]
macro_rules! entry_points {
    (
        $(#[$table_meta:meta])*
        $vis:vis static $table:ident : $index:ident;
        $(
            $(#[$meta:meta])*
            $shape:ident fn $host:ident = $symbol:literal
                ( $($arg:ident : $ty:ty),* $(,)? ) $(-> $ret:ty)?;
        )*
    ) => {
        /// Row index of each entry point in its binding table.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(usize)]
        $vis enum $index {
            $( $host, )*
        }

        #[allow(dead_code)]
        impl $index {
            /// Every entry point, in table order.
            pub const ALL: &'static [$index] = &[ $( $index::$host, )* ];

            pub const COUNT: usize = $index::ALL.len();

            /// Descriptor rows, in table order.
            pub const DESCRIPTORS: [$crate::EntryPoint; $index::COUNT] = [
                $(
                    $crate::EntryPoint::new(
                        $symbol,
                        $crate::__entry_shape!($shape),
                        stringify!(($($arg: $ty),*) $(-> $ret)?),
                    ),
                )*
            ];

            #[must_use]
            pub const fn symbol(self) -> &'static str {
                $index::DESCRIPTORS[self as usize].name
            }

            #[must_use]
            pub const fn descriptor(self) -> $crate::EntryPoint {
                $index::DESCRIPTORS[self as usize]
            }

            #[must_use]
            pub fn is_bound(self) -> bool {
                $table.is_bound(self as usize)
            }

            #[must_use]
            pub fn from_symbol(name: &str) -> Option<$index> {
                $index::ALL.iter().copied().find(|entry| entry.symbol() == name)
            }

            /// Shape implied by the host argument and result types.
            #[must_use]
            pub fn marshalled_shape(self) -> $crate::Shape {
                match self {
                    $(
                        $index::$host => $crate::Shape::classify(
                            &[ $( <$ty as $crate::marshal::Marshal>::KIND ),* ],
                            <$crate::__entry_ret!($($ret)?) as $crate::marshal::Unmarshal>::KIND,
                        ),
                    )*
                }
            }
        }

        $(#[$table_meta])*
        $vis static $table: $crate::table::BindingTable<{ $index::COUNT }> =
            $crate::table::BindingTable::new(stringify!($table), $index::DESCRIPTORS);

        $(
            $(#[$meta])*
            #[inline]
            #[allow(clippy::too_many_arguments)]
            $vis unsafe fn $host( $($arg: $ty),* ) -> $crate::__entry_ret!($($ret)?) {
                let addr = $table.address_or_abort($index::$host as usize);
                $( let $arg = $crate::marshal::Marshal::stage($arg); )*
                // SAFETY: the row fixes the native signature; context and
                // region validity are the caller's contract.
                let raw = unsafe {
                    $crate::call::NativeArgs::invoke(
                        ( $( $crate::marshal::Staged::raw(&$arg), )* ),
                        addr,
                    )
                };
                // SAFETY: `raw` is the native result for this row.
                unsafe {
                    <$crate::__entry_ret!($($ret)?) as $crate::marshal::Unmarshal>::from_raw(raw)
                }
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entry_ret {
    () => { () };
    ($ret:ty) => { $ret };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __entry_shape {
    (scalar) => { $crate::Shape::Scalar };
    (string) => { $crate::Shape::StringIn };
    (string_out) => { $crate::Shape::StringOut };
    (buffer) => { $crate::Shape::BufferOut };
    (handle) => { $crate::Shape::Handle };
}
