//! Read, write and resettable glyphs.
//!
//! A glyph is built once per logical field and reused for every mapping it
//! is applied to. Every field of a glyph is fixed at construction: builders
//! collect the specifications, [`build`](ReadGlyphBuilder::build) compiles
//! them, and the resulting glyph only exposes read accessors.
//!
//! ```
//! use glyphs::{Compound, Value, WriteGlyph, read, write};
//!
//! let glyph = WriteGlyph::<Value>::builder("settings>volume")
//!     .translate(|v: Value| match v.as_str().and_then(|s| s.parse::<i64>().ok()) {
//!         Some(n) => Value::Int(n),
//!         None => v,
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut doc = Compound::new();
//! write(&mut doc, &glyph, 11.into()).unwrap();
//! assert_eq!(read(&doc, &glyph).unwrap(), Value::Int(11));
//! ```

use std::{fmt, ops::Deref, sync::Arc};

use tracing::trace;

use crate::{Node, PathSpec, Plan, Result, TypeSpec, Value, coerce};

/// A translation applied to values on their way out of (or into) a mapping.
///
/// Meant for plain conversions; it should not carry logic of its own.
pub type Translate<V> = Arc<dyn Fn(V) -> V + Send + Sync>;

// -----------------------------------------------------------------------------
// Read

/// Reads one nested field out of a mapping.
#[derive(Clone)]
pub struct ReadGlyph<V: Node = Value> {
    plan: Plan,
    default_value: V,
    translate: Option<Translate<V>>,
}

impl<V: Node> ReadGlyph<V> {
    /// Starts building a glyph reading at `path`.
    #[inline]
    pub fn builder(path: impl Into<PathSpec>) -> ReadGlyphBuilder<V> {
        ReadGlyphBuilder {
            path: path.into(),
            types: None,
            translate: None,
            default_value: V::null(),
        }
    }

    /// The compiled plan used to read.
    #[inline]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// The value returned when nothing suitable is found.
    #[inline]
    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    /// The translation applied to values found in the mapping.
    #[inline]
    pub fn translate(&self) -> Option<&Translate<V>> {
        self.translate.as_ref()
    }
}

impl<V: Node + fmt::Debug> fmt::Debug for ReadGlyph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadGlyph")
            .field("path", &format_args!("{}", self.plan))
            .field("default_value", &self.default_value)
            .field("translate", &self.translate.is_some())
            .finish()
    }
}

/// Builder for [`ReadGlyph`].
pub struct ReadGlyphBuilder<V: Node = Value> {
    path: PathSpec,
    types: Option<TypeSpec>,
    translate: Option<Translate<V>>,
    default_value: V,
}

impl<V: Node> ReadGlyphBuilder<V> {
    /// Sets the type tags expected along the path.
    #[inline]
    pub fn types(mut self, types: impl Into<TypeSpec>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Sets the translation applied to found values.
    #[inline]
    pub fn translate(mut self, translate: impl Fn(V) -> V + Send + Sync + 'static) -> Self {
        self.translate = Some(Arc::new(translate));
        self
    }

    /// Sets the value returned when nothing is found. Defaults to null.
    #[inline]
    pub fn default_value(mut self, value: impl Into<V>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Compiles the path and types into a [`ReadGlyph`].
    pub fn build(self) -> Result<ReadGlyph<V>> {
        let plan = Plan::compile(self.path, self.types)?;
        trace!(plan = %plan, "compiled read plan");
        Ok(ReadGlyph {
            plan,
            default_value: self.default_value,
            translate: self.translate,
        })
    }
}

// -----------------------------------------------------------------------------
// Write

/// Reads a nested field and writes it back, possibly at another path.
#[derive(Clone)]
pub struct WriteGlyph<V: Node = Value> {
    read: ReadGlyph<V>,
    write_plan: Plan,
    write_translate: Option<Translate<V>>,
    allow_null_write: bool,
}

impl<V: Node> WriteGlyph<V> {
    /// Starts building a glyph reading and writing at `path`.
    ///
    /// The write side reuses the read path and types unless
    /// [`write_path`](WriteGlyphBuilder::write_path) is given. Written values
    /// are stringified unless another translation is set.
    #[inline]
    pub fn builder(path: impl Into<PathSpec>) -> WriteGlyphBuilder<V> {
        WriteGlyphBuilder {
            read: ReadGlyph::builder(path),
            write_path: None,
            write_types: None,
            write_translate: Some(Arc::new(coerce::stringify::<V>)),
            allow_null_write: false,
        }
    }

    /// The read side of this glyph.
    #[inline]
    pub fn as_read(&self) -> &ReadGlyph<V> {
        &self.read
    }

    /// The compiled plan used to write.
    #[inline]
    pub fn write_plan(&self) -> &Plan {
        &self.write_plan
    }

    /// The translation applied to values before they are written.
    #[inline]
    pub fn write_translate(&self) -> Option<&Translate<V>> {
        self.write_translate.as_ref()
    }

    /// Returns `true` if null may be written. Otherwise null writes are
    /// skipped.
    #[inline]
    pub fn allow_null_write(&self) -> bool {
        self.allow_null_write
    }
}

impl<V: Node> Deref for WriteGlyph<V> {
    type Target = ReadGlyph<V>;

    #[inline]
    fn deref(&self) -> &ReadGlyph<V> {
        &self.read
    }
}

impl<V: Node + fmt::Debug> fmt::Debug for WriteGlyph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteGlyph")
            .field("read", &self.read)
            .field("write_path", &format_args!("{}", self.write_plan))
            .field("write_translate", &self.write_translate.is_some())
            .field("allow_null_write", &self.allow_null_write)
            .finish()
    }
}

/// Builder for [`WriteGlyph`].
pub struct WriteGlyphBuilder<V: Node = Value> {
    read: ReadGlyphBuilder<V>,
    write_path: Option<PathSpec>,
    write_types: Option<TypeSpec>,
    write_translate: Option<Translate<V>>,
    allow_null_write: bool,
}

impl<V: Node> WriteGlyphBuilder<V> {
    /// Sets the type tags expected along the read path.
    #[inline]
    pub fn types(mut self, types: impl Into<TypeSpec>) -> Self {
        self.read = self.read.types(types);
        self
    }

    /// Sets the translation applied to read values.
    #[inline]
    pub fn translate(mut self, translate: impl Fn(V) -> V + Send + Sync + 'static) -> Self {
        self.read = self.read.translate(translate);
        self
    }

    /// Sets the value returned by reads when nothing is found.
    #[inline]
    pub fn default_value(mut self, value: impl Into<V>) -> Self {
        self.read = self.read.default_value(value);
        self
    }

    /// Writes at `path` instead of the read path.
    #[inline]
    pub fn write_path(mut self, path: impl Into<PathSpec>) -> Self {
        self.write_path = Some(path.into());
        self
    }

    /// Sets the type tags written along the write path.
    #[inline]
    pub fn write_types(mut self, types: impl Into<TypeSpec>) -> Self {
        self.write_types = Some(types.into());
        self
    }

    /// Sets the translation applied before writing.
    #[inline]
    pub fn write_translate(mut self, translate: impl Fn(V) -> V + Send + Sync + 'static) -> Self {
        self.write_translate = Some(Arc::new(translate));
        self
    }

    /// Writes values as given, without the default stringification.
    #[inline]
    pub fn raw_writes(mut self) -> Self {
        self.write_translate = None;
        self
    }

    /// Allows null to be written instead of skipping the write.
    #[inline]
    pub fn allow_null_write(mut self, allow: bool) -> Self {
        self.allow_null_write = allow;
        self
    }

    /// Adds a reset path and value, turning this into a
    /// [`ResettableGlyphBuilder`].
    #[inline]
    pub fn resettable(
        self,
        reset_path: impl Into<PathSpec>,
        reset_value: impl Into<V>,
    ) -> ResettableGlyphBuilder<V> {
        ResettableGlyphBuilder {
            write: self,
            reset_path: reset_path.into(),
            reset_types: None,
            reset_value: reset_value.into(),
        }
    }

    // write side falls back to the read path and types
    fn write_spec(&self) -> (PathSpec, Option<TypeSpec>) {
        match &self.write_path {
            Some(path) => (path.clone(), self.write_types.clone()),
            None => (
                self.read.path.clone(),
                self.write_types.clone().or_else(|| self.read.types.clone()),
            ),
        }
    }

    /// Compiles both plans into a [`WriteGlyph`].
    pub fn build(self) -> Result<WriteGlyph<V>> {
        let (write_path, write_types) = self.write_spec();
        let write_plan = Plan::compile(write_path, write_types)?;
        trace!(plan = %write_plan, "compiled write plan");
        Ok(WriteGlyph {
            read: self.read.build()?,
            write_plan,
            write_translate: self.write_translate,
            allow_null_write: self.allow_null_write,
        })
    }
}

// -----------------------------------------------------------------------------
// Resettable

/// A write glyph that can also signal a reset, possibly at another path.
#[derive(Clone)]
pub struct ResettableGlyph<V: Node = Value> {
    write: WriteGlyph<V>,
    reset_plan: Plan,
    reset_value: V,
}

impl<V: Node> ResettableGlyph<V> {
    /// Starts building a resettable glyph reading and writing at `path`,
    /// resetting by writing `reset_value` at `reset_path`.
    #[inline]
    pub fn builder(
        path: impl Into<PathSpec>,
        reset_path: impl Into<PathSpec>,
        reset_value: impl Into<V>,
    ) -> ResettableGlyphBuilder<V> {
        WriteGlyph::builder(path).resettable(reset_path, reset_value)
    }

    /// The write side of this glyph.
    #[inline]
    pub fn as_write(&self) -> &WriteGlyph<V> {
        &self.write
    }

    /// The compiled plan used to reset.
    #[inline]
    pub fn reset_plan(&self) -> &Plan {
        &self.reset_plan
    }

    /// The value expressing a reset.
    #[inline]
    pub fn reset_value(&self) -> &V {
        &self.reset_value
    }
}

impl<V: Node> Deref for ResettableGlyph<V> {
    type Target = WriteGlyph<V>;

    #[inline]
    fn deref(&self) -> &WriteGlyph<V> {
        &self.write
    }
}

impl<V: Node + fmt::Debug> fmt::Debug for ResettableGlyph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResettableGlyph")
            .field("write", &self.write)
            .field("reset_path", &format_args!("{}", self.reset_plan))
            .field("reset_value", &self.reset_value)
            .finish()
    }
}

/// Builder for [`ResettableGlyph`].
pub struct ResettableGlyphBuilder<V: Node = Value> {
    write: WriteGlyphBuilder<V>,
    reset_path: PathSpec,
    reset_types: Option<TypeSpec>,
    reset_value: V,
}

macro_rules! forward_to_write {
    ($($(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*);)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(mut self, $($arg: $ty),*) -> Self {
                self.write = self.write.$name($($arg),*);
                self
            }
        )*
    };
}

impl<V: Node> ResettableGlyphBuilder<V> {
    forward_to_write! {
        /// See [`WriteGlyphBuilder::types`].
        types(types: impl Into<TypeSpec>);
        /// See [`WriteGlyphBuilder::translate`].
        translate(translate: impl Fn(V) -> V + Send + Sync + 'static);
        /// See [`WriteGlyphBuilder::default_value`].
        default_value(value: impl Into<V>);
        /// See [`WriteGlyphBuilder::write_path`].
        write_path(path: impl Into<PathSpec>);
        /// See [`WriteGlyphBuilder::write_types`].
        write_types(types: impl Into<TypeSpec>);
        /// See [`WriteGlyphBuilder::write_translate`].
        write_translate(translate: impl Fn(V) -> V + Send + Sync + 'static);
        /// See [`WriteGlyphBuilder::raw_writes`].
        raw_writes();
        /// See [`WriteGlyphBuilder::allow_null_write`].
        allow_null_write(allow: bool);
    }

    /// Sets the type tags written along the reset path. Defaults to the
    /// write types.
    #[inline]
    pub fn reset_types(mut self, types: impl Into<TypeSpec>) -> Self {
        self.reset_types = Some(types.into());
        self
    }

    /// Compiles all three plans into a [`ResettableGlyph`].
    pub fn build(self) -> Result<ResettableGlyph<V>> {
        let reset_types = match self.reset_types {
            Some(types) => Some(types),
            None => self.write.write_spec().1,
        };
        let reset_plan = Plan::compile(self.reset_path, reset_types)?;
        trace!(plan = %reset_plan, "compiled reset plan");
        Ok(ResettableGlyph {
            write: self.write.build()?,
            reset_plan,
            reset_value: self.reset_value,
        })
    }
}
