//! Reference-counted resource payloads (textures, cursor images).
//!
//! Records own their resources through `Arc`; dropping the record releases the reference.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;
use std::sync::Arc;

/// An externally loaded asset referenced by style values.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Resource {
    pub id: u64,
    pub path: String,
}

/// Shared handle to a [`Resource`].
#[derive(Clone, Debug)]
pub struct ResourceHandle(Arc<Resource>);

impl ResourceHandle {
    pub fn new(id: u64, path: impl Into<String>) -> Self {
        Self(Arc::new(Resource {
            id,
            path: path.into(),
        }))
    }

    /// Build a handle whose id is derived from the path, as used by `url(...)` values.
    pub fn from_path(path: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self::new(hasher.finish(), path)
    }

    pub fn id(&self) -> u64 {
        self.0.id
    }

    pub fn path(&self) -> &str {
        &self.0.path
    }

    /// Number of live references to the underlying resource.
    pub fn reference_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl PartialEq for ResourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl Eq for ResourceHandle {}

impl Hash for ResourceHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

/// `cursor`: either a texture with a hotspot or one of the built-in cursors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cursor {
    pub texture: Option<ResourceHandle>,
    pub hotspot_x: f32,
    pub hotspot_y: f32,
    /// Built-in cursor id, used when there is no texture. See [`builtin_cursor_id`].
    pub default_cursor_id: i32,
}

impl Cursor {
    pub const fn builtin(default_cursor_id: i32) -> Self {
        Self {
            texture: None,
            hotspot_x: 0.0,
            hotspot_y: 0.0,
            default_cursor_id,
        }
    }

    pub const fn texture(texture: ResourceHandle, hotspot_x: f32, hotspot_y: f32) -> Self {
        Self {
            texture: Some(texture),
            hotspot_x,
            hotspot_y,
            default_cursor_id: 0,
        }
    }
}

/// Names of the built-in cursors, indexed by id.
const BUILTIN_CURSORS: &[&str] = &[
    "arrow",
    "text",
    "resize-vertical",
    "resize-horizontal",
    "link",
    "slide-arrow",
    "resize-up-right",
    "resize-up-left",
    "move-arrow",
    "rotate-arrow",
    "scale-arrow",
    "arrow-plus",
    "arrow-minus",
    "pan",
    "orbit",
    "zoom",
    "fps",
    "split-resize-up-down",
    "split-resize-left-right",
];

/// Map a built-in cursor name to its id.
pub fn builtin_cursor_id(name: &str) -> Option<i32> {
    BUILTIN_CURSORS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
        .and_then(|index| i32::try_from(index).ok())
}
