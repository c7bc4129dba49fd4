use bytemuck::{Pod, Zeroable};

/// Per-instance render data for the host's renderer.
/// Layout is 8 floats = 32 bytes stride, so the buffer can be read as a flat `&[f32]`.
///
/// Positions are screen-space already: the level scrolls the world, not a camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// `EntityKind` discriminant.
    pub kind: f32,
    /// Animation frame index, 0 for static tiles.
    pub frame: f32,
    /// Visual sub-variant (hole style), 0 when not applicable.
    pub variant: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer rebuilt once per frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as consecutive floats, `FLOATS` per instance.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
