use bytemuck::{Pod, Zeroable};

use crate::swarm::ParticleFrame;

/// Per-particle instance record laid out for a GPU vertex buffer.
///
/// Opacity travels in `color[3]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub translate: [f32; 2],
    pub rotate: f32,
    pub scale: f32,
    pub color: [f32; 4],
    pub image: u32,
    pub _pad: [u32; 3],
}

impl From<&ParticleFrame> for ParticleInstance {
    fn from(frame: &ParticleFrame) -> Self {
        let [r, g, b] = frame.color;
        Self {
            translate: frame.pose.translation().to_array(),
            rotate: frame.pose.rotate_radians,
            scale: frame.pose.scale,
            color: [r, g, b, frame.pose.opacity],
            image: frame.image as u32,
            _pad: [0; 3],
        }
    }
}

/// Packs a frame's particles into instance records, keeping their order.
pub fn pack_instances(frames: &[ParticleFrame], out: &mut Vec<ParticleInstance>) {
    out.clear();
    out.extend(frames.iter().map(ParticleInstance::from));
}
