/// A single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// one. The depth view belongs to the [`Gpu`](super::Gpu) and is shared by
/// every frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
