use crate::Control;

/// Opaque id of a texture owned by the host graphics layer. The panel never
/// dereferences it; it only routes it back into draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Uniform parameters for a textured-quad draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadParams {
    /// Tonemap HDR content (Reinhard + gamma in the host shader).
    pub hdr: bool,
    /// Mip level for cube-map sampling.
    pub level: f32,
}

/// Injected style configuration, in place of module-level globals.
#[derive(Clone, Copy, Debug)]
pub struct RenderStyle {
    pub pixel_ratio: f32,
    pub scale: f32,
}

/// Rasterizes all control chrome into one retained image. Invoked by the
/// scheduler only when some control was dirty since the last pass; expected
/// to rewrite every control's `active_area` (and texture-item child areas)
/// as it lays the vertical stack out.
pub trait ChromeRenderer {
    fn regenerate(&mut self, controls: &mut [Control], style: RenderStyle);
}

/// Draw surface the panel composites into. Rects are window-space
/// `[x0, y0, x1, y1]` with the y axis already flipped by the caller.
pub trait RenderContext {
    /// Composites the retained chrome image.
    fn draw_chrome(&mut self, rect: [f32; 4]);
    fn draw_texture_2d(&mut self, texture: TextureHandle, rect: [f32; 4], params: QuadParams);
    fn draw_texture_cube(&mut self, texture: TextureHandle, rect: [f32; 4], params: QuadParams);
}
