//! Source-over compositing on premultiplied RGBA8.

use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::{add_sat_u8, mul_div255_u8};
use crate::render::surface::Surface;

pub type PremulRgba8 = [u8; 4];

pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255u16 - u16::from(sa);
            let mut out = [0u8; 4];
            for i in 0..4 {
                out[i] = add_sat_u8(src[i], mul_div255_u8(u16::from(dst[i]), inv));
            }
            out
        }
    }
}

/// Composite `src` over `dst` in place. Both surfaces must have the same size.
pub fn over_in_place(dst: &mut Surface, src: &Surface) -> CardResult<()> {
    if dst.width != src.width || dst.height != src.height {
        return Err(CardError::render(format!(
            "cannot composite {}x{} over {}x{}",
            src.width, src.height, dst.width, dst.height
        )));
    }
    for (d, s) in dst.data.chunks_exact_mut(4).zip(src.data.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Straight-alpha copy of premultiplied pixels, for encoders.
pub fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let a = px[3];
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        let un = |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
        out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), a]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
