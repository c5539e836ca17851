//! Gaussian blur for text shadows, separable and fixed-point.

use crate::foundation::error::{CardError, CardResult};
use crate::render::surface::Surface;

/// Blur `surface` in place with a gaussian of the given pixel radius (sigma = radius / 2).
pub fn blur_surface(surface: &mut Surface, radius: u32) -> CardResult<()> {
    if radius == 0 || surface.width == 0 || surface.height == 0 {
        return Ok(());
    }
    let kernel = kernel_q16(radius)?;
    let (w, h) = (surface.width as usize, surface.height as usize);
    let mut tmp = vec![0u8; surface.data.len()];
    pass(&surface.data, &mut tmp, w, h, Axis::X, &kernel);
    pass(&tmp, &mut surface.data, w, h, Axis::Y, &kernel);
    Ok(())
}

/// Normalized weights in Q16; they always sum to exactly 65536.
fn kernel_q16(radius: u32) -> CardResult<Vec<u32>> {
    let sigma = f64::from(radius) / 2.0;
    let r = i64::from(radius);
    let raw: Vec<f64> = (-r..=r)
        .map(|i| (-(i * i) as f64 / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f64 = raw.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return Err(CardError::render("degenerate blur kernel"));
    }

    let mut weights: Vec<u32> = raw
        .iter()
        .map(|w| ((w / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + 65536 - total).clamp(0, 65536) as u32;
    Ok(weights)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn pass(src: &[u8], dst: &mut [u8], w: usize, h: usize, axis: Axis, kernel: &[u32]) {
    let radius = (kernel.len() / 2) as isize;
    let (len, stride) = match axis {
        Axis::X => (w, 1),
        Axis::Y => (h, w),
    };
    for y in 0..h {
        for x in 0..w {
            let pos = match axis {
                Axis::X => x,
                Axis::Y => y,
            } as isize;
            let origin = (y * w + x) as isize - pos * stride as isize;
            let mut acc = [0u64; 4];
            for (ki, &kw) in kernel.iter().enumerate() {
                let s = (pos + ki as isize - radius).clamp(0, len as isize - 1);
                let idx = (origin + s * stride as isize) as usize * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out = (y * w + x) * 4;
            for c in 0..4 {
                dst[out + c] = ((acc[c] + 32768) >> 16).min(255) as u8;
            }
        }
    }
}
