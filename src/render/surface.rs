use crate::foundation::core::Canvas;
use crate::foundation::error::{CardError, CardResult};

/// Premultiplied RGBA8 pixel buffer, one per layer plus the composed frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Surface {
    pub fn transparent(canvas: Canvas) -> Self {
        Self::filled(canvas, [0, 0, 0, 0])
    }

    pub fn filled(canvas: Canvas, premul: [u8; 4]) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: premul.repeat(canvas.byte_len() / 4),
        }
    }

    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> CardResult<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(CardError::render("surface byte length mismatch"));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn clear(&mut self, premul: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}
