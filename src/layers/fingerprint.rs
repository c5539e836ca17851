use crate::foundation::math::Fnv1a64;

/// 128-bit digest of the card fields one layer depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Feeds dependency values into two independently seeded FNV-1a streams.
pub(crate) struct DepHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl DepHasher {
    pub(crate) fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    pub(crate) fn u8(&mut self, v: u8) -> &mut Self {
        self.a.write_u8(v);
        self.b.write_u8(v);
        self
    }

    pub(crate) fn u64(&mut self, v: u64) -> &mut Self {
        self.a.write_u64(v);
        self.b.write_u64(v);
        self
    }

    pub(crate) fn bool(&mut self, v: bool) -> &mut Self {
        self.u8(u8::from(v))
    }

    /// Length-prefixed so adjacent strings cannot alias.
    pub(crate) fn str(&mut self, s: &str) -> &mut Self {
        self.u64(s.len() as u64);
        self.a.write_bytes(s.as_bytes());
        self.b.write_bytes(s.as_bytes());
        self
    }

    pub(crate) fn strs(&mut self, items: &[String]) -> &mut Self {
        self.u64(items.len() as u64);
        for s in items {
            self.str(s);
        }
        self
    }

    pub(crate) fn finish(&self) -> DepFingerprint {
        DepFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}
