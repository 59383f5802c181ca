/// Caller-tunable ceiling on declared sizes (decompressed length, field
/// length, record length) a decoder will trust before allocating.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_decoded_len: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_decoded_len: 16 * 1024 * 1024,
        }
    }
}

impl Limits {
    pub fn check(&self, declared: usize) -> Result<(), crate::Error> {
        if declared > self.max_decoded_len {
            return Err(crate::Error::LayerTooLarge {
                declared,
                limit: self.max_decoded_len,
            });
        }
        Ok(())
    }
}
