use rand::{RngCore, SeedableRng};

/// Frame time handed over by the host
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Seconds since the previous frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Advance by one host frame
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt.max(0.0);
        self.now += self.dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Seedable random source for the emitters
pub struct FxRng(pub rand::rngs::StdRng);

impl FxRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }
}

impl Default for FxRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RngCore for FxRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
