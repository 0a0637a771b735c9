use glam::Vec2;

/// Spark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkColor {
    Violet,
    Magenta,
    BurnOrange,
    BurnGold,
}

impl SparkColor {
    pub fn css(self) -> &'static str {
        match self {
            SparkColor::Violet => "#6C00FF",
            SparkColor::Magenta => "#C800FF",
            SparkColor::BurnOrange => "#FF4500",
            SparkColor::BurnGold => "#FFD700",
        }
    }
}

/// Spark - a short-lived particle thrown off the pointer
#[derive(Debug, Clone, Copy)]
pub struct Spark {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,     // ticks left
    pub max_life: u32, // opacity reference
    pub size: f32,
    pub color: SparkColor,
}

impl Spark {
    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    /// Remaining life as a 0..=1 fraction
    pub fn opacity(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        (self.life as f32 / self.max_life as f32).min(1.0)
    }

    /// Direction of travel in radians
    pub fn heading(&self) -> f32 {
        self.vel.y.atan2(self.vel.x)
    }
}

/// Glow trail - a fading halo left at the pointer position
#[derive(Debug, Clone, Copy)]
pub struct GlowTrail {
    pub id: u32,
    pub pos: Vec2,
    pub opacity: f32,
    pub size: f32,
}

impl GlowTrail {
    pub fn new(id: u32, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            pos,
            opacity: 1.0,
            size,
        }
    }

    pub fn is_faded(&self, threshold: f32) -> bool {
        self.opacity < threshold
    }
}
