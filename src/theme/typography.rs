//! Typography - Gallery font sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_XL: f32 = 20.0;
}
