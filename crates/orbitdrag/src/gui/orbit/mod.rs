pub mod settle;
pub mod view;

pub use settle::SettleTimer;
pub use view::draw;

pub const BORDER_WIDTH: f64 = 1.0;
pub const LABEL_SIZE_FACTOR: f64 = 0.6; // label font size per unit of disc radius
pub const MIN_LABEL_SIZE: f64 = 6.0; // below this the label is skipped
pub const GUIDE_WIDTH: f64 = 2.0;
pub const SETTLE_FRAME_MS: u64 = 16;
