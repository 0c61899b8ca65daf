mod render;
mod ring;

pub use render::draw_game;
pub use ring::RingLayout;
