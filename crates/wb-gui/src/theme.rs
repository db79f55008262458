//! Colors and text sizes for the route window.

/// Title font size.
pub const TITLE_SIZE: f32 = 28.0;
/// Landmark label font size.
pub const LABEL_SIZE: u16 = 22;
/// Legend font size.
pub const LEGEND_SIZE: f32 = 20.0;
/// Legend line height.
pub const LEGEND_LINE_H: f32 = 22.0;
/// Route line thickness.
pub const ROUTE_THICKNESS: f32 = 4.0;
/// Landmark dot radius.
pub const DOT_RADIUS: f32 = 8.0;

/// Named colors used by the route window.
pub mod palette {
    use macroquad::prelude::Color;

    /// Window background.
    pub const MIDNIGHT_BLUE: Color = Color::new(0.098, 0.098, 0.439, 1.0);
    /// Route line and title.
    pub const GOLD: Color = Color::new(1.0, 0.843, 0.0, 1.0);
    /// Landmark dots.
    pub const ORANGE: Color = Color::new(1.0, 0.647, 0.0, 1.0);
    /// Labels and legend text.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// The close hint.
    pub const LIGHT_SKY_BLUE: Color = Color::new(0.529, 0.808, 0.980, 1.0);
}
