use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Fixed series colours
// ---------------------------------------------------------------------------

/// Colour of the first error series (column 1): CSS "blue", #0000FF.
pub const SERIES_A: Color32 = to_color32(palette::named::BLUE);

/// Colour of the second error series (column 2): CSS "green", #008000.
pub const SERIES_B: Color32 = to_color32(palette::named::GREEN);

const fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}
