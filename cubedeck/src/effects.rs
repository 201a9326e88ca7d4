use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

const DARK: Color = Color::Rgb(13, 17, 23);

/// Screen transition: content sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (350, Interpolation::CubicOut),
    )
}

/// Notice popups materialize instead of snapping in
pub fn notice_in() -> Effect {
    fx::coalesce((300, Interpolation::CubicOut))
}

/// Brief flash on the storage panel after a successful export or import
pub fn storage_flash() -> Effect {
    let green = Color::Rgb(22, 163, 74);
    let to = fx::fade_to_fg(green, (150, Interpolation::QuadOut));
    let back = fx::fade_from_fg(green, (500, Interpolation::QuadIn));
    fx::sequence(&[to, back])
}
