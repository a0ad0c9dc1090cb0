use swivel_core::{Modifier, View, ViewKind, theme};

/// Thin full-width horizontal rule in the card color.
#[allow(non_snake_case)]
pub fn Divider() -> View {
    View::new(ViewKind::Box).modifier(
        Modifier::new()
            .fill_max_width()
            .height(2.0)
            .clip_rounded(4.0)
            .background(theme().card),
    )
}
