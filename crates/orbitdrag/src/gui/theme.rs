use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub disc: Srgba<f64>,
    pub disc_border: Srgba<f64>,
    pub label: Srgba<f64>,
    pub orbit_guide: Srgba<f64>,
}

impl ThemeColors {
    #[allow(deprecated)]
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            disc: Self::lookup_color(
                context,
                "accent_bg_color",
                Srgba::new(0.0, 0.48, 1.0, 1.0),
                None,
            ),
            disc_border: Self::lookup_color(
                context,
                "accent_color",
                Srgba::new(0.0, 0.0, 1.0, 1.0),
                None,
            ),
            label: Self::lookup_color(
                context,
                "accent_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
            orbit_guide: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.2, 0.2, 0.2, 0.15),
                Some(0.12),
            ),
        }
    }

    #[allow(deprecated)]
    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.orbit-area {
    background-color: @theme_base_color;
}
.score-input {
    font-family: monospace;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
