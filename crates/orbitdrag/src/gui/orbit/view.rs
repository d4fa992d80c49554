use super::{BORDER_WIDTH, GUIDE_WIDTH, LABEL_SIZE_FACTOR, MIN_LABEL_SIZE};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use discstack::{DiscFrame, OrbitStack};
use palette::Srgba;
use std::f64::consts::PI;

struct DiscRenderer<'a> {
    frame: &'a DiscFrame<'a>,
}

impl<'a> DiscRenderer<'a> {
    fn new(frame: &'a DiscFrame<'a>) -> Self {
        Self { frame }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_circle(cr, colors)?;
        self.draw_label(cr, colors)?;
        Ok(())
    }

    fn draw_circle(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let center = self.frame.center;
        cr.new_path();
        cr.arc(center.x, center.y, self.frame.radius, 0.0, 2.0 * PI);
        set_source(cr, colors.disc);
        cr.fill_preserve()?;
        set_source(cr, colors.disc_border);
        cr.set_line_width(BORDER_WIDTH);
        cr.stroke()
    }

    fn draw_label(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let size = self.frame.radius * LABEL_SIZE_FACTOR;
        if size < MIN_LABEL_SIZE {
            return Ok(());
        }

        set_source(cr, colors.label);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(size);
        if let Ok(ext) = cr.text_extents(self.frame.label) {
            // centre on the ink box, not the baseline
            cr.move_to(
                self.frame.center.x - ext.width() / 2.0 - ext.x_bearing(),
                self.frame.center.y - ext.height() / 2.0 - ext.y_bearing(),
            );
            cr.show_text(self.frame.label)?;
        }
        Ok(())
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(cr: &Context, orbit: &OrbitStack, colors: &ThemeColors) -> Result<(), cairo::Error> {
    draw_orbit_guide(cr, orbit, colors)?;

    for frame in orbit.render().iter().filter(|f| f.visible && f.radius > 0.0) {
        DiscRenderer::new(frame).draw(cr, colors)?;
    }
    Ok(())
}

fn draw_orbit_guide(
    cr: &Context,
    orbit: &OrbitStack,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    // nothing on the orbit yet
    if !orbit.is_dragging() && orbit.active_index() + 1 == orbit.discs().len() {
        return Ok(());
    }

    let geometry = orbit.geometry();
    cr.new_path();
    cr.arc(
        geometry.center.x,
        geometry.center.y,
        geometry.orbit_path_radius,
        0.0,
        2.0 * PI,
    );
    set_source(cr, colors.orbit_guide);
    cr.set_line_width(GUIDE_WIDTH);
    cr.stroke()
}
