use crate::config;
use crate::events::AppEvent;
use crate::gui::orbit::{self, SETTLE_FRAME_MS, SettleTimer};
use crate::gui::theme::{self, ThemeColors};
use crate::scores::{self, ScoreInputError};
use discstack::{OrbitStack, Point, Size, format_score};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub struct AppModel {
    pub orbit: Rc<RefCell<OrbitStack>>,
    pub score_buffer: gtk::TextBuffer,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
    settle_timer: SettleTimer,
}

#[derive(Debug)]
pub enum AppMsg {
    ApplyScores,
    DragBegin(Point),
    DragUpdate(f64),
    DragEnd(f64),
    Resize(Size),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn score_text(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|s| format_score(*s))
        .collect::<Vec<_>>()
        .join(", ")
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (OrbitStack, Vec<f64>, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Orbit Drag"),
            set_default_size: (480, 720),

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 8,
                set_margin_all: 12,

                gtk::ScrolledWindow {
                    set_min_content_height: 72,

                    #[wrap(Some)]
                    set_child = &gtk::TextView {
                        set_buffer: Some(&model.score_buffer),
                        set_wrap_mode: gtk::WrapMode::WordChar,
                        add_css_class: "score-input",
                    },
                },

                gtk::Button {
                    set_label: "Apply Scores",
                    connect_clicked => AppMsg::ApplyScores,
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "orbit-area",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(Size::new(width as f64, height as f64)));
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::DragBegin(Point::new(x, y)));
                        },
                        connect_drag_update[sender] => move |_, _, dy| {
                            sender.input(AppMsg::DragUpdate(dy));
                        },
                        connect_drag_end[sender] => move |_, _, dy| {
                            sender.input(AppMsg::DragEnd(dy));
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (orbit, initial_scores, rx) = init;

        theme::load_css();

        let score_buffer = gtk::TextBuffer::new(None);
        score_buffer.set_text(&score_text(&initial_scores));

        let model = AppModel {
            orbit: Rc::new(RefCell::new(orbit)),
            score_buffer,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
            settle_timer: SettleTimer::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let orbit_draw = model.orbit.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                #[allow(deprecated)]
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                if let Err(e) = orbit::draw(cr, &orbit_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let redraw = match msg {
            AppMsg::ApplyScores => self.apply_scores(),
            AppMsg::DragBegin(point) => self.orbit.borrow_mut().on_gesture_begin(point),
            AppMsg::DragUpdate(dy) => self.orbit.borrow_mut().on_gesture_changed(dy),
            AppMsg::DragEnd(dy) => {
                let outcome = self.orbit.borrow_mut().on_gesture_ended(dy);
                if outcome.is_some() {
                    self.start_settle();
                }
                outcome.is_some()
            }
            AppMsg::Resize(size) => self.orbit.borrow_mut().on_container_resized(size),
            AppMsg::ConfigReload => self.reload_config(),
        };

        if redraw {
            self.drawing_area.queue_draw();
        }
    }
}

impl AppModel {
    fn apply_scores(&self) -> bool {
        let text = self.score_buffer.text(
            &self.score_buffer.start_iter(),
            &self.score_buffer.end_iter(),
            false,
        );

        match scores::parse_scores(&text) {
            Ok(values) => {
                self.orbit.borrow_mut().set_scores(&values);
                true
            }
            Err(e) => {
                self.show_input_error(&e);
                false
            }
        }
    }

    fn show_input_error(&self, error: &ScoreInputError) {
        log::debug!("Rejected score input: {}", error);
        gtk::AlertDialog::builder()
            .modal(true)
            .message("Invalid Scores")
            .detail(error.to_string())
            .build()
            .show(Some(&self.root));
    }

    fn reload_config(&self) -> bool {
        match config::load_config() {
            Ok(new_config) => {
                let mut orbit = self.orbit.borrow_mut();
                orbit.set_settle(new_config.settle());
                if let Some(list) = &new_config.scores {
                    orbit.set_scores(list);
                    self.score_buffer.set_text(&score_text(list));
                }
                log::info!("Configuration reloaded");
                true
            }
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                false
            }
        }
    }

    /// Drives the released disc to its final pose, one frame per timeout.
    fn start_settle(&self) {
        if !self.orbit.borrow().is_dragging() {
            return;
        }

        let orbit = self.orbit.clone();
        let area = self.drawing_area.clone();
        let mut last = Instant::now();
        self.settle_timer
            .start(Duration::from_millis(SETTLE_FRAME_MS), move || {
                let now = Instant::now();
                let settled = orbit.borrow_mut().tick(now - last);
                last = now;
                area.queue_draw();
                settled
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(&[60.0, 0.5, 1.234]), "60, 0.5, 1.23");
        assert_eq!(score_text(&[]), "");
    }
}
