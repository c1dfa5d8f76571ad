//! Headless replay of a scenario against a live dropdown.
//!
//! Each click is handled the way a browser-like host would: the widget sees
//! the press first (header toggle, option selection), then the document
//! dispatches it to page-level listeners (outside-press detection).

use std::fmt;

use dropsel_ui::{Direction, Document, Dropdown, Event, Point, Widget};

use crate::config::{Scenario, Step};

/// Why the list closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The header was pressed while open
    Toggle,
    /// A press landed outside the header and the panel
    Outside,
}

/// Something observable that happened during a replay.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Opened {
        step: usize,
        direction: Direction,
        /// List top-left in page coordinates
        position: Point,
        width: f32,
    },
    Closed {
        step: usize,
        reason: CloseReason,
    },
    /// An option row was picked; `value` is what the change callback received
    Selected { step: usize, value: String },
    Scrolled { step: usize, scroll: Point },
    Resized { step: usize, width: f32, height: f32 },
    OptionsReplaced { step: usize, count: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Opened { step, direction, position, width } => {
                let dir = match direction {
                    Direction::Down => "down",
                    Direction::Up => "up",
                };
                write!(
                    f,
                    "[{step}] opened {dir} at ({}, {}) width {width}",
                    position.x, position.y
                )
            }
            Outcome::Closed { step, reason } => {
                let why = match reason {
                    CloseReason::Toggle => "header",
                    CloseReason::Outside => "outside press",
                };
                write!(f, "[{step}] closed ({why})")
            }
            Outcome::Selected { step, value } => write!(f, "[{step}] selected '{value}'"),
            Outcome::Scrolled { step, scroll } => {
                write!(f, "[{step}] scrolled to ({}, {})", scroll.x, scroll.y)
            }
            Outcome::Resized { step, width, height } => {
                write!(f, "[{step}] viewport {width}x{height}")
            }
            Outcome::OptionsReplaced { step, count } => {
                write!(f, "[{step}] options replaced ({count})")
            }
        }
    }
}

/// Result of replaying a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub outcomes: Vec<Outcome>,
    /// Selected value after the last step, empty when nothing is selected
    pub selected: String,
    /// Header text after the last step
    pub label: String,
    pub open: bool,
    /// Number of times the change callback ran
    pub callback_calls: usize,
    /// Page listeners still registered after the dropdown was dropped
    pub leaked_listeners: usize,
}

impl Transcript {
    pub fn selections(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Selected { value, .. } => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        write!(
            f,
            "final: label '{}', {}",
            self.label,
            if self.open { "open" } else { "closed" }
        )
    }
}

/// Replay a scenario and collect what happened.
pub fn run(scenario: &Scenario) -> Transcript {
    let document = Document::new(scenario.viewport);
    let mut dropdown: Dropdown<String> =
        Dropdown::new(&document, scenario.dropdown.clone()).on_change(|value| value);

    let mut outcomes = Vec::new();
    let mut callback_calls = 0;

    for (step, action) in scenario.steps.iter().enumerate() {
        match action {
            Step::Click { x, y, button } => {
                let position = Point::new(*x, *y);
                let header = header_in_client(scenario, &document);
                let was_open = dropdown.is_open();

                let event = Event::MousePress { button: *button, position };
                if let Some(value) = dropdown.on_event(&event, header) {
                    callback_calls += 1;
                    outcomes.push(Outcome::Selected { step, value });
                } else if !was_open && dropdown.is_open() {
                    if let Some(placement) = dropdown.placement() {
                        outcomes.push(Outcome::Opened {
                            step,
                            direction: placement.direction,
                            position: placement.position,
                            width: placement.width,
                        });
                    }
                } else if was_open && !dropdown.is_open() {
                    outcomes.push(Outcome::Closed { step, reason: CloseReason::Toggle });
                }

                let open_before_dispatch = dropdown.is_open();
                document.pointer_down(*button, position);
                if open_before_dispatch && !dropdown.is_open() {
                    outcomes.push(Outcome::Closed { step, reason: CloseReason::Outside });
                }
            }
            Step::Scroll { dx, dy } => {
                document.scroll_by(*dx, *dy);
                let vp = document.viewport();
                outcomes.push(Outcome::Scrolled {
                    step,
                    scroll: Point::new(vp.scroll_x, vp.scroll_y),
                });
            }
            Step::Resize { width, height } => {
                document.resize(*width, *height);
                outcomes.push(Outcome::Resized { step, width: *width, height: *height });
            }
            Step::SetOptions { options } => {
                dropdown.set_options(options.clone());
                outcomes.push(Outcome::OptionsReplaced { step, count: options.len() });
            }
        }
    }

    let selected = dropdown.selected();
    let label = dropdown.header_label();
    let open = dropdown.is_open();
    drop(dropdown);
    let leaked_listeners = document.listener_count();
    if leaked_listeners > 0 {
        log::warn!("{leaked_listeners} page listener(s) left after teardown");
    }

    log::info!(
        "Replayed {} step(s) for '{}': {} selection(s), final label '{}'",
        scenario.steps.len(),
        scenario.dropdown.name,
        callback_calls,
        label
    );

    Transcript {
        outcomes,
        selected,
        label,
        open,
        callback_calls,
        leaked_listeners,
    }
}

/// Header rectangle as the host would report it right now.
fn header_in_client(scenario: &Scenario, document: &Document) -> dropsel_ui::Bounds {
    let vp = document.viewport();
    scenario.header.offset(-vp.scroll_x, -vp.scroll_y)
}
