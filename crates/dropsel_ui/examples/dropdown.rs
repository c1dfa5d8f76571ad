//! Dropdown Widget Example
//!
//! Drives a dropdown near the bottom of a page without a renderer and prints
//! what a host would draw after each interaction: the header text and the
//! floating panels on the overlay layer.
//!
//! Run with: cargo run -p dropsel_ui --example dropdown

use dropsel_ui::prelude::*;
use dropsel_ui::OverlayLayer;

fn print_frame(title: &str, fruit: &Dropdown<String>, overlay: &OverlayLayer) {
    println!("== {title}");
    println!("header: {} {}", fruit.header_label(), fruit.arrow());
    if overlay.is_empty() {
        println!("overlay: empty");
    }
    for surface in overlay.surfaces() {
        let b = surface.bounds;
        println!(
            "overlay: '{}' at ({}, {}) {}x{} rows {:?}",
            surface.owner, b.x, b.y, b.width, b.height, surface.rows
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let page = Document::new(Viewport::new(1024.0, 800.0));
    let options = ["Apple", "Banana", "Cherry"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut fruit = dropdown(&page, "fruit", options)
        .placeholder("Pick a fruit")
        .on_change(|value: String| value);

    // Header sits 76px above the bottom edge, so the list opens upward.
    let header = Bounds::new(40.0, 700.0, 160.0, 24.0);
    print_frame("initial", &fruit, page.overlay());

    fruit.on_event(
        &Event::MousePress { button: MouseButton::Left, position: Point::new(60.0, 710.0) },
        header,
    );
    print_frame("opened", &fruit, page.overlay());

    // Second row of an upward list placed at y=500.
    let picked = fruit.on_event(
        &Event::MousePress { button: MouseButton::Left, position: Point::new(60.0, 530.0) },
        header,
    );
    println!("change callback returned {picked:?}");
    print_frame("selected", &fruit, page.overlay());

    // Scroll so the header is near the top; the next open goes down.
    page.scroll_by(0.0, 500.0);
    let header = header.offset(0.0, -500.0);
    fruit.toggle(header);
    print_frame("reopened after scroll", &fruit, page.overlay());

    let closed = page.pointer_down(MouseButton::Left, Point::new(900.0, 600.0));
    println!("outside press reached {closed} listener(s)");
    print_frame("after outside press", &fruit, page.overlay());

    println!("listeners left: {}", page.listener_count());
}
