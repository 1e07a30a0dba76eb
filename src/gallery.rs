//! Runs the five pattern sections in a fixed order with a numbered header
//! before each one. Sections share no state; each is independently callable
//! through its own module's `demo()`.

use crate::{builder, facade, factory, injection, iterator};

/// Section titles and their demo entry points, in presentation order.
pub const SECTIONS: [(&str, fn() -> String); 5] = [
    ("Builder Design Pattern", builder::demo),
    ("Factory Method Design Pattern", factory::demo),
    ("Facade Design Pattern", facade::demo),
    ("Iterator Design Pattern", iterator::demo),
    ("Constructor DI", injection::demo),
];

/// Formats the header printed before section `number` (1-based).
pub fn section_header(number: usize, title: &str) -> String {
    format!("******* Section {number}: {title} ******")
}

/// The full gallery output: every section once, in order.
pub fn transcript() -> String {
    let mut out = String::new();
    for (index, (title, run)) in SECTIONS.iter().enumerate() {
        out.push('\n');
        out.push_str(&section_header(index + 1, title));
        out.push('\n');
        out.push_str(&run());
    }
    out
}
