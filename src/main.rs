use colored::Colorize;
use pattern_gallery::gallery;

/// Entry point: runs all five pattern sections in order and prints each
/// section's narration under a colored header. Takes no arguments, reads no
/// input, always exits 0.
fn main() {
    for (index, (title, run)) in gallery::SECTIONS.iter().enumerate() {
        let header = gallery::section_header(index + 1, title);
        println!("\n{}", header.cyan().bold());
        print!("{}", run());
    }
}
