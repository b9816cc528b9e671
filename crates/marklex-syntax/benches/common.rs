// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markup_content(size: usize) -> String {
    let base = "# Title with _emphasis_\n\n- __strong__ item\n- plain snake_case item\n\nParagraph with **bold**, ~~strike~~ and \\_escaped\\_ text.\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unbalanced_line(markers: usize) -> String {
    // Openers with no closers keep the pending stack at full depth
    let mut line = String::new();
    for i in 0..markers {
        line.push_str(if i % 2 == 0 { "_a " } else { "__b " });
    }
    line.push('\n');
    line
}

#[allow(dead_code)]
pub fn generate_crossing_line(markers: usize) -> String {
    // Every closer finds its opener buried under all the `*` openers
    let mut line = String::from("_x ");
    line.push_str(&"*y ".repeat(markers));
    line.push_str(&"z_ ".repeat(markers));
    line.push('\n');
    line
}
