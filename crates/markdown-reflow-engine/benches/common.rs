// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_paragraph(sentences: usize) -> String {
    let base = "Call `wrap(text, width)` on each paragraph, see [the guide](https://example.com/guide) and [notes][ref] for details.<br> ";
    base.repeat(sentences)
}

#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str(&generate_paragraph(4));
        content.push_str("\n\n- Bullet point\n  - Nested item\n\n```rust\nfn example() {}\n```\n\n");
    }
    content
}
