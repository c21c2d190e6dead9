use std::fs;

fn main() {
    // Askama templates are read at compile time; without explicit cargo hints
    // a template edit does not trigger a rebuild.
    let Ok(entries) = fs::read_dir("templates") else {
        return;
    };
    for entry in entries.flatten() {
        let p = entry.path();
        if p.extension().and_then(|s| s.to_str()) == Some("html") {
            println!("cargo:rerun-if-changed={}", p.display());
        }
    }
}
