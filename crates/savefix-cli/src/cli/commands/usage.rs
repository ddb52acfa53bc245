//! Tool header (printed on every run) and the usage banner.

const RULE: &str = "==================================================";

pub fn header_text() -> String {
    format!("\n\n{RULE}\nWii Save FNV-1a Checksum Tool")
}

pub fn usage_text() -> String {
    format!("{}\n{RULE}\n\nUsage: savefix <savefile.bin>\n", header_text())
}

pub fn print_usage() {
    println!("{}", usage_text());
}
