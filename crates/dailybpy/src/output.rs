use colored::Colorize;

pub fn header(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(50));
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    println!("{} {}", "!".yellow(), msg);
}
