//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     tiktok-fetch                                      ║
║     Profile link harvester and media downloader       ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(profile_url: &str, config: &Config) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Profile:   {}", profile_url);
    println!("  Directory: {}", config.download.directory.display());
    println!("  Workers:   {}", config.download.workers);
    println!("  Links:     {}", config.harvest.links_file.display());
    if !config.download.skip_existing {
        println!("  Existing files will be overwritten");
    }
    println!();
}
