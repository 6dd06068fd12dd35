pub mod banner;
pub mod cards;
pub mod tui;

/// Prints the welcome banner. Call once at startup (after tracing init).
pub fn init_ui(model: &str) {
    banner::print_welcome(model);
}
