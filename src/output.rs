use owo_colors::OwoColorize;

/// Small wrapper around stdout printing to provide consistent user-facing
/// messages. Colors are enabled only when output is a TTY. Everything here
/// goes to stdout: progress and status lines are the program's primary
/// output, while diagnostics travel through `tracing` on stderr.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as "Copied: X -> Y" which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{}", msg.green());
    } else {
        println!("{}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        println!("{}", msg.red());
    } else {
        println!("{}", msg);
    }
}
