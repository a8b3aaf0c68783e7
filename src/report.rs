//! Operator-facing progress output.
//!
//! Progress goes to stdout, styled so it stands apart from the output of
//! the commands being run. Failures are logged through `tracing` instead.

use console::style;

pub fn banner() {
    println!("{}", style("proxyctl — nginx host console").bold().blue());
    println!(
        "{}",
        style("Pick an action. Commands run with your terminal attached.").dim()
    );
}

/// A handler is starting a step.
pub fn step(message: &str) {
    println!("{}", style(message).cyan());
}

/// A handler completed cleanly.
pub fn done(message: &str) {
    println!("{}", style(message).green());
}

/// Something the operator should know that isn't a failure.
pub fn notice(message: &str) {
    println!("{}", style(message).yellow());
}

/// A handler completed; `clean` says whether every command it ran succeeded.
pub fn finished(clean: bool, message: &str) {
    if clean {
        done(message);
    } else {
        notice(&format!("{message} (some commands failed, see above)"));
    }
}

/// An answer was rejected and will be asked again.
pub fn rejected(reason: &str) {
    println!("{} {reason}", style("✗").red().bold());
}
