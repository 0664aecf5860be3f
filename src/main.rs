//! devfest-schedule main entrypoint.

use devfest_schedule::run;
use devfest_schedule::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
