//! Print the spoken form of the times given on the command line.
//!
//! ```text
//! cargo run -p spoken-time-core --example convert -- 07:30 09:45 23:45
//! ```

use spoken_time_core::{FormatterRegistry, TimeValue};

fn main() {
    let registry = FormatterRegistry::new();
    let formatter = match registry.default_formatter() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if args.is_empty() {
        vec!["00:00".to_string(), "07:30".to_string(), "12:00".to_string(), "18:32".to_string()]
    } else {
        args
    };

    for input in inputs {
        match TimeValue::parse(&input).and_then(|t| t.speak(formatter.as_ref())) {
            Ok(result) => println!("{} -> {}", result.original, result.spoken),
            Err(e) => println!("{} -> error: {}", input, e),
        }
    }
}
