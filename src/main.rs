/// dropsel entry point: `dropsel [scenario.json]`
///
/// Without an argument the built-in demo scenario is replayed.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dropsel::{run, Scenario};

    let scenario = match std::env::args().nth(1) {
        Some(path) => match Scenario::load(&path) {
            Ok(scenario) => scenario,
            Err(e) => {
                init_logging(dropsel::LogLevel::default());
                log::error!("Failed to load scenario {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Scenario::demo(),
    };

    init_logging(scenario.log_level);
    let transcript = run(&scenario);
    println!("{transcript}");
}

/// `RUST_LOG` overrides the scenario's level.
#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: dropsel::LogLevel) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_filter()))
        .init();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
