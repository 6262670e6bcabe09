//! # Voxel Interaction Entry Point
//!
//! Runs the headless demo session, or a windowed session with `--windowed`.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! RUST_LOG=info cargo run --release -- --windowed
//! ```

fn main() {
    let windowed = std::env::args().any(|arg| arg == "--windowed");
    let result = if windowed {
        voxel_interaction::run_windowed()
    } else {
        voxel_interaction::run()
    };

    if let Err(err) = result {
        log::error!("{:#}", err);
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
