//! Render a draw command to SVG on stdout.
//!
//!     cargo run --example render --features tracing -- "draw an oval with width 160 and height 90"
//!
//! Set `RUST_LOG=shaper=debug` to see the computed translation. A shape error
//! still prints the SVG with the message painted on it.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let input = if input.trim().is_empty() {
        "Draw a square with side length 100".to_string()
    } else {
        input
    };

    tracing::debug!(%input, "rendering");
    match shaper::shaper(&input) {
        Ok(svg) => println!("{svg}"),
        Err(e) => {
            // The error is still drawn; emit that SVG too.
            if let Some(failure) = e.downcast_ref::<shaper::DrawFailure>() {
                println!("{}", failure.svg);
            }
            eprintln!("{e:?}");
        }
    }
}
