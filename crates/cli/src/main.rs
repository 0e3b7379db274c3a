//! Menshen CLI application entry point
//!
//! Minimal binary that parses arguments and delegates to the library.

use clap::Parser;

fn main() {
    // Configure miette's report handler once, before any error can surface
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = menshen::Cli::parse();

    // Render anyhow's context chain through miette
    if let Err(e) = menshen::run(cli) {
        let report = miette::Report::msg(format!("{e:#}"));
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
