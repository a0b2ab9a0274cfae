//! Basic reports page example.
//!
//! Run with: `cargo run --example basic_page`

use reports_page::types::{Catalog, ReportDescriptor, Theme};
use reports_page::{RenderContext, render_reports_page};

fn main() {
    let catalog = Catalog::new(vec![
        ReportDescriptor {
            label: "Startup".into(),
            href: "/reports/startup".into(),
            description: "Cold start and first paint timings".into(),
        },
        ReportDescriptor {
            label: "Keyed updates".into(),
            href: "/reports/keyed".into(),
            description: "Swap, remove and append on a 1k row table".into(),
        },
    ])
    .expect("example catalog is valid");

    let context = RenderContext::default()
        .with_version("v6")
        .with_theme(Theme::System);

    let html = render_reports_page(&catalog, &context);

    let output_path = "reports.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
