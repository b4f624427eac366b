use lithoage::NormalizeReport;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(report: &NormalizeReport, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Normalizing: \"{}\"", report.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Rewrite stages ━━━", ansi::GRAY));
    for pass in &report.stages {
        let marker = if pass.changed { palette.paint("✓", ansi::GREEN) } else { palette.dim("·") };
        let outcome = if pass.changed { format!("\"{}\"", pass.output) } else { palette.dim("unchanged") };
        println!("  {} {}  {}", marker, palette.paint(&pass.stage, ansi::BLUE), outcome);
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match report.value {
        Some(value) => {
            println!(
                "  {}  {}",
                palette.bold(palette.paint(value.to_string(), ansi::GREEN)),
                palette.dim(format!("(extracted from \"{}\")", report.final_text))
            );
        }
        None => println!("  {}", palette.dim("no numeric value recovered")),
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", report.elapsed), ansi::GREEN));
    println!();
}
