use autolevels_core::color::correct::{ChannelAnalysis, CurveSpec};
use autolevels_core::filters::histogram::Histogram;
use autolevels_core::pipeline::config::CorrectionConfig;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_correction_summary(config: &CorrectionConfig) {
    let s = Styles::new();
    print_title(&s, "Auto Levels");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(format!("{}%", config.threshold_percent))
    );
    if let Some(ref compare) = config.compare {
        println!(
            "  {:<14}{} {}",
            s.label.apply_to("Compare"),
            s.path.apply_to(compare.output.display()),
            s.label.apply_to(format!("@ {}%", compare.scale_percent))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Compare"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();
}

/// Per-channel table of occupied range, mean and chosen clip points.
pub fn print_channel_table(channels: &[ChannelAnalysis]) {
    let s = Styles::new();

    println!(
        "  {:<8}{:>8}{:>8}{:>10}{:>8}{:>8}",
        s.header.apply_to("Channel"),
        s.label.apply_to("Min"),
        s.label.apply_to("Max"),
        s.label.apply_to("Mean"),
        s.label.apply_to("Black"),
        s.label.apply_to("White"),
    );
    for analysis in channels {
        let (min, max) = occupied_range(&analysis.histogram).unwrap_or((0, 0));
        println!(
            "  {:<8}{:>8}{:>8}{:>10.1}{:>8}{:>8}",
            analysis.channel,
            min,
            max,
            mean(&analysis.histogram),
            s.value.apply_to(analysis.clip_points.black),
            s.value.apply_to(analysis.clip_points.white),
        );
    }
    println!();
}

pub fn print_curve_summary(spec: &CurveSpec, target: &str) {
    let s = Styles::new();
    print_title(&s, "Manual Curve");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Channels"),
        s.value.apply_to(target)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Black"),
        s.value.apply_to(spec.black)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("White"),
        s.value.apply_to(spec.white)
    );
    match spec.gray {
        Some(gray) => println!(
            "  {:<14}{}",
            s.label.apply_to("Gray"),
            s.value.apply_to(format!("{} -> {}", gray.input, gray.output))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Gray"),
            s.disabled.apply_to("linear")
        ),
    }
    println!();
}

fn occupied_range(histogram: &Histogram) -> Option<(usize, usize)> {
    let counts = histogram.counts();
    let min = counts.iter().position(|&c| c > 0)?;
    let max = counts.iter().rposition(|&c| c > 0)?;
    Some((min, max))
}

fn mean(histogram: &Histogram) -> f64 {
    let total = histogram.total();
    if total == 0 {
        return 0.0;
    }
    let sum: u64 = histogram
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &c)| i as u64 * c)
        .sum();
    sum as f64 / total as f64
}
