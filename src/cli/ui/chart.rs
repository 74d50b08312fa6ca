use colored::{Color, Colorize};
use tracing::debug;

use crate::chart::{ChartBackend, ChartConfig, ChartHandle};
use crate::cli::ui::style::UiStyle;
use crate::errors::Result;

const MAX_RING_WIDTH: usize = 48;
const MIN_RING_WIDTH: usize = 10;
const SEGMENT_GLYPHS: [char; 2] = ['█', '▓'];

/// Draws the doughnut as a proportional ring strip with a legend.
#[derive(Debug, Default)]
pub struct TerminalChart {
    next: u64,
    live: Option<ChartHandle>,
}

impl TerminalChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells assigned to each segment; always sums to `width` when data exists.
    pub fn segment_widths(config: &ChartConfig, width: usize) -> [usize; 2] {
        let total = config.total();
        if total <= 0.0 {
            return [0, 0];
        }
        let first = ((config.values[0] / total) * width as f64).round() as usize;
        let first = first.min(width);
        [first, width - first]
    }

    pub fn lines(config: &ChartConfig, width: usize, style: &UiStyle) -> Vec<String> {
        let total = config.total();
        if total <= 0.0 {
            return vec!["Chart: no income or expense to show.".to_string()];
        }
        let widths = Self::segment_widths(config, width);
        let mut ring = String::new();
        let mut legend = Vec::new();
        for idx in 0..2 {
            let color = parse_hex(&config.colors[idx]);
            let glyph = if style.plain_mode { ['#', '='][idx] } else { SEGMENT_GLYPHS[idx] };
            let segment = glyph.to_string().repeat(widths[idx]);
            ring.push_str(&paint(&segment, color, style));
            let share = config.values[idx] / total * 100.0;
            legend.push(format!(
                "{} {} {:.1}%",
                paint(&glyph.to_string(), color, style),
                config.labels[idx],
                share
            ));
        }
        vec![format!("({})", ring), legend.join("  ")]
    }
}

impl ChartBackend for TerminalChart {
    fn render(&mut self, config: &ChartConfig) -> Result<ChartHandle> {
        self.next += 1;
        let handle = ChartHandle(self.next);
        let style = UiStyle::detect();
        for line in Self::lines(config, ring_width(), &style) {
            println!("{}", line);
        }
        self.live = Some(handle);
        Ok(handle)
    }

    fn dispose(&mut self, handle: ChartHandle) {
        if self.live == Some(handle) {
            self.live = None;
        }
        debug!(handle = handle.0, "terminal chart disposed");
    }
}

fn ring_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| (cols as usize).saturating_sub(4))
        .unwrap_or(MAX_RING_WIDTH)
        .clamp(MIN_RING_WIDTH, MAX_RING_WIDTH)
}

fn paint(text: &str, color: Option<Color>, style: &UiStyle) -> String {
    match (style.use_color, color) {
        (true, Some(color)) => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

/// `#rrggbb` to a truecolor value.
fn parse_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::TrueColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
