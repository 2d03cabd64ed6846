//! Server-side candlestick chart rendered as inline SVG.
//!
//! One candle per bar: a vertical wick spanning low..high and a body
//! rect spanning open..close, colored by whether the bar closed at or
//! above its open. The y-scale is linear over the session's full
//! [min low, max high] range.

use tickglow_core::BarSeries;

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 410.0;
const MARGIN_LEFT: f64 = 6.0;
const MARGIN_RIGHT: f64 = 6.0;
const MARGIN_TOP: f64 = 25.0;
const MARGIN_BOTTOM: f64 = 6.0;

const COLOR_UP: &str = "#38ef7d";
const COLOR_DOWN: &str = "#ff3232";
const COLOR_AXIS: &str = "#fbb034";
const COLOR_TITLE: &str = "#fffde4";

/// Render the intraday series as a candlestick SVG.
///
/// The caller guarantees a non-empty series; a defensively-passed empty
/// one still yields a valid (blank) chart.
pub fn candlestick_svg(series: &BarSeries) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let mut svg = String::with_capacity(series.bars.len() * 160 + 512);
    svg.push_str(&format!(
        r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" xmlns="http://www.w3.org/2000/svg" role="img">"#
    ));
    svg.push_str(&format!(
        r#"<text x="{x}" y="17" fill="{COLOR_TITLE}" font-size="15" text-anchor="middle">{title} Intraday Price</text>"#,
        x = WIDTH / 2.0,
        title = series.symbol,
    ));
    svg.push_str(&format!(
        r#"<line x1="{MARGIN_LEFT}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="{COLOR_AXIS}" stroke-width="2"/>"#,
        bottom = HEIGHT - MARGIN_BOTTOM,
        right = WIDTH - MARGIN_RIGHT,
    ));

    if let (Some(high), Some(low)) = (series.session_high(), series.session_low()) {
        // A flat session still needs a non-zero span to scale against.
        let span = if high > low { high - low } else { 1.0 };
        let y = |price: f64| MARGIN_TOP + (high - price) / span * plot_h;

        let count = series.bars.len() as f64;
        let slot = plot_w / count;
        let body_w = (slot * 0.7).max(1.0);

        for (i, bar) in series.bars.iter().enumerate() {
            let center = MARGIN_LEFT + slot * (i as f64 + 0.5);
            let color = if bar.close >= bar.open {
                COLOR_UP
            } else {
                COLOR_DOWN
            };

            svg.push_str(&format!(
                r#"<line x1="{center:.2}" y1="{y1:.2}" x2="{center:.2}" y2="{y2:.2}" stroke="{color}" stroke-width="1"/>"#,
                y1 = y(bar.high),
                y2 = y(bar.low),
            ));

            let body_top = y(bar.open.max(bar.close));
            let body_bottom = y(bar.open.min(bar.close));
            svg.push_str(&format!(
                r#"<rect x="{x:.2}" y="{body_top:.2}" width="{body_w:.2}" height="{h:.2}" fill="{color}"/>"#,
                x = center - body_w / 2.0,
                h = (body_bottom - body_top).max(1.0),
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}
