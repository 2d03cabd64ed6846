//! Pure presentation: snapshot in, HTML out.
//!
//! Rendering never performs I/O and never fails; every function maps a
//! plain value to a complete page. The page embeds a
//! `<meta http-equiv="refresh">` directive so the browser re-pulls the
//! latest rendered page once per refresh interval.

mod chart;
mod fmt;

pub use chart::candlestick_svg;
pub use fmt::{currency, thousands};

use tickglow_core::{QuoteSnapshot, UtcDateTime};

use crate::config::REFRESH_INTERVAL_SECS;

/// Fixed timezone label shown next to the clock line.
const CLOCK_TZ_LABEL: &str = "UTC";

/// Render the full dashboard page for one snapshot.
///
/// Section order is fixed: header, price card, metric boxes, candlestick
/// chart, clock line, refresh note.
pub fn render_dashboard(snapshot: &QuoteSnapshot, rendered_at: UtcDateTime) -> String {
    let trend = snapshot.trend();
    let name = escape(&snapshot.name);

    let body = format!(
        r#"<h1 class="main-header">{name} Stock Live Dashboard</h1>
<div class="glow-card">
    <div class="card-title">{name} <b>{symbol}</b></div>
    <div class="price-value">${price}</div>
    <span class="{diff_class}">{sign}${change} ({sign}{pct:.2}%)</span>
</div>
<div class="info-bar">
    <div class="info-box">
        <span class="metric-label">High</span><br>
        <span class="metric-value">${high}</span>
    </div>
    <div class="info-box">
        <span class="metric-label">Low</span><br>
        <span class="metric-value">${low}</span>
    </div>
    <div class="info-box">
        <span class="metric-label">Volume</span><br>
        <span class="metric-value">{volume}</span>
    </div>
</div>
<div class="chart">{chart}</div>
<div class="clock">Last refreshed {clock} {CLOCK_TZ_LABEL}</div>
<div class="refresh-note">Market data auto-refreshes every {REFRESH_INTERVAL_SECS} sec.</div>"#,
        symbol = snapshot.symbol,
        price = currency(snapshot.price),
        diff_class = trend.css_class(),
        sign = trend.sign(),
        change = currency(snapshot.change.abs()),
        pct = snapshot.change_pct.abs(),
        high = currency(snapshot.high),
        low = currency(snapshot.low),
        volume = thousands(snapshot.volume),
        chart = candlestick_svg(&snapshot.series),
        clock = rendered_at.format_clock(),
    );

    page(&format!("{name} Live Stock"), &body)
}

/// Render the single-notice page used when intraday data is absent.
///
/// Nothing else is shown: no chart, no metrics. The next refresh cycle
/// retries from a clean state.
pub fn render_notice(message: &str) -> String {
    let body = format!(
        r#"<div class="error-banner">{}</div>"#,
        escape(message)
    );
    page("Live Stock", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="{REFRESH_INTERVAL_SECS}">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="bg-anim"></div>
{body}
</body>
</html>
"#
    )
}

/// Minimal HTML escaping for provider-supplied text.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Montserrat:wght@700;900&display=swap');
body {
  background: linear-gradient(135deg, #283E51, #485563);
  font-family: 'Montserrat', sans-serif;
  color: #fffde4;
  text-align: center;
}
.bg-anim {
  position: fixed;
  top: 0; left: 0; width: 100vw; height: 100vh; z-index: -2;
  background: radial-gradient(ellipse at center, #444d60 0%, #232526 80%);
  opacity: 0.8;
  animation: bgpulse 7s ease-in-out infinite alternate;
}
@keyframes bgpulse {
  0% { filter: blur(0px); }
  100% { filter: blur(6px); }
}
.main-header { text-shadow: 0 2.5px 22px #fbb034aa; }
.glow-card {
  background: rgba(30,38,70, .95);
  box-shadow: 0 0 32px 5px #fbb03490;
  border-radius: 22px;
  padding: 2em 3em;
  margin: 0 auto 2em auto;
  max-width: 510px;
}
.card-title { font-size: 1.4em; letter-spacing: 1.5px; color: #fff; }
.card-title b { color: #fbb034; }
.price-value {
  font-size: 4.4rem;
  color: #fbb034;
  font-weight: 800;
  letter-spacing: 3px;
  margin-bottom: 0.3em;
  filter: drop-shadow(0 0 10px #fbb03499);
}
.info-bar { display: flex; justify-content: center; gap: 2em; margin-top: 35px; }
.info-box {
  background: rgba(255,255,255,0.09);
  border-radius: 15px;
  padding: 1em 2em;
  min-width: 134px;
  box-shadow: 0 2px 10px #fbb03430;
}
.metric-label {
  text-transform: uppercase;
  font-size: 0.96em;
  color: #fbb034;
  letter-spacing: 1.2px;
}
.metric-value { font-size: 1.58em; font-weight: 700; }
.price-diff-up { color: #38ef7d; font-weight: bold; }
.price-diff-down { color: #ff3232; font-weight: bold; }
.chart { max-width: 960px; margin: 2em auto 0 auto; border-radius: 20px; overflow: hidden; }
.clock { color: #fbb034; font-size: 1.2em; letter-spacing: 2px; margin-top: 2em; }
.refresh-note { color: #9fb4c7; margin-top: 1em; }
.error-banner {
  background: rgba(255,50,50,0.15);
  border: 1px solid #ff3232;
  border-radius: 12px;
  max-width: 510px;
  margin: 4em auto;
  padding: 1.5em;
}
@media (max-width: 600px) {
  .glow-card { padding: 18px; }
  .info-bar { flex-direction: column; gap: 1em; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tickglow_core::{IntradayQuote, Symbol};
    use tickglow_core::{Bar, BarSeries, Interval};

    fn snapshot(previous_close: f64, closes: &[f64]) -> QuoteSnapshot {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let ts = UtcDateTime::parse(&format!("2024-01-02T14:{i:02}:00Z")).expect("ts");
                Bar::new(ts, close, close + 1.0, close - 1.0, close, Some(1_234_567)).expect("bar")
            })
            .collect();
        QuoteSnapshot::derive(IntradayQuote {
            name: Some(String::from("Amazon.com, Inc.")),
            previous_close: Some(previous_close),
            series: BarSeries::new(
                Symbol::parse("AMZN").expect("symbol"),
                Interval::OneMinute,
                bars,
            ),
        })
        .expect("snapshot")
    }

    fn rendered_at() -> UtcDateTime {
        UtcDateTime::parse("2024-01-02T15:04:05Z").expect("ts")
    }

    #[test]
    fn dashboard_sections_appear_in_fixed_order() {
        let html = render_dashboard(&snapshot(100.0, &[101.0, 105.0]), rendered_at());

        let header = html.find("main-header").expect("header");
        let card = html.find("glow-card").expect("price card");
        let metrics = html.find("info-bar").expect("metric boxes");
        let chart = html.find("<svg").expect("chart");
        let clock = html.find("Last refreshed").expect("clock");
        let note = html.find("auto-refreshes every 60 sec").expect("note");

        assert!(header < card && card < metrics && metrics < chart);
        assert!(chart < clock && clock < note);
    }

    #[test]
    fn positive_change_renders_up_class_and_signs() {
        let html = render_dashboard(&snapshot(100.0, &[101.0, 105.0]), rendered_at());

        assert!(html.contains("price-diff-up"));
        assert!(html.contains("+$5.00 (+5.00%)"));
        assert!(html.contains("$105.00"));
    }

    #[test]
    fn negative_change_renders_down_class_with_abs_figures() {
        let html = render_dashboard(&snapshot(100.0, &[90.0]), rendered_at());

        assert!(html.contains("price-diff-down"));
        assert!(html.contains("-$10.00 (-10.00%)"));
    }

    #[test]
    fn metrics_use_thousands_separators() {
        let html = render_dashboard(&snapshot(100.0, &[101.0]), rendered_at());
        assert!(html.contains("1,234,567"), "volume grouping: {html}");
    }

    #[test]
    fn clock_line_is_zero_padded_with_tz_label() {
        let html = render_dashboard(&snapshot(100.0, &[101.0]), rendered_at());
        assert!(html.contains("Last refreshed 15:04:05 UTC"));
    }

    #[test]
    fn pages_carry_refresh_directive() {
        let html = render_dashboard(&snapshot(100.0, &[101.0]), rendered_at());
        assert!(html.contains(r#"<meta http-equiv="refresh" content="60">"#));

        let notice = render_notice("no data");
        assert!(notice.contains(r#"<meta http-equiv="refresh" content="60">"#));
    }

    #[test]
    fn notice_page_has_no_dashboard_content() {
        let html = render_notice("Failed to fetch AMZN data (market closed or no data).");

        assert!(html.contains("error-banner"));
        assert!(html.contains("Failed to fetch AMZN data"));
        assert!(!html.contains("glow-card"));
        assert!(!html.contains("info-bar"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn provider_text_is_escaped() {
        let html = render_notice("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
