use super::{escape_html, DATE_FORMAT};
use crate::domain::entities::record::AnalysisRecord;
use crate::domain::values::market_category::MarketCategory;
use chrono::{DateTime, Utc};

const STYLE: &str = r#"
:root[data-theme="dark"] {
  --bg: #0b0e11; --card: #181a20; --text: #b7bdc6; --text-bold: #ffffff;
  --text-muted: #848e9c; --border: #2b3139; --accent: #2962ff;
  --accent-bg: rgba(41, 98, 255, 0.1);
}
:root[data-theme="light"] {
  --bg: #f0f2f5; --card: #ffffff; --text: #4a5568; --text-bold: #1a202c;
  --text-muted: #718096; --border: #e2e8f0; --accent: #2962ff;
  --accent-bg: rgba(41, 98, 255, 0.05);
}
body { background: var(--bg); color: var(--text); margin: 0;
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; }
header { background: var(--card); border-bottom: 1px solid var(--border);
  padding: 15px 40px; display: flex; justify-content: space-between;
  align-items: center; position: sticky; top: 0; z-index: 100; }
.brand { font-weight: 800; color: var(--text-bold); font-size: 20px; letter-spacing: 1px; }
.stamp { font-size: 13px; font-weight: 600; color: var(--text-muted);
  text-transform: uppercase; letter-spacing: 1px; }
.theme-toggle { cursor: pointer; user-select: none; font-size: 14px;
  color: var(--text-bold); border: 1px solid var(--border); border-radius: 12px;
  padding: 5px 14px; background: none; }
.filters { display: flex; gap: 10px; padding: 25px 40px 0 40px; max-width: 1600px; margin: auto; }
.filter-btn { border: 1px solid var(--border); background: var(--card); color: var(--text);
  border-radius: 16px; padding: 6px 16px; font-size: 13px; cursor: pointer; }
.filter-btn.active { background: var(--accent); color: #ffffff; border-color: var(--accent); }
.container { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
  gap: 25px; padding: 25px 40px 40px 40px; max-width: 1600px; margin: auto; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 12px;
  padding: 30px; transition: transform 0.2s, border-color 0.2s; }
.card:hover { border-color: var(--accent); transform: translateY(-3px); }
.card-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
.market-tag { font-size: 12px; color: var(--text-muted); font-weight: 700;
  text-transform: uppercase; letter-spacing: 1px; }
.badge { padding: 4px 10px; border-radius: 6px; font-size: 11px; font-weight: 800;
  color: white; text-transform: uppercase; letter-spacing: 0.5px; }
.title { color: var(--text-bold); font-size: 18px; text-decoration: none; font-weight: 700;
  display: block; margin-bottom: 25px; line-height: 1.4; }
.title:hover { color: var(--accent); }
.section-title { font-size: 11px; color: var(--text-muted); text-transform: uppercase;
  letter-spacing: 1.5px; font-weight: 800; margin: 25px 0 10px 0;
  border-bottom: 1px solid var(--border); padding-bottom: 6px; }
.text-content { font-size: 14px; line-height: 1.7; color: var(--text); margin-top: 0; }
.pros-cons-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; margin-top: 15px; }
.box { padding: 15px; border-radius: 8px; font-size: 13.5px; line-height: 1.6; color: var(--text); }
.box strong { display: block; margin-bottom: 8px; font-size: 12px; letter-spacing: 0.5px; }
.pro { background: rgba(38, 166, 154, 0.05); border-left: 3px solid #26a69a; }
.pro strong { color: #26a69a; }
.con { background: rgba(239, 83, 80, 0.05); border-left: 3px solid #ef5350; }
.con strong { color: #ef5350; }
.action-box { margin-top: 25px; padding: 18px; background: var(--accent-bg);
  border-left: 4px solid var(--accent); border-radius: 0 8px 8px 0;
  font-size: 14.5px; font-weight: 500; color: var(--text-bold); line-height: 1.6; }
"#;

const SCRIPT: &str = r#"
function toggleTheme() {
  const html = document.documentElement;
  const next = html.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';
  html.setAttribute('data-theme', next);
  localStorage.setItem('pref-theme', next);
}
if ((localStorage.getItem('pref-theme') || 'dark') === 'light') toggleTheme();
function filterCards(bucket, btn) {
  document.querySelectorAll('.filter-btn').forEach(b => b.classList.remove('active'));
  btn.classList.add('active');
  document.querySelectorAll('.card').forEach(c => {
    c.style.display = (bucket === 'all' || c.dataset.category === bucket) ? '' : 'none';
  });
}
"#;

/// Render the full dashboard document. Pure: the same records and timestamp
/// produce byte-identical output.
pub fn render_dashboard(records: &[AnalysisRecord], generated_at: DateTime<Utc>) -> String {
    let date_str = generated_at.format(DATE_FORMAT).to_string();

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"dark\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Market Briefing Terminal</title>\n");
    html.push_str("<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!(
        "<header>\
         <div class=\"brand\"><span style=\"color: var(--accent);\">&#x2B21;</span> MARKET BRIEFING</div>\
         <div style=\"display:flex; align-items:center; gap:30px;\">\
         <span class=\"stamp\">Updated: {date_str}</span>\
         <button class=\"theme-toggle\" onclick=\"toggleTheme()\">Toggle theme</button>\
         </div></header>\n"
    ));

    html.push_str(&render_filters(records));
    html.push_str("<div class=\"container\">\n");
    for record in records {
        html.push_str(&render_card(record));
    }
    html.push_str("</div>\n<script>");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

/// Filter row: "All" plus one button per category present in the run, in the
/// fixed category order.
fn render_filters(records: &[AnalysisRecord]) -> String {
    let mut html = String::from(
        "<div class=\"filters\">\
         <button class=\"filter-btn active\" onclick=\"filterCards('all', this)\">All</button>",
    );
    for cat in MarketCategory::all() {
        if records.iter().any(|r| r.category == *cat) {
            html.push_str(&format!(
                "<button class=\"filter-btn\" onclick=\"filterCards('{cat}', this)\">{label}</button>",
                label = cat.label(),
            ));
        }
    }
    html.push_str("</div>\n");
    html
}

fn render_card(record: &AnalysisRecord) -> String {
    let a = &record.analysis;
    format!(
        "<div class=\"card\" data-category=\"{category}\">\
         <div class=\"card-header\">\
         <span class=\"market-tag\">{instrument}</span>\
         <span class=\"badge\" style=\"background:{badge_color};\">{sentiment}</span>\
         </div>\
         <a href=\"{link}\" class=\"title\" target=\"_blank\">{title}</a>\
         <div class=\"section-title\">Macro context</div>\
         <p class=\"text-content\">{explanation}</p>\
         <div class=\"section-title\">Market arguments</div>\
         <div class=\"pros-cons-grid\">\
         <div class=\"box pro\"><strong>BULLISH FACTORS</strong>{strengths}</div>\
         <div class=\"box con\"><strong>BEARISH RISKS</strong>{weaknesses}</div>\
         </div>\
         <div class=\"action-box\">&#x1F3AF; {guidance}</div>\
         </div>\n",
        category = record.category,
        instrument = escape_html(&record.instrument),
        badge_color = a.sentiment.color(),
        sentiment = a.sentiment,
        link = escape_html(&record.article.link),
        title = escape_html(&record.article.title),
        explanation = escape_html(&a.web_explanation),
        strengths = escape_html(&a.strengths),
        weaknesses = escape_html(&a.weaknesses),
        guidance = escape_html(&a.guidance),
    )
}
