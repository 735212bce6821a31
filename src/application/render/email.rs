use super::{escape_html, DATE_FORMAT};
use crate::domain::entities::record::AnalysisRecord;
use chrono::{DateTime, Utc};

/// Render the condensed email digest: one block per record plus a link back
/// to the dashboard's publish location.
pub fn render_email(
    records: &[AnalysisRecord],
    generated_at: DateTime<Utc>,
    dashboard_url: &str,
) -> String {
    let date_str = generated_at.format(DATE_FORMAT).to_string();

    let mut html = format!(
        "<body style=\"font-family: 'Segoe UI', Arial, sans-serif; background-color: #f4f6f9; \
         color: #333; padding: 20px;\">\n\
         <div style=\"max-width: 650px; margin: auto; background: #ffffff; \
         border: 1px solid #e2e8f0; border-radius: 8px; overflow:hidden;\">\n\
         <div style=\"padding: 20px; background-color: #1a202c; border-bottom: 4px solid #2962ff; \
         text-align: center;\">\n\
         <h2 style=\"margin:0; color: #ffffff; letter-spacing: 1px; font-size: 20px;\">\
         &#x1F4CA; MARKET BRIEFING</h2>\n\
         <p style=\"margin: 5px 0 0 0; color: #a0aec0; font-size: 12px;\">\
         Morning digest &#8226; {date_str}</p>\n\
         </div>\n<div style=\"padding: 25px;\">\n"
    );

    for record in records {
        html.push_str(&format!(
            "<div style=\"margin-bottom: 25px; padding-bottom: 20px; \
             border-bottom: 1px dashed #e2e8f0;\">\n\
             <span style=\"font-size: 11px; font-weight: bold; color: #2962ff; \
             text-transform: uppercase; letter-spacing: 1px;\">{instrument}</span>\n\
             <a href=\"{link}\" style=\"display: block; color: #1a202c; font-size: 16px; \
             font-weight: bold; text-decoration: none; margin: 8px 0; line-height: 1.4;\">\
             {title}</a>\n\
             <p style=\"color: #4a5568; font-size: 14px; margin: 0; line-height: 1.6;\">\
             {take}</p>\n</div>\n",
            instrument = escape_html(&record.instrument),
            link = escape_html(&record.article.link),
            title = escape_html(&record.article.title),
            take = escape_html(&record.analysis.email_take),
        ));
    }

    // No publish URL configured means no footer link, not a dead anchor.
    if !dashboard_url.is_empty() {
        html.push_str(&format!(
            "<p style=\"font-size: 13px; text-align: center; margin: 0;\">\
             <a href=\"{url}\" style=\"color: #2962ff;\">Open the full dashboard</a></p>\n",
            url = escape_html(dashboard_url),
        ));
    }
    html.push_str("</div></div></body>\n");
    html
}
